//! `lcm-sim`: the synchronous Look-Compute-Move round scheduler.
//!
//! # Round state machine
//!
//! ```text
//! start():  READY → CYCLE
//! tick:     CYCLE   → round += 1                                   → LOOK
//!           LOOK    → freeze global positions, build per-frame views
//!                     → DONE if the completion predicate holds, else COMPUTE
//!           COMPUTE → DecisionPolicy::decide for every agent (index order)
//!                                                                  → MOVE
//!           MOVE    → every `ticks_per_step` ticks: pop one waypoint per
//!                     non-empty path, commit, check collisions
//!                     → ERROR on collision (if configured)
//!                     → CYCLE once every path is empty
//! ```
//!
//! Every agent decides from the same LOOK snapshot, so no agent ever sees
//! another agent's mid-round position.
//!
//! # Cargo features
//!
//! | Feature  | Effect                                                 |
//! |----------|--------------------------------------------------------|
//! | `fx-hash`| FxHash instead of SipHash in the collision detector.   |
//! | `serde`  | Serde derives on `RoundState`, `Command`, `CollisionReport`. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lcm_core::{LcmConfig, Orientation};
//! use lcm_policy::{DecisionPolicy, RandomWalk};
//! use lcm_sim::{NoopObserver, SchedulerBuilder};
//!
//! let policies: Vec<Box<dyn DecisionPolicy>> =
//!     vec![Box::new(RandomWalk::default()), Box::new(RandomWalk::default())];
//! let mut sched = SchedulerBuilder::new(LcmConfig::default(), policies)
//!     .orientations(vec![Orientation::Aligned, Orientation::Mirrored])
//!     .initial_positions(positions)
//!     .build()?;
//! sched.start();
//! sched.run_ticks(100, &mut NoopObserver);
//! ```

mod agent;

pub mod builder;
pub mod collision;
pub mod command;
pub mod completion;
pub mod error;
pub mod observer;
pub mod scheduler;
pub mod state;


pub use builder::SchedulerBuilder;
pub use collision::{CollisionReport, detect_collisions};
pub use command::{Command, CommandSender};
pub use completion::{AllOnLandmarks, Completion, NeverComplete, Snapshot};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, RoundObserver};
pub use scheduler::Scheduler;
pub use state::RoundState;
