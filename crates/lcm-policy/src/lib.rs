//! `lcm-policy`: the decision-policy extension point.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                        |
//! |------------|-----------------------------------------------------------------|
//! | [`path`]   | `Path`: FIFO waypoint queue produced once per round            |
//! | [`view`]   | `View<'a>`: one agent's Look snapshot in its own local frame   |
//! | [`model`]  | `DecisionPolicy` trait                                          |
//! | [`walk`]   | `RandomWalk`, `AxisWalk`, `FixedWalk`, path builders            |
//! | [`idle`]   | `Idle`: never moves                                            |
//! | [`error`]  | `PolicyError`, `PolicyResult<T>`                                |
//!
//! # Design notes
//!
//! A round of the scheduler in lcm-sim works as follows:
//!
//! 1. **Look**: the scheduler freezes every agent's and landmark's global
//!    position, then builds one [`View`] per agent by reflecting the frozen
//!    set into that agent's frame.
//! 2. **Compute**: for every agent, in ascending `AgentId` order, call
//!    [`DecisionPolicy::decide`] with its view.  All calls see the same frozen
//!    snapshot.
//! 3. **Move**: the scheduler consumes the returned [`Path`]s one waypoint
//!    per step.
//!
//! Policies never learn their orientation.  Everything they see and return is
//! in their own local frame.

pub mod error;
pub mod idle;
pub mod model;
pub mod path;
pub mod view;
pub mod walk;


pub use error::{PolicyError, PolicyResult};
pub use idle::Idle;
pub use model::DecisionPolicy;
pub use path::Path;
pub use view::View;
pub use walk::{AxisWalk, FixedWalk, RandomWalk, axis_path, diagonal_path};
