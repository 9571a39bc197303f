//! The `DecisionPolicy` trait: the main extension point for user code.

use lcm_core::AgentRng;

use crate::{Path, View};

/// Pluggable per-agent decision algorithm (the "Compute" of Look-Compute-Move).
///
/// Each agent owns one boxed policy, so a single simulation can mix
/// behaviours freely.  The scheduler calls [`decide`][Self::decide] exactly
/// once per agent per round.
///
/// # Contract
///
/// - Pure apart from `rng`: the returned path depends only on `view` and the
///   draws taken from the agent's own RNG.  No shared state is mutated.
/// - Non-blocking.
/// - The path is expressed in the agent's local frame, the same frame as
///   `view`.  An empty path means "at rest this round".
///
/// Paths are expected to be finite; the scheduler has no watchdog for a
/// policy that keeps the agent moving forever.
///
/// # Example
///
/// ```rust
/// use lcm_core::{AgentRng, LatticePoint};
/// use lcm_policy::{DecisionPolicy, Path, View};
///
/// /// Step once towards the first landmark, if any.
/// struct Homing;
///
/// impl DecisionPolicy for Homing {
///     fn decide(&self, view: &View<'_>, _rng: &mut AgentRng) -> Path {
///         let me = view.own_position();
///         match view.landmarks.first() {
///             Some(&target) if target != me => {
///                 let toward = LatticePoint::new(
///                     target.x.cmp(&me.x) as i32,
///                     target.y.cmp(&me.y) as i32,
///                 );
///                 me.checked_add(toward).into_iter().collect()
///             }
///             _ => Path::empty(),
///         }
///     }
/// }
/// ```
pub trait DecisionPolicy: Send + Sync + 'static {
    fn decide(&self, view: &View<'_>, rng: &mut AgentRng) -> Path;

    /// Short label used in log lines and output files.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
