//! Observer hook for diagnostics and data collection.

use lcm_core::{LatticePoint, Tick};
use lcm_policy::Path;

use crate::{CollisionReport, RoundState, Snapshot};

/// Callbacks invoked by [`Scheduler::advance_with`][crate::Scheduler::advance_with]
/// at key points of the round state machine.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Observers receive copies or shared borrows
/// only; they cannot alter scheduler state.
///
/// # Example: round printer
///
/// ```rust,ignore
/// struct RoundPrinter;
///
/// impl RoundObserver for RoundPrinter {
///     fn on_transition(&mut self, _tick: Tick, round: u64, _from: RoundState, to: RoundState) {
///         if to == RoundState::Look {
///             println!("round {round}");
///         }
///     }
/// }
/// ```
pub trait RoundObserver {
    /// Called once per state change, after the change took effect.
    fn on_transition(&mut self, _tick: Tick, _round: u64, _from: RoundState, _to: RoundState) {}

    /// Called at the end of LOOK with the frozen global snapshot.
    fn on_look(&mut self, _tick: Tick, _snapshot: &Snapshot) {}

    /// Called at the end of COMPUTE with every agent's fresh path (local
    /// frames), indexed by `AgentId`.
    fn on_paths(&mut self, _tick: Tick, _round: u64, _paths: &[Path]) {}

    /// Called after every committed MOVE step with the new global positions.
    fn on_commit(&mut self, _tick: Tick, _round: u64, _positions: &[LatticePoint]) {}

    /// Called whenever a post-commit collision check finds shared lattice
    /// points.  The construction-time check happens before any observer is
    /// attached; read it from `Scheduler::last_collision`.
    fn on_collision(&mut self, _tick: Tick, _round: u64, _report: &CollisionReport) {}
}

/// A [`RoundObserver`] that does nothing.
pub struct NoopObserver;

impl RoundObserver for NoopObserver {}
