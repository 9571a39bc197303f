//! Global completion predicates evaluated during LOOK.

use lcm_core::LatticePoint;

/// The frozen global-frame positions captured in a LOOK phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    /// Round the snapshot was taken in.
    pub round: u64,
    /// Global position of every agent, indexed by `AgentId`.
    pub agents: Vec<LatticePoint>,
    /// Global position of every landmark.
    pub landmarks: Vec<LatticePoint>,
}

/// Decides, from a LOOK snapshot, whether the run has reached its goal.
///
/// Returning `true` moves the scheduler to the terminal `Done` state before
/// any policy is consulted for that round.
///
/// Any `Fn(&Snapshot) -> bool` closure is a predicate.
pub trait Completion: Send + Sync + 'static {
    fn is_complete(&self, snapshot: &Snapshot) -> bool;
}

/// Never reports completion.  The run continues until an error state or
/// until the driver stops ticking.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverComplete;

impl Completion for NeverComplete {
    fn is_complete(&self, _snapshot: &Snapshot) -> bool {
        false
    }
}

/// Complete once every agent stands on some landmark.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllOnLandmarks;

impl Completion for AllOnLandmarks {
    fn is_complete(&self, snapshot: &Snapshot) -> bool {
        snapshot.agents.iter().all(|p| snapshot.landmarks.contains(p))
    }
}

impl<F> Completion for F
where
    F: Fn(&Snapshot) -> bool + Send + Sync + 'static,
{
    fn is_complete(&self, snapshot: &Snapshot) -> bool {
        self(snapshot)
    }
}
