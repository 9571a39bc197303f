//! Per-agent state owned by the scheduler.

use lcm_core::{LatticePoint, Orientation};
use lcm_policy::DecisionPolicy;

/// One simulated robot.
///
/// The position is stored in the agent's own local frame; the global position
/// is derived through the orientation on every read and never cached.  Only
/// the scheduler's MOVE phase writes `local`.
pub(crate) struct Agent {
    pub(crate) local:       LatticePoint,
    pub(crate) orientation: Orientation,
    pub(crate) policy:      Box<dyn DecisionPolicy>,
}

impl Agent {
    #[inline]
    pub(crate) fn global_position(&self) -> LatticePoint {
        self.orientation.to_global(self.local)
    }
}
