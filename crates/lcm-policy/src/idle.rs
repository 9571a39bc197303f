//! A policy that never moves.

use lcm_core::AgentRng;

use crate::{DecisionPolicy, Path, View};

/// A [`DecisionPolicy`] that always returns the empty path.
///
/// Useful as a placeholder in tests or for stationary agents that only
/// occupy a lattice point.
pub struct Idle;

impl DecisionPolicy for Idle {
    fn decide(&self, _view: &View<'_>, _rng: &mut AgentRng) -> Path {
        Path::empty()
    }

    fn name(&self) -> &str {
        "idle"
    }
}
