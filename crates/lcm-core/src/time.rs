//! Tick counter and engine configuration.
//!
//! A `Tick` is one external invocation of the scheduler's step operation.
//! Rounds span a variable number of ticks: one each for CYCLE, LOOK and
//! COMPUTE, then as many MOVE ticks as pacing and path lengths require.

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// Number of state-machine steps executed so far.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── LcmConfig ─────────────────────────────────────────────────────────────────

/// Scheduler configuration.
///
/// Typically loaded from a JSON scenario by the application crate and passed
/// to the scheduler builder.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LcmConfig {
    /// MOVE-phase pacing: one waypoint is committed every `ticks_per_step`
    /// ticks.  Must be at least 1.
    pub ticks_per_step: u32,

    /// Enter the terminal ERROR state as soon as two agents share a lattice
    /// point.  When `false`, collisions are recorded but the run continues.
    pub error_on_collision: bool,

    /// Master seed for per-agent RNGs.  The same seed always replays the
    /// same trajectories.
    pub seed: u64,
}

impl Default for LcmConfig {
    fn default() -> Self {
        Self {
            ticks_per_step:     1,
            error_on_collision: true,
            seed:               42,
        }
    }
}

impl LcmConfig {
    /// Reject values the scheduler cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.ticks_per_step == 0 {
            return Err(CoreError::Config("ticks_per_step must be at least 1".into()));
        }
        Ok(())
    }
}
