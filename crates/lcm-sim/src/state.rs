//! The round state machine's states.

use std::fmt;

/// Where the scheduler is in the Look-Compute-Move cycle.
///
/// ```text
///   READY ──start──▶ CYCLE ──▶ LOOK ──▶ COMPUTE ──▶ MOVE ──┐
///                      ▲         │                  │  ▲   │
///                      │         ▼                  │  └───┘ (pacing / waypoints left)
///                      │       DONE                 ▼
///                      └──────────────────────── all paths empty
///                                                   │
///                                       collision ──▶ ERROR
/// ```
///
/// `Paused` is only entered through an explicit pause command and only left
/// through resume.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundState {
    Ready,
    Cycle,
    Look,
    Compute,
    Move,
    Done,
    Paused,
    Error,
}

impl RoundState {
    /// `Done` and `Error` never transition again.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, RoundState::Done | RoundState::Error)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RoundState::Ready   => "ready",
            RoundState::Cycle   => "cycle",
            RoundState::Look    => "look",
            RoundState::Compute => "compute",
            RoundState::Move    => "move",
            RoundState::Done    => "done",
            RoundState::Paused  => "paused",
            RoundState::Error   => "error",
        }
    }
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
