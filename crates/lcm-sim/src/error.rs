use lcm_core::{CoreError, LatticePoint};
use thiserror::Error;

/// Errors returned by the scheduler builder and the command channel.
///
/// Collisions are not errors: they are an observable outcome of the modelled
/// system and surface as [`RoundState::Error`][crate::RoundState::Error].
#[derive(Debug, Error)]
pub enum SimError {
    #[error("scheduler configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    /// A coordinate equal to `i32::MIN`, which has no mirror image.
    #[error("{what} {index} at {point} lies outside the lattice bounds")]
    OutOfBounds {
        what:  &'static str,
        index: usize,
        point: LatticePoint,
    },

    #[error("agent count {0} exceeds the AgentId range")]
    TooManyAgents(usize),

    #[error("scheduler has been dropped; command not delivered")]
    Disconnected,
}

pub type SimResult<T> = Result<T, SimError>;
