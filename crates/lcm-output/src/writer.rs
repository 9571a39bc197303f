//! The `OutputWriter` trait implemented by backend writers.

use crate::{CollisionRow, OutputResult, PositionRow};

/// Sink for trajectory rows.
///
/// Errors are stored by [`TrajectoryObserver`][crate::TrajectoryObserver]
/// because observer callbacks have no return value.
pub trait OutputWriter {
    /// Write a batch of positions, typically one row per agent.
    fn write_positions(&mut self, rows: &[PositionRow]) -> OutputResult<()>;

    fn write_collisions(&mut self, rows: &[CollisionRow]) -> OutputResult<()>;

    /// Flush all underlying file handles.  Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
