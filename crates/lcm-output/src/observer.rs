//! `TrajectoryObserver<W>`: bridges `RoundObserver` to an `OutputWriter`.

use lcm_core::{LatticePoint, Tick};
use lcm_sim::{CollisionReport, Completion, RoundObserver, Scheduler};

use crate::row::{CollisionRow, PositionRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`RoundObserver`] that writes every committed position set and every
/// detected collision to an [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  Check them with [`take_error`][Self::take_error]
/// or let [`finish`][Self::finish] return the first one.
pub struct TrajectoryObserver<W: OutputWriter> {
    writer:             W,
    positions_written:  u64,
    collisions_written: u64,
    last_error:         Option<OutputError>,
}

impl<W: OutputWriter> TrajectoryObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            positions_written:  0,
            collisions_written: 0,
            last_error:         None,
        }
    }

    /// Write the scheduler's current global positions, tagged with its
    /// current tick and round.  Call before the first step to capture the
    /// starting configuration.
    pub fn record_initial<C: Completion>(&mut self, sched: &Scheduler<C>) {
        let positions = sched.global_positions();
        self.write_positions(sched.tick(), sched.current_round(), &positions);
    }

    /// Take the stored write error (if any).
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer.  Returns the first stored error, if any, before
    /// the flush result.
    pub fn finish(&mut self) -> OutputResult<()> {
        if let Some(e) = self.last_error.take() {
            return Err(e);
        }
        self.writer.finish()
    }

    pub fn positions_written(&self) -> u64 {
        self.positions_written
    }

    pub fn collisions_written(&self) -> u64 {
        self.collisions_written
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn write_positions(&mut self, tick: Tick, round: u64, positions: &[LatticePoint]) {
        let rows: Vec<PositionRow> = positions
            .iter()
            .enumerate()
            .map(|(i, p)| PositionRow {
                tick: tick.0,
                round,
                agent_id: i as u32,
                x: p.x,
                y: p.y,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_positions(&rows);
            if result.is_ok() {
                self.positions_written += rows.len() as u64;
            }
            self.store_err(result);
        }
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> RoundObserver for TrajectoryObserver<W> {
    fn on_commit(&mut self, tick: Tick, round: u64, positions: &[LatticePoint]) {
        self.write_positions(tick, round, positions);
    }

    fn on_collision(&mut self, tick: Tick, round: u64, report: &CollisionReport) {
        let rows: Vec<CollisionRow> = report
            .points
            .iter()
            .map(|p| CollisionRow { tick: tick.0, round, x: p.x, y: p.y })
            .collect();
        let result = self.writer.write_collisions(&rows);
        if result.is_ok() {
            self.collisions_written += rows.len() as u64;
        }
        self.store_err(result);
    }
}
