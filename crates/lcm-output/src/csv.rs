//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `positions.csv`
//! - `collisions.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CollisionRow, OutputResult, PositionRow};

pub const POSITIONS_FILE: &str = "positions.csv";
pub const COLLISIONS_FILE: &str = "collisions.csv";

/// Writes trajectory output to two CSV files.
pub struct CsvWriter {
    positions:  Writer<File>,
    collisions: Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open both CSV files and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut positions = Writer::from_path(dir.join(POSITIONS_FILE))?;
        positions.write_record(["tick", "round", "agent_id", "x", "y"])?;

        let mut collisions = Writer::from_path(dir.join(COLLISIONS_FILE))?;
        collisions.write_record(["tick", "round", "x", "y"])?;

        Ok(Self { positions, collisions, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_positions(&mut self, rows: &[PositionRow]) -> OutputResult<()> {
        for row in rows {
            self.positions.write_record(&[
                row.tick.to_string(),
                row.round.to_string(),
                row.agent_id.to_string(),
                row.x.to_string(),
                row.y.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_collisions(&mut self, rows: &[CollisionRow]) -> OutputResult<()> {
        for row in rows {
            self.collisions.write_record(&[
                row.tick.to_string(),
                row.round.to_string(),
                row.x.to_string(),
                row.y.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.positions.flush()?;
        self.collisions.flush()?;
        Ok(())
    }
}
