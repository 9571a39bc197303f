//! `lcm-output`: trajectory writers for the rust_lcm engine.
//!
//! | Backend | Files created                        |
//! |---------|--------------------------------------|
//! | CSV     | `positions.csv`, `collisions.csv`    |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`TrajectoryObserver`], which implements `lcm_sim::RoundObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lcm_output::{CsvWriter, TrajectoryObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = TrajectoryObserver::new(writer);
//! obs.record_initial(&sched);
//! sched.run_ticks(1_000, &mut obs);
//! obs.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TrajectoryObserver;
pub use row::{CollisionRow, PositionRow};
pub use writer::OutputWriter;
