//! `lcm-core`: foundational types for the `rust_lcm` Look-Compute-Move engine.
//!
//! This crate is a dependency of every other `lcm-*` crate.  It has no
//! `lcm-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module            | Contents                                              |
//! |-------------------|-------------------------------------------------------|
//! | [`ids`]           | `AgentId`                                             |
//! | [`lattice`]       | `LatticePoint`, `Direction`, bounds-checked moves     |
//! | [`orientation`]   | `Orientation`: local ↔ global frame adapter           |
//! | [`time`]          | `Tick`, `LcmConfig`                                   |
//! | [`rng`]           | `AgentRng` (per-agent), `SimRng` (global)             |
//! | [`error`]         | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod error;
pub mod ids;
pub mod lattice;
pub mod orientation;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::AgentId;
pub use lattice::{Direction, LatticePoint, MAX_COORD};
pub use orientation::Orientation;
pub use rng::{AgentRng, SimRng};
pub use time::{LcmConfig, Tick};
