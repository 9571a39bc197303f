//! JSON scenario format for the demo.
//!
//! ```json
//! {
//!   "config":    { "ticks_per_step": 2, "error_on_collision": true, "seed": 7 },
//!   "ticks":     5000,
//!   "agents": [
//!     { "policy": { "kind": "random_walk" }, "orientation": "aligned" },
//!     { "policy": { "kind": "fixed_walk", "dx": 3, "dy": -2 },
//!       "orientation": "mirrored", "start": { "x": 4, "y": 0 } }
//!   ],
//!   "landmarks": [{ "x": 0, "y": 0 }],
//!   "scatter":   20
//! }
//! ```
//!
//! Every field is optional.  Agents without a `start` are scattered
//! uniformly over `[-scatter, scatter)` in both axes, avoiding occupied
//! global points.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use lcm_core::{LatticePoint, LcmConfig, Orientation, SimRng};
use lcm_policy::{AxisWalk, DecisionPolicy, FixedWalk, Idle, RandomWalk};

/// Give up scattering after this many draws per agent.
const MAX_SCATTER_ATTEMPTS: usize = 1_000;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub config:            LcmConfig,
    /// Upper bound on `advance()` calls.
    pub ticks:             u64,
    pub agents:            Vec<AgentEntry>,
    /// Global frame.
    pub landmarks:         Vec<LatticePoint>,
    pub scatter:           i32,
    /// End the run once every agent stands on a landmark.
    pub stop_on_landmarks: bool,
    pub output_dir:        PathBuf,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AgentEntry {
    pub policy:      PolicyKind,
    pub orientation: Orientation,
    /// Starting position in the agent's local frame.
    pub start:       Option<LatticePoint>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PolicyKind {
    RandomWalk {
        #[serde(default)]
        range: Option<(i32, i32)>,
    },
    AxisWalk {
        #[serde(default)]
        range: Option<(i32, i32)>,
    },
    FixedWalk { dx: i32, dy: i32 },
    Idle,
}

impl Default for PolicyKind {
    fn default() -> Self {
        PolicyKind::RandomWalk { range: None }
    }
}

impl PolicyKind {
    pub fn build(&self) -> Result<Box<dyn DecisionPolicy>> {
        Ok(match *self {
            PolicyKind::RandomWalk { range: None } => Box::new(RandomWalk::default()),
            PolicyKind::RandomWalk { range: Some((lo, hi)) } => Box::new(RandomWalk::new(lo..hi)?),
            PolicyKind::AxisWalk { range: None } => Box::new(AxisWalk::default()),
            PolicyKind::AxisWalk { range: Some((lo, hi)) } => Box::new(AxisWalk::new(lo..hi)?),
            PolicyKind::FixedWalk { dx, dy } => Box::new(FixedWalk::new(dx, dy)),
            PolicyKind::Idle => Box::new(Idle),
        })
    }
}

impl Default for Scenario {
    /// Six random walkers with alternating chirality around three landmarks.
    fn default() -> Self {
        let agents = (0..6)
            .map(|i| AgentEntry {
                orientation: Orientation::from_aligned(i % 2 == 0),
                ..AgentEntry::default()
            })
            .collect();
        Self {
            config:            LcmConfig::default(),
            ticks:             2_000,
            agents,
            landmarks:         vec![
                LatticePoint::new(0, 0),
                LatticePoint::new(8, -4),
                LatticePoint::new(-6, 6),
            ],
            scatter:           20,
            stop_on_landmarks: false,
            output_dir:        PathBuf::from("output/random_walk"),
        }
    }
}

impl Scenario {
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing scenario {}", path.display()))
    }

    pub fn policies(&self) -> Result<Vec<Box<dyn DecisionPolicy>>> {
        self.agents.iter().map(|a| a.policy.build()).collect()
    }

    pub fn orientations(&self) -> Vec<Orientation> {
        self.agents.iter().map(|a| a.orientation).collect()
    }

    /// Local starting positions: explicit ones as given, the rest scattered
    /// so that no two agents share a global point.
    pub fn initial_positions(&self, rng: &mut SimRng) -> Result<Vec<LatticePoint>> {
        let mut taken: HashSet<LatticePoint> = self
            .agents
            .iter()
            .filter_map(|a| a.start.map(|s| a.orientation.to_global(s)))
            .collect();

        self.agents
            .iter()
            .map(|a| match a.start {
                Some(start) => Ok(start),
                None => {
                    let global = scatter_point(self.scatter, &taken, rng)?;
                    taken.insert(global);
                    Ok(a.orientation.to_local(global))
                }
            })
            .collect()
    }
}

fn scatter_point(
    scatter: i32,
    taken:   &HashSet<LatticePoint>,
    rng:     &mut SimRng,
) -> Result<LatticePoint> {
    if scatter <= 0 {
        bail!("scatter must be positive to place agents without a start position");
    }
    for _ in 0..MAX_SCATTER_ATTEMPTS {
        let p = LatticePoint::new(
            rng.gen_range(-scatter..scatter),
            rng.gen_range(-scatter..scatter),
        );
        if !taken.contains(&p) {
            return Ok(p);
        }
    }
    bail!("no free lattice point within scatter radius {scatter}")
}
