//! Seeded random streams for policies and scenario setup.
//!
//! # Stream layout
//!
//! Agent `i` draws from its own `SmallRng`, seeded with
//!
//!   global_seed XOR (i * MIXING_CONSTANT)
//!
//! where the constant is the golden-ratio fraction scaled to 64 bits.  Every
//! policy therefore sees the same sequence on replay regardless of how often
//! its neighbours drew, and growing the population leaves the streams of the
//! agents already present untouched.
//!
//! Setup code (scattering start points) uses a separate [`SimRng`] so that it
//! never consumes draws from an agent stream.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// The random stream an agent's policy draws from during COMPUTE.
pub struct AgentRng(SmallRng);

impl AgentRng {
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ u64::from(agent.0).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// One stream per agent, indexed by agent id.
    pub fn for_agents(global_seed: u64, count: usize) -> Vec<AgentRng> {
        AgentId::range(count)
            .map(|agent| AgentRng::new(global_seed, agent))
            .collect()
    }

    /// Uniform draw from `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Stream for setup work outside the round loop.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Split off an independent stream keyed by `offset`.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
