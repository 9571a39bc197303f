//! Read-only Look snapshot passed to every decision policy.

use lcm_core::{AgentId, LatticePoint};

/// One agent's view of the world for the current round, already transformed
/// into that agent's local frame.
///
/// The scheduler builds one `View` per agent from a single frozen snapshot,
/// so every agent in a round sees the same world (up to its own frame).
///
/// # Lifetimes
///
/// The slices borrow the scheduler's per-round buffers and live for the
/// duration of one Compute phase.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    /// The agent this view was built for.
    pub agent: AgentId,

    /// Round number the snapshot was taken in (1-based).
    pub round: u64,

    /// Every agent's position, indexed by `AgentId`, in `agent`'s frame.
    /// Includes `agent` itself.
    pub agents: &'a [LatticePoint],

    /// Every landmark, in `agent`'s frame.
    pub landmarks: &'a [LatticePoint],
}

impl<'a> View<'a> {
    #[inline]
    pub fn new(
        agent:     AgentId,
        round:     u64,
        agents:    &'a [LatticePoint],
        landmarks: &'a [LatticePoint],
    ) -> Self {
        Self { agent, round, agents, landmarks }
    }

    /// The viewing agent's own position (its local position).
    #[inline]
    pub fn own_position(&self) -> LatticePoint {
        self.agents[self.agent.index()]
    }

    /// Positions of every agent except the viewer, in index order.
    pub fn others(&self) -> impl Iterator<Item = (AgentId, LatticePoint)> + '_ {
        self.agents
            .iter()
            .enumerate()
            .filter(move |&(i, _)| i != self.agent.index())
            .map(|(i, &p)| (AgentId(i as u32), p))
    }
}
