//! Plain data row types written by output backends.

/// One agent's global position after a committed MOVE step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionRow {
    pub tick:     u64,
    pub round:    u64,
    pub agent_id: u32,
    pub x:        i32,
    pub y:        i32,
}

/// One lattice point shared by two or more agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionRow {
    pub tick:  u64,
    pub round: u64,
    pub x:     i32,
    pub y:     i32,
}
