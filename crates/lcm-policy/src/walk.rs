//! Walk policies and the path builders they share.
//!
//! # Path shapes
//!
//! | Builder           | Step set        | Length (absolute)        |
//! |-------------------|-----------------|--------------------------|
//! | [`diagonal_path`] | king moves      | larger of the two deltas |
//! | [`axis_path`]     | rook unit moves | sum of the two deltas    |
//!
//! Both end at `start + (dx, dy)` and never include `start` itself.  A path
//! that would leave the valid coordinate range stops at the last in-range
//! waypoint, so an agent pressed against the edge simply stays there.

use std::ops::Range;

use lcm_core::{AgentRng, Direction, LatticePoint};

use crate::{DecisionPolicy, Path, PolicyError, PolicyResult, View};

/// Default half-open sampling range for walk deltas.
pub const DEFAULT_DELTA_RANGE: Range<i32> = -10..10;

// ── Path builders ─────────────────────────────────────────────────────────────

/// King-move path from `start` to `start + (dx, dy)`.
///
/// Each step moves `(sign(dx), sign(dy))` on the remaining displacement, so
/// the walk goes diagonally until one axis is exhausted and then straight.
/// Consecutive waypoints (and `start` → first waypoint) are exactly 1 apart
/// in Chebyshev distance.
pub fn diagonal_path(start: LatticePoint, dx: i32, dy: i32) -> Path {
    let mut remaining = LatticePoint::new(dx, dy);
    let mut at = start;
    let mut path = Path::empty();
    while remaining != LatticePoint::ORIGIN {
        let step = remaining.signum();
        let Some(next) = at.checked_add(step) else { break };
        at = next;
        // Moves towards zero one unit per axis, so it cannot overflow.
        remaining = LatticePoint::new(remaining.x - step.x, remaining.y - step.y);
        path.push(at);
    }
    path
}

/// Rook-move path from `start` to `start + (dx, dy)`: all x steps first,
/// then all y steps.
pub fn axis_path(start: LatticePoint, dx: i32, dy: i32) -> Path {
    let horizontal = std::iter::repeat_n(Direction::horizontal(dx), dx.unsigned_abs() as usize);
    let vertical = std::iter::repeat_n(Direction::vertical(dy), dy.unsigned_abs() as usize);

    let mut at = start;
    horizontal
        .chain(vertical)
        .map_while(|d| {
            at = at.checked_step(d)?;
            Some(at)
        })
        .collect()
}

fn check_range(range: &Range<i32>) -> PolicyResult<()> {
    if range.is_empty() {
        return Err(PolicyError::Config(format!(
            "walk delta range {}..{} is empty",
            range.start, range.end
        )));
    }
    Ok(())
}

// ── RandomWalk ────────────────────────────────────────────────────────────────

/// Reference random-walk policy.
///
/// Each round, samples `dx` and `dy` independently and uniformly from
/// `range` (half-open) and returns the [`diagonal_path`] to
/// `own_position + (dx, dy)`.  Ignores other agents and landmarks.
#[derive(Debug, Clone)]
pub struct RandomWalk {
    range: Range<i32>,
}

impl RandomWalk {
    pub fn new(range: Range<i32>) -> PolicyResult<Self> {
        check_range(&range)?;
        Ok(Self { range })
    }

    pub fn range(&self) -> Range<i32> {
        self.range.clone()
    }
}

impl Default for RandomWalk {
    fn default() -> Self {
        Self { range: DEFAULT_DELTA_RANGE }
    }
}

impl DecisionPolicy for RandomWalk {
    fn decide(&self, view: &View<'_>, rng: &mut AgentRng) -> Path {
        let dx = rng.gen_range(self.range.clone());
        let dy = rng.gen_range(self.range.clone());
        diagonal_path(view.own_position(), dx, dy)
    }

    fn name(&self) -> &str {
        "random_walk"
    }
}

// ── AxisWalk ──────────────────────────────────────────────────────────────────

/// Random walk restricted to unit axis moves: x first, then y.
#[derive(Debug, Clone)]
pub struct AxisWalk {
    range: Range<i32>,
}

impl AxisWalk {
    pub fn new(range: Range<i32>) -> PolicyResult<Self> {
        check_range(&range)?;
        Ok(Self { range })
    }
}

impl Default for AxisWalk {
    fn default() -> Self {
        Self { range: DEFAULT_DELTA_RANGE }
    }
}

impl DecisionPolicy for AxisWalk {
    fn decide(&self, view: &View<'_>, rng: &mut AgentRng) -> Path {
        let dx = rng.gen_range(self.range.clone());
        let dy = rng.gen_range(self.range.clone());
        axis_path(view.own_position(), dx, dy)
    }

    fn name(&self) -> &str {
        "axis_walk"
    }
}

// ── FixedWalk ─────────────────────────────────────────────────────────────────

/// Deterministic walk: the same displacement `(dx, dy)` every round, along
/// the [`diagonal_path`].  Never touches the RNG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWalk {
    pub dx: i32,
    pub dy: i32,
}

impl FixedWalk {
    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

impl DecisionPolicy for FixedWalk {
    fn decide(&self, view: &View<'_>, _rng: &mut AgentRng) -> Path {
        diagonal_path(view.own_position(), self.dx, self.dy)
    }

    fn name(&self) -> &str {
        "fixed_walk"
    }
}
