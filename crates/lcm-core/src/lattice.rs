//! Discrete 2D lattice coordinates.
//!
//! `LatticePoint` is an integer grid coordinate.  It is `Copy`, so every
//! position handed between the scheduler and a policy is an independent
//! value; nothing can mutate another component's position through a shared
//! reference.
//!
//! # Bounds
//!
//! Valid coordinates lie in `-MAX_COORD..=MAX_COORD` on both axes.  The range
//! is symmetric so that mirroring a valid point always yields a valid point;
//! `i32::MIN` is the one value excluded.  Movement goes through
//! [`LatticePoint::checked_add`] and [`LatticePoint::checked_step`], which
//! return `None` instead of leaving the range.

use std::fmt;

/// Largest absolute coordinate value on either axis.
pub const MAX_COORD: i32 = i32::MAX;

/// An integer coordinate on the 2D lattice.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatticePoint {
    pub x: i32,
    pub y: i32,
}

impl LatticePoint {
    pub const ORIGIN: LatticePoint = LatticePoint { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates lie in `-MAX_COORD..=MAX_COORD`.
    #[inline]
    pub const fn in_bounds(self) -> bool {
        self.x != i32::MIN && self.y != i32::MIN
    }

    /// Chebyshev (king-move) distance: `max(|dx|, |dy|)`.
    ///
    /// Two points one diagonal or orthogonal step apart are at distance 1.
    #[inline]
    pub fn chebyshev(self, other: LatticePoint) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// `self + rhs`, or `None` if the sum leaves the valid range.
    #[inline]
    pub fn checked_add(self, rhs: LatticePoint) -> Option<LatticePoint> {
        let p = LatticePoint::new(self.x.checked_add(rhs.x)?, self.y.checked_add(rhs.y)?);
        p.in_bounds().then_some(p)
    }

    /// The neighbouring point one unit step in direction `d`, or `None` at
    /// the edge of the valid range.
    #[inline]
    pub fn checked_step(self, d: Direction) -> Option<LatticePoint> {
        self.checked_add(d.delta())
    }

    /// Component-wise `signum`, i.e. the unit king-move towards `self`
    /// when `self` is read as a displacement.
    #[inline]
    pub fn signum(self) -> LatticePoint {
        LatticePoint::new(self.x.signum(), self.y.signum())
    }
}

impl fmt::Display for LatticePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the four axis-aligned unit moves.
///
/// `Up` is `+y`, `Right` is `+x`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The unit displacement for this direction.
    #[inline]
    pub fn delta(self) -> LatticePoint {
        match self {
            Direction::Up    => LatticePoint::new(0, 1),
            Direction::Down  => LatticePoint::new(0, -1),
            Direction::Left  => LatticePoint::new(-1, 0),
            Direction::Right => LatticePoint::new(1, 0),
        }
    }

    /// Horizontal direction of travel for a signed x displacement.
    /// Zero maps to `Left`, matching a path that never uses it.
    #[inline]
    pub fn horizontal(dx: i32) -> Direction {
        if dx > 0 { Direction::Right } else { Direction::Left }
    }

    /// Vertical direction of travel for a signed y displacement.
    #[inline]
    pub fn vertical(dy: i32) -> Direction {
        if dy > 0 { Direction::Up } else { Direction::Down }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up    => "up",
            Direction::Down  => "down",
            Direction::Left  => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
