//! Duplicate-occupancy detection over a set of global positions.

use lcm_core::LatticePoint;

#[cfg(feature = "fx-hash")]
type PointSet = rustc_hash::FxHashSet<LatticePoint>;
#[cfg(not(feature = "fx-hash"))]
type PointSet = std::collections::HashSet<LatticePoint>;

/// Result of one collision scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollisionReport {
    /// Every lattice point occupied by more than one agent, each listed once,
    /// in order of the first repeated occurrence.
    pub points: Vec<LatticePoint>,
}

impl CollisionReport {
    #[inline]
    pub fn is_collision(&self) -> bool {
        !self.points.is_empty()
    }
}

/// Scan `positions` (one global position per agent) for shared lattice points.
///
/// Pure and stateless; O(n) expected time.
pub fn detect_collisions(positions: &[LatticePoint]) -> CollisionReport {
    let mut seen = PointSet::default();
    let mut reported = PointSet::default();
    let mut points = Vec::new();
    for &p in positions {
        if !seen.insert(p) && reported.insert(p) {
            points.push(p);
        }
    }
    CollisionReport { points }
}
