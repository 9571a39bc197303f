//! Paths: the waypoint sequence an agent commits to for one round.

use std::collections::VecDeque;

use lcm_core::LatticePoint;

/// An ordered, finite sequence of waypoints in the owning agent's local frame.
///
/// Produced by [`DecisionPolicy::decide`][crate::DecisionPolicy::decide] and
/// consumed front-to-back by the scheduler's Move phase, one waypoint per
/// committed step.  An empty path means the agent stays put this round.
///
/// The start position is not part of the path; the first waypoint is the
/// first position the agent moves *to*.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    waypoints: VecDeque<LatticePoint>,
}

impl Path {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn push(&mut self, waypoint: LatticePoint) {
        self.waypoints.push_back(waypoint);
    }

    /// Remove and return the next waypoint.
    pub fn pop(&mut self) -> Option<LatticePoint> {
        self.waypoints.pop_front()
    }

    pub fn peek(&self) -> Option<LatticePoint> {
        self.waypoints.front().copied()
    }

    /// The final waypoint, i.e. where the agent ends the round.
    pub fn destination(&self) -> Option<LatticePoint> {
        self.waypoints.back().copied()
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LatticePoint> {
        self.waypoints.iter()
    }

    /// Drop every remaining waypoint.
    pub fn clear(&mut self) {
        self.waypoints.clear();
    }
}

impl FromIterator<LatticePoint> for Path {
    fn from_iter<I: IntoIterator<Item = LatticePoint>>(iter: I) -> Self {
        Self { waypoints: iter.into_iter().collect() }
    }
}

impl From<Vec<LatticePoint>> for Path {
    fn from(v: Vec<LatticePoint>) -> Self {
        Self { waypoints: v.into() }
    }
}

impl IntoIterator for Path {
    type Item = LatticePoint;
    type IntoIter = std::collections::vec_deque::IntoIter<LatticePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.waypoints.into_iter()
    }
}
