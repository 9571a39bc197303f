//! Orientation adapter: maps between an agent's local frame and the shared
//! global frame.
//!
//! # Model
//!
//! Agents agree on the direction of the y axis but not necessarily on the
//! direction of the x axis (weak chirality).  Each agent carries a fixed
//! [`Orientation`]:
//!
//! - `Aligned`: local frame equals the global frame.
//! - `Mirrored`: local x axis points the other way: `(x, y) ↔ (-x, y)`.
//!
//! The transform is an involution, so the same operation converts in both
//! directions:
//!
//!   reflect(reflect(p)) == p
//!
//! Policies never see the global frame.  The scheduler stores each agent's
//! position in that agent's local frame and derives the global position on
//! demand.

use crate::LatticePoint;

/// Whether an agent's local x axis agrees with the global x axis.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Orientation {
    #[default]
    Aligned,
    Mirrored,
}

impl Orientation {
    /// Build from the boolean "x axis aligned" flag.
    #[inline]
    pub fn from_aligned(aligned: bool) -> Self {
        if aligned { Orientation::Aligned } else { Orientation::Mirrored }
    }

    /// Reflect `p` through the y axis when mirrored; identity when aligned.
    ///
    /// Exact for every in-bounds point.  An `x` of `i32::MIN` saturates to
    /// `i32::MAX` rather than overflowing.
    #[inline]
    pub fn reflect(self, p: LatticePoint) -> LatticePoint {
        match self {
            Orientation::Aligned  => p,
            Orientation::Mirrored => LatticePoint::new(p.x.saturating_neg(), p.y),
        }
    }

    /// Local → global.
    #[inline]
    pub fn to_global(self, local: LatticePoint) -> LatticePoint {
        self.reflect(local)
    }

    /// Global → local.
    #[inline]
    pub fn to_local(self, global: LatticePoint) -> LatticePoint {
        self.reflect(global)
    }

    /// Transform a whole position set into this orientation's frame.
    ///
    /// Order is preserved, so index `i` of the output still refers to the
    /// agent (or landmark) at index `i` of the input.
    pub fn reflect_all(self, points: &[LatticePoint]) -> Vec<LatticePoint> {
        points.iter().map(|&p| self.reflect(p)).collect()
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Orientation::Aligned  => "aligned",
            Orientation::Mirrored => "mirrored",
        })
    }
}
