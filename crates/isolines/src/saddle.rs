//! Disambiguation of the two saddle cases (codes 5 and 10).
//!
//! In a saddle cell the diagonal corners alternate above/below the isovalue,
//! so the contour may either cut off the top-left/bottom-right corners or the
//! top-right/bottom-left corners. The cell average decides which. This is a
//! per-cell heuristic and makes no guarantee about loop consistency across
//! the whole grid.

use crate::classify::Cell;
use crate::extract::Edge;

/// Resolved geometry of a saddle cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Saddle {
    /// Two segments, left-top and bottom-right: the top-left and
    /// bottom-right corners are isolated.
    SeparateTopLeft,
    /// Two segments, top-right and left-bottom: the top-right and
    /// bottom-left corners are isolated.
    SeparateTopRight,
}

impl Saddle {
    /// Edge pairs (start, end) for the two segments of this saddle.
    pub fn edges(&self) -> &'static [(Edge, Edge)] {
        match self {
            Saddle::SeparateTopLeft => &[(Edge::Left, Edge::Top), (Edge::Bottom, Edge::Right)],
            Saddle::SeparateTopRight => &[(Edge::Top, Edge::Right), (Edge::Left, Edge::Bottom)],
        }
    }
}

/// Pick the saddle geometry for `cell` at `isovalue`.
///
/// `(average > isovalue) XOR (top_left > isovalue)` selects
/// [`Saddle::SeparateTopLeft`]; otherwise [`Saddle::SeparateTopRight`].
pub fn resolve_saddle(cell: &Cell, isovalue: f64) -> Saddle {
    let center_above = cell.average() > isovalue;
    let top_left_above = cell.top_left.z > isovalue;

    if center_above ^ top_left_above {
        Saddle::SeparateTopLeft
    } else {
        Saddle::SeparateTopRight
    }
}
