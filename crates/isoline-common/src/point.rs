//! Sample points and line segments.

use serde::{Deserialize, Serialize};

/// A sampled location: spatial coordinates plus the field value there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl SamplePoint {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to `other` in the x/y plane.
    pub fn distance_2d(&self, other: &SamplePoint) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// A straight contour piece confined to a single grid cell.
///
/// Both endpoints carry the isovalue that produced them in `z`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub start: SamplePoint,
    pub end: SamplePoint,
}

impl LineSegment {
    pub fn new(start: SamplePoint, end: SamplePoint) -> Self {
        Self { start, end }
    }

    /// Length of the segment in the x/y plane.
    pub fn length(&self) -> f64 {
        self.start.distance_2d(&self.end)
    }

    /// The isovalue this segment was extracted for.
    pub fn level(&self) -> f64 {
        self.start.z
    }

    /// Same segment traversed the other way.
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }
}
