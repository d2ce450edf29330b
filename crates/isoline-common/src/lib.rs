//! Common types shared across the isoline workspace.

pub mod error;
pub mod field;
pub mod point;

pub use error::{ContourError, ContourResult};
pub use field::{ScalarField, ScanOrder};
pub use point::{LineSegment, SamplePoint};
