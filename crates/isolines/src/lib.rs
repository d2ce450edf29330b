//! Isoline extraction from regularly sampled 2D scalar fields.
//!
//! Implements marching squares:
//! - Corner classification into 16 topology cases
//! - Linear interpolation of crossings along cell edges
//! - Average-based resolution of the two saddle cases
//! - Single and multi-level extraction, optionally parallel

pub mod classify;
pub mod config;
pub mod extract;
pub mod interpolate;
pub mod levels;
pub mod saddle;

pub use classify::{binary_mask, classify, classify_from_mask, BinaryMask, Cell};
pub use config::{ExtractOptions, LevelSpec};
pub use extract::{cell_segments, extract_for_isovalue, march_squares, ContourExtractor, Edge};
pub use interpolate::{interpolate, midpoint};
pub use levels::{
    extract_levels, generate_contour_levels, stepped_levels, ContourLevels, LevelSegments,
};
pub use saddle::{resolve_saddle, Saddle};

pub use isoline_common::{ContourError, ContourResult, LineSegment, SamplePoint, ScalarField, ScanOrder};
