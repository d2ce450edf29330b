//! Contour segment extraction using the marching squares algorithm.
//!
//! Every cell of the field is classified against the isovalue and looked up
//! in the case table below. Crossing points are linearly interpolated along
//! the cell edges. Segments are emitted per cell and are not stitched into
//! polylines.
//!
//! | code(s) | segments          |
//! |---------|-------------------|
//! | 0, 15   | none              |
//! | 1, 14   | left → bottom     |
//! | 2, 13   | bottom → right    |
//! | 3, 12   | left → right      |
//! | 4, 11   | top → right       |
//! | 6, 9    | top → bottom      |
//! | 7, 8    | top → left        |
//! | 5, 10   | saddle, see [`crate::saddle`] |

use isoline_common::{ContourResult, LineSegment, SamplePoint, ScalarField, ScanOrder};
use rayon::prelude::*;

use crate::classify::{classify, Cell};
use crate::config::ExtractOptions;
use crate::interpolate::midpoint;
use crate::saddle::resolve_saddle;

/// Maximum number of segments a single cell can emit.
pub const MAX_SEGMENTS_PER_CELL: usize = 2;

/// A cell edge, named by the two corners it joins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// top-left to top-right
    Top,
    /// top-right to bottom-right
    Right,
    /// bottom-left to bottom-right
    Bottom,
    /// top-left to bottom-left
    Left,
}

impl Edge {
    /// Endpoints of this edge in `cell`, in interpolation order.
    pub fn corners<'a>(&self, cell: &'a Cell) -> (&'a SamplePoint, &'a SamplePoint) {
        match self {
            Edge::Top => (&cell.top_left, &cell.top_right),
            Edge::Right => (&cell.top_right, &cell.bottom_right),
            Edge::Bottom => (&cell.bottom_left, &cell.bottom_right),
            Edge::Left => (&cell.top_left, &cell.bottom_left),
        }
    }

    /// Point on this edge where the field crosses `isovalue`.
    pub fn crossing(&self, cell: &Cell, isovalue: f64) -> SamplePoint {
        let (a, b) = self.corners(cell);
        midpoint(a, b, isovalue)
    }
}

/// Edge pairs to connect for a case code.
///
/// Saddle codes need the cell values to be resolved, hence the `cell`
/// argument.
pub fn case_edges(code: u8, cell: &Cell, isovalue: f64) -> &'static [(Edge, Edge)] {
    match code {
        0 | 15 => &[],
        1 | 14 => &[(Edge::Left, Edge::Bottom)],
        2 | 13 => &[(Edge::Bottom, Edge::Right)],
        3 | 12 => &[(Edge::Left, Edge::Right)],
        4 | 11 => &[(Edge::Top, Edge::Right)],
        6 | 9 => &[(Edge::Top, Edge::Bottom)],
        7 | 8 => &[(Edge::Top, Edge::Left)],
        5 | 10 => resolve_saddle(cell, isovalue).edges(),
        _ => &[],
    }
}

/// Append the segments of one cell to `out`; returns how many were added.
pub fn push_cell_segments(
    cell: &Cell,
    code: u8,
    isovalue: f64,
    out: &mut Vec<LineSegment>,
) -> usize {
    let edges = case_edges(code, cell, isovalue);
    for (from, to) in edges {
        out.push(LineSegment::new(
            from.crossing(cell, isovalue),
            to.crossing(cell, isovalue),
        ));
    }
    edges.len()
}

/// Segments for a single cell (0, 1 or 2 of them).
pub fn cell_segments(cell: &Cell, isovalue: f64) -> Vec<LineSegment> {
    let mut segments = Vec::with_capacity(MAX_SEGMENTS_PER_CELL);
    push_cell_segments(cell, classify(cell, isovalue), isovalue, &mut segments);
    segments
}

/// Marching squares driver.
///
/// Holds the scan options; the field is borrowed per call and never
/// modified.
#[derive(Debug, Clone, Default)]
pub struct ContourExtractor {
    options: ExtractOptions,
}

impl ContourExtractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract all contour segments of `field` at `isovalue`.
    ///
    /// The field is validated before any cell is visited; on failure no
    /// segments are produced. Output follows the configured scan order and
    /// is identical for the sequential and parallel scans.
    pub fn extract(&self, field: &ScalarField, isovalue: f64) -> ContourResult<Vec<LineSegment>> {
        field.validate()?;
        self.scan(field, isovalue)
    }

    /// Scan an already validated field.
    pub(crate) fn scan(&self, field: &ScalarField, isovalue: f64) -> ContourResult<Vec<LineSegment>> {
        let order = self.options.scan_order;
        let (outer, inner) = order.loop_extents(
            field.width().saturating_sub(1),
            field.height().saturating_sub(1),
        );

        tracing::debug!(
            width = field.width(),
            height = field.height(),
            level = isovalue,
            scan_order = ?order,
            parallel = self.options.parallel,
            data_range = ?field.value_range(),
            "extracting contour segments"
        );

        let segments = if self.options.parallel {
            let lines: Vec<Vec<LineSegment>> = (0..outer)
                .into_par_iter()
                .map(|o| self.scan_line(field, isovalue, order, o, inner))
                .collect::<ContourResult<_>>()?;
            lines.concat()
        } else {
            let mut segments = Vec::new();
            for o in 0..outer {
                segments.extend(self.scan_line(field, isovalue, order, o, inner)?);
            }
            segments
        };

        tracing::debug!(
            level = isovalue,
            cells = field.cell_count(),
            segments = segments.len(),
            "extracted contour segments"
        );

        Ok(segments)
    }

    /// Visit one row or column of cells into a private buffer.
    fn scan_line(
        &self,
        field: &ScalarField,
        isovalue: f64,
        order: ScanOrder,
        outer: usize,
        inner: usize,
    ) -> ContourResult<Vec<LineSegment>> {
        let mut segments = Vec::new();

        for n in 0..inner {
            let (i, j) = order.to_ij(outer, n);
            let cell = Cell::from_field(field, i, j)?;

            if self.options.skip_non_finite && cell.has_non_finite() {
                continue;
            }

            let code = classify(&cell, isovalue);
            push_cell_segments(&cell, code, isovalue, &mut segments);
        }

        Ok(segments)
    }
}

/// Extract the contour segments of `field` at `isovalue` with default options.
pub fn extract_for_isovalue(field: &ScalarField, isovalue: f64) -> ContourResult<Vec<LineSegment>> {
    ContourExtractor::default().extract(field, isovalue)
}

/// Build a field from coordinate vectors and `columns[i][j]` samples and
/// extract one isovalue.
///
/// Fails with `DimensionMismatch` if `columns` does not match the
/// coordinate vectors.
pub fn march_squares(
    x: Vec<f64>,
    y: Vec<f64>,
    columns: Vec<Vec<f64>>,
    isovalue: f64,
) -> ContourResult<Vec<LineSegment>> {
    let field = ScalarField::new(x, y, columns)?;
    extract_for_isovalue(&field, isovalue)
}
