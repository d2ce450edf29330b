//! Regularly sampled 2D scalar fields.

use crate::{ContourError, ContourResult, SamplePoint};
use serde::{Deserialize, Serialize};

/// Ordering of a flat sample buffer, and of the cell scan during extraction.
///
/// `i` indexes the x axis (columns), `j` indexes the y axis (rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanOrder {
    /// Rows are contiguous: `j` outer, `i` inner.
    RowMajor,
    /// Columns are contiguous: `i` outer, `j` inner.
    #[default]
    ColumnMajor,
}

impl ScanOrder {
    /// Calculate flat array index from 2D indices.
    pub fn flat_index(&self, i: usize, j: usize, width: usize, height: usize) -> usize {
        match self {
            ScanOrder::RowMajor => j * width + i,
            ScanOrder::ColumnMajor => i * height + j,
        }
    }

    /// Extents of the (outer, inner) scan loops over a `width` x `height` index space.
    pub fn loop_extents(&self, width: usize, height: usize) -> (usize, usize) {
        match self {
            ScanOrder::RowMajor => (height, width),
            ScanOrder::ColumnMajor => (width, height),
        }
    }

    /// Map (outer, inner) loop counters back to `(i, j)`.
    pub fn to_ij(&self, outer: usize, inner: usize) -> (usize, usize) {
        match self {
            ScanOrder::RowMajor => (inner, outer),
            ScanOrder::ColumnMajor => (outer, inner),
        }
    }
}

/// A rectangular grid of samples with its coordinate vectors.
///
/// Sample `(i, j)` sits at `(x[i], y[j])`. A field can only be built with
/// `values.len() == x.len() * y.len()`, so every constructed field is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FieldParts", into = "FieldParts")]
pub struct ScalarField {
    x: Vec<f64>,
    y: Vec<f64>,
    /// Column-major: index `i * height + j`.
    values: Vec<f64>,
}

/// Serialized form of a field; validated on the way in.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct FieldParts {
    x: Vec<f64>,
    y: Vec<f64>,
    /// `columns[i][j]`
    columns: Vec<Vec<f64>>,
}

impl TryFrom<FieldParts> for ScalarField {
    type Error = ContourError;

    fn try_from(parts: FieldParts) -> Result<Self, Self::Error> {
        ScalarField::new(parts.x, parts.y, parts.columns)
    }
}

impl From<ScalarField> for FieldParts {
    fn from(field: ScalarField) -> Self {
        let height = field.height();
        let columns = if height == 0 {
            vec![Vec::new(); field.width()]
        } else {
            field.values.chunks(height).map(|c| c.to_vec()).collect()
        };
        FieldParts {
            x: field.x,
            y: field.y,
            columns,
        }
    }
}

impl ScalarField {
    /// Create a field from nested columns, `columns[i][j]`.
    ///
    /// Fails with `DimensionMismatch` when there are not `x.len()` columns
    /// or any column does not hold `y.len()` samples.
    pub fn new(x: Vec<f64>, y: Vec<f64>, columns: Vec<Vec<f64>>) -> ContourResult<Self> {
        let ragged = columns.iter().find(|c| c.len() != y.len());
        if columns.len() != x.len() || ragged.is_some() {
            return Err(ContourError::DimensionMismatch {
                expected_width: x.len(),
                expected_height: y.len(),
                actual_width: columns.len(),
                actual_height: ragged
                    .or(columns.first())
                    .map_or(0, |c| c.len()),
            });
        }

        let values = columns.into_iter().flatten().collect();
        Ok(Self { x, y, values })
    }

    /// Create a field from nested rows, `rows[j][i]`.
    ///
    /// This is the layout a grid literal is usually written in.
    pub fn from_rows(x: Vec<f64>, y: Vec<f64>, rows: Vec<Vec<f64>>) -> ContourResult<Self> {
        let ragged = rows.iter().find(|r| r.len() != x.len());
        if rows.len() != y.len() || ragged.is_some() {
            return Err(ContourError::DimensionMismatch {
                expected_width: x.len(),
                expected_height: y.len(),
                actual_width: ragged.or(rows.first()).map_or(0, |r| r.len()),
                actual_height: rows.len(),
            });
        }

        let (width, height) = (x.len(), y.len());
        let mut values = vec![0.0; width * height];
        for (j, row) in rows.iter().enumerate() {
            for (i, &v) in row.iter().enumerate() {
                values[i * height + j] = v;
            }
        }
        Ok(Self { x, y, values })
    }

    /// Create a field from a flat buffer laid out in `order`.
    ///
    /// A buffer whose length is not `x.len() * y.len()` yields
    /// `BufferLengthMismatch`; callers that only care about shape errors
    /// can test for both kinds with [`ContourError::is_dimension_mismatch`].
    pub fn from_flat(
        x: Vec<f64>,
        y: Vec<f64>,
        values: Vec<f64>,
        order: ScanOrder,
    ) -> ContourResult<Self> {
        let (width, height) = (x.len(), y.len());
        if values.len() != width * height {
            return Err(ContourError::BufferLengthMismatch {
                expected_len: width * height,
                actual_len: values.len(),
            });
        }

        let values = match order {
            ScanOrder::ColumnMajor => values,
            ScanOrder::RowMajor => {
                let mut reordered = vec![0.0; values.len()];
                for j in 0..height {
                    for i in 0..width {
                        reordered[i * height + j] = values[j * width + i];
                    }
                }
                reordered
            }
        };
        Ok(Self { x, y, values })
    }

    /// Create a field in index space: sample `(i, j)` sits at `(i, j)`.
    pub fn from_grid_indices(
        values: Vec<f64>,
        width: usize,
        height: usize,
        order: ScanOrder,
    ) -> ContourResult<Self> {
        let x = (0..width).map(|i| i as f64).collect();
        let y = (0..height).map(|j| j as f64).collect();
        Self::from_flat(x, y, values, order)
    }

    /// Re-check the shape invariant.
    pub fn validate(&self) -> ContourResult<()> {
        let expected = self.width() * self.height();
        if self.values.len() != expected {
            return Err(ContourError::DimensionMismatch {
                expected_width: self.width(),
                expected_height: self.height(),
                actual_width: if self.height() == 0 {
                    0
                } else {
                    self.values.len() / self.height()
                },
                actual_height: self.height(),
            });
        }
        Ok(())
    }

    /// Number of samples along x.
    pub fn width(&self) -> usize {
        self.x.len()
    }

    /// Number of samples along y.
    pub fn height(&self) -> usize {
        self.y.len()
    }

    pub fn x_coords(&self) -> &[f64] {
        &self.x
    }

    pub fn y_coords(&self) -> &[f64] {
        &self.y
    }

    /// Number of marching-squares cells, `(width - 1) * (height - 1)`.
    pub fn cell_count(&self) -> usize {
        self.width().saturating_sub(1) * self.height().saturating_sub(1)
    }

    /// Total number of samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the field holds no samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sample value at `(i, j)`.
    pub fn value(&self, i: usize, j: usize) -> ContourResult<f64> {
        self.check_index(i, j)?;
        Ok(self.values[i * self.height() + j])
    }

    /// Sample at `(i, j)` with its coordinates.
    pub fn sample(&self, i: usize, j: usize) -> ContourResult<SamplePoint> {
        let z = self.value(i, j)?;
        Ok(SamplePoint::new(self.x[i], self.y[j], z))
    }

    /// Minimum and maximum over finite samples.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((min, max)) => Some((min.min(v), max.max(v))),
            })
    }

    fn check_index(&self, i: usize, j: usize) -> ContourResult<()> {
        if i >= self.width() || j >= self.height() {
            return Err(ContourError::IndexOutOfRange {
                i,
                j,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(())
    }
}
