//! Cell topology classification.
//!
//! Each corner of a cell is binarized against the isovalue (`value >= isovalue`
//! counts as inside) and the four bits are packed into a case code:
//!
//! ```text
//! code = TL*8 + TR*4 + BR*2 + BL
//! ```
//!
//! The bit order is fixed; the case table in [`crate::extract`] is keyed on it.

use isoline_common::{ContourError, ContourResult, SamplePoint, ScalarField};

pub const TOP_LEFT: u8 = 8;
pub const TOP_RIGHT: u8 = 4;
pub const BOTTOM_RIGHT: u8 = 2;
pub const BOTTOM_LEFT: u8 = 1;

/// The four samples of one marching-squares cell.
///
/// `top_left` is sample `(i, j)`, `top_right` is `(i + 1, j)`,
/// `bottom_left` is `(i, j + 1)` and `bottom_right` is `(i + 1, j + 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub top_left: SamplePoint,
    pub top_right: SamplePoint,
    pub bottom_left: SamplePoint,
    pub bottom_right: SamplePoint,
}

impl Cell {
    pub fn new(
        top_left: SamplePoint,
        top_right: SamplePoint,
        bottom_left: SamplePoint,
        bottom_right: SamplePoint,
    ) -> Self {
        Self {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }

    /// Cell whose top-left corner is sample `(i, j)`.
    ///
    /// The last column and row can never be a top-left corner; asking for
    /// one is a scan-bounds defect and yields `IndexOutOfRange`.
    pub fn from_field(field: &ScalarField, i: usize, j: usize) -> ContourResult<Self> {
        if i >= field.width().saturating_sub(1) || j >= field.height().saturating_sub(1) {
            return Err(ContourError::IndexOutOfRange {
                i,
                j,
                width: field.width(),
                height: field.height(),
            });
        }

        Ok(Self {
            top_left: field.sample(i, j)?,
            top_right: field.sample(i + 1, j)?,
            bottom_left: field.sample(i, j + 1)?,
            bottom_right: field.sample(i + 1, j + 1)?,
        })
    }

    /// Arithmetic mean of the four corner values.
    pub fn average(&self) -> f64 {
        (self.top_left.z + self.top_right.z + self.bottom_left.z + self.bottom_right.z) / 4.0
    }

    /// True if any corner is NaN or infinite.
    pub fn has_non_finite(&self) -> bool {
        [
            self.top_left.z,
            self.top_right.z,
            self.bottom_left.z,
            self.bottom_right.z,
        ]
        .iter()
        .any(|v| !v.is_finite())
    }
}

/// Compute the 4-bit case code (0..=15) of `cell` for `isovalue`.
#[inline]
pub fn classify(cell: &Cell, isovalue: f64) -> u8 {
    let mut code = 0;
    if cell.top_left.z >= isovalue {
        code |= TOP_LEFT;
    }
    if cell.top_right.z >= isovalue {
        code |= TOP_RIGHT;
    }
    if cell.bottom_right.z >= isovalue {
        code |= BOTTOM_RIGHT;
    }
    if cell.bottom_left.z >= isovalue {
        code |= BOTTOM_LEFT;
    }
    code
}

/// Thresholded copy of a field: `1` where `value >= isovalue`, else `0`.
///
/// NaN samples compare false and land in the `0` class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryMask {
    width: usize,
    height: usize,
    /// Column-major, like the field it was built from.
    bits: Vec<u8>,
}

impl BinaryMask {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Mask bit at `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> ContourResult<u8> {
        if i >= self.width || j >= self.height {
            return Err(ContourError::IndexOutOfRange {
                i,
                j,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.bits[i * self.height + j])
    }

    /// Number of samples at or above the isovalue.
    pub fn count_inside(&self) -> usize {
        self.bits.iter().filter(|&&b| b == 1).count()
    }
}

/// Threshold every sample of `field` against `isovalue`.
pub fn binary_mask(field: &ScalarField, isovalue: f64) -> ContourResult<BinaryMask> {
    field.validate()?;

    let (width, height) = (field.width(), field.height());
    let mut bits = Vec::with_capacity(width * height);
    for i in 0..width {
        for j in 0..height {
            bits.push(u8::from(field.value(i, j)? >= isovalue));
        }
    }

    Ok(BinaryMask {
        width,
        height,
        bits,
    })
}

/// Case code of the cell with top-left corner `(i, j)`, read from a mask.
///
/// Produces the same code as [`classify`] on the corresponding [`Cell`].
pub fn classify_from_mask(mask: &BinaryMask, i: usize, j: usize) -> ContourResult<u8> {
    if i >= mask.width.saturating_sub(1) || j >= mask.height.saturating_sub(1) {
        return Err(ContourError::IndexOutOfRange {
            i,
            j,
            width: mask.width,
            height: mask.height,
        });
    }

    let mut code = mask.get(i, j)?;
    code = code * 2 + mask.get(i + 1, j)?;
    code = code * 2 + mask.get(i + 1, j + 1)?;
    code = code * 2 + mask.get(i, j + 1)?;
    Ok(code)
}
