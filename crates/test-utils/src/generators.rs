//! Synthetic scalar fields with known contour geometry.
//!
//! Buffers are row-major (`row * width + col`), the layout
//! [`to_field`] expects.

use isoline_common::{ScalarField, ScanOrder};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Wrap a row-major buffer in a field with index-space coordinates.
///
/// Panics if `values.len() != width * height`.
pub fn to_field(values: Vec<f64>, width: usize, height: usize) -> ScalarField {
    ScalarField::from_grid_indices(values, width, height, ScanOrder::RowMajor)
        .expect("generator buffer must match width * height")
}

/// Creates a grid filled with a constant value.
pub fn create_constant_grid(width: usize, height: usize, value: f64) -> Vec<f64> {
    vec![value; width * height]
}

/// Creates a linear ramp along x: value = `col * slope`.
///
/// Every isovalue strictly inside the range produces one vertical segment
/// per row of cells.
pub fn create_ramp_grid(width: usize, height: usize, slope: f64) -> Vec<f64> {
    let mut data = Vec::with_capacity(width * height);
    for _row in 0..height {
        for col in 0..width {
            data.push(col as f64 * slope);
        }
    }
    data
}

/// Creates a cone peaking at the grid center with value `peak`, falling
/// off linearly with distance.
///
/// Contours are closed rings around the center.
pub fn create_peak_grid(width: usize, height: usize, peak: f64) -> Vec<f64> {
    let center_x = (width as f64 - 1.0) / 2.0;
    let center_y = (height as f64 - 1.0) / 2.0;
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let dx = col as f64 - center_x;
            let dy = row as f64 - center_y;
            data.push(peak - (dx * dx + dy * dy).sqrt());
        }
    }
    data
}

/// Creates an alternating `low`/`high` checkerboard.
///
/// Every cell is a saddle (code 5 or 10) for isovalues between the two.
pub fn create_checkerboard_grid(width: usize, height: usize, low: f64, high: f64) -> Vec<f64> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            data.push(if (row + col) % 2 == 0 { low } else { high });
        }
    }
    data
}

/// Creates a smooth field of overlapping sine waves in roughly `[0, 100]`.
pub fn create_smooth_grid(width: usize, height: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let fx = col as f64 / width.max(1) as f64;
            let fy = row as f64 / height.max(1) as f64;

            let v1 = (fx * std::f64::consts::PI * 4.0).sin() * 20.0;
            let v2 = (fy * std::f64::consts::PI * 4.0).sin() * 20.0;
            let v3 = ((fx + fy) * std::f64::consts::PI * 2.0).sin() * 10.0;

            data.push(50.0 + v1 + v2 + v3);
        }
    }
    data
}

/// Smooth field plus uniform noise in `[-amplitude, amplitude)`.
///
/// The generator is seeded explicitly, so the same `seed` always yields
/// the same buffer.
pub fn create_noisy_grid(width: usize, height: usize, amplitude: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    create_smooth_grid(width, height)
        .into_iter()
        .map(|v| {
            if amplitude > 0.0 {
                v + rng.gen_range(-amplitude..amplitude)
            } else {
                v
            }
        })
        .collect()
}

/// Creates a grid with NaN values at specified positions.
///
/// # Arguments
///
/// * `base` - Row-major buffer to copy
/// * `width` - Number of columns
/// * `nan_positions` - List of (col, row) positions that should be NaN
pub fn with_nans(mut base: Vec<f64>, width: usize, nan_positions: &[(usize, usize)]) -> Vec<f64> {
    for &(col, row) in nan_positions {
        let idx = row * width + col;
        if col < width && idx < base.len() {
            base[idx] = f64::NAN;
        }
    }
    base
}
