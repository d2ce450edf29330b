//! Common test fixtures for isoline tests.

use isoline_common::ScalarField;

/// The 7x5 demo field: a ring of 1s around a bumpy interior with two
/// peaks of 9 and a lone 0 in the first corner.
///
/// Coordinates are pixel positions, 100 apart.
pub fn demo_field() -> ScalarField {
    ScalarField::new(
        demo::X.to_vec(),
        demo::Y.to_vec(),
        demo::COLUMNS.iter().map(|c| c.to_vec()).collect(),
    )
    .expect("demo fixture is well formed")
}

/// Raw parts of [`demo_field`].
pub mod demo {
    pub const X: [f64; 7] = [0.0, 100.0, 200.0, 300.0, 400.0, 500.0, 600.0];
    pub const Y: [f64; 5] = [0.0, 100.0, 200.0, 300.0, 400.0];

    /// `COLUMNS[i][j]`
    pub const COLUMNS: [[f64; 5]; 7] = [
        [0.0, 1.0, 1.0, 1.0, 1.0],
        [1.0, 9.0, 3.0, 2.0, 1.0],
        [1.0, 3.0, 1.0, 2.0, 1.0],
        [1.0, 3.0, 3.0, 2.0, 1.0],
        [1.0, 3.0, 1.5, 2.0, 1.0],
        [1.0, 9.0, 2.0, 1.5, 1.0],
        [1.0, 1.0, 1.0, 1.0, 1.0],
    ];

    /// The demo steps through 20 levels: `1.1 + 0.2 * k`.
    pub const LEVEL_START: f64 = 1.1;
    pub const LEVEL_STEP: f64 = 0.2;
    pub const LEVEL_COUNT: usize = 20;
}

/// One cell, `TL=0, TR=1, BL=1, BR=1`, on the unit square.
pub fn single_cell_field() -> ScalarField {
    ScalarField::new(
        vec![0.0, 1.0],
        vec![0.0, 1.0],
        vec![vec![0.0, 1.0], vec![1.0, 1.0]],
    )
    .expect("single cell fixture is well formed")
}

/// One cell on the unit square with the given corner values.
pub fn unit_cell_field(tl: f64, tr: f64, bl: f64, br: f64) -> ScalarField {
    ScalarField::new(
        vec![0.0, 1.0],
        vec![0.0, 1.0],
        vec![vec![tl, bl], vec![tr, br]],
    )
    .expect("unit cell fixture is well formed")
}
