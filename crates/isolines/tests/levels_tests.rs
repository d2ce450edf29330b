//! Tests for multi-level extraction and level generation.

use isolines::{
    extract_for_isovalue, extract_levels, generate_contour_levels, stepped_levels,
    ContourExtractor, ExtractOptions, LevelSpec,
};
use test_utils::{
    assert_approx_eq, create_noisy_grid, create_ramp_grid, demo, demo_field, init_tracing,
    to_field,
};

// ============================================================================
// generate_contour_levels tests
// ============================================================================

#[test]
fn test_generate_contour_levels_basic() {
    let levels = generate_contour_levels(0.0, 100.0, 10.0);
    assert_eq!(
        levels,
        vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0]
    );
}

#[test]
fn test_generate_contour_levels_offset_start() {
    // Range doesn't start on interval multiple
    let levels = generate_contour_levels(3.0, 27.0, 5.0);
    assert_eq!(levels, vec![5.0, 10.0, 15.0, 20.0, 25.0]);
}

#[test]
fn test_generate_contour_levels_negative_range() {
    let levels = generate_contour_levels(-20.0, 20.0, 10.0);
    assert_eq!(levels, vec![-20.0, -10.0, 0.0, 10.0, 20.0]);
}

#[test]
fn test_generate_contour_levels_fractional_interval() {
    let levels = generate_contour_levels(0.0, 1.0, 0.25);
    assert_eq!(levels.len(), 5);
    assert_approx_eq!(levels[0], 0.0, 1e-12);
    assert_approx_eq!(levels[4], 1.0, 1e-12);
}

#[test]
fn test_generate_contour_levels_invalid_interval() {
    // Zero or negative interval should return empty
    assert!(generate_contour_levels(0.0, 100.0, 0.0).is_empty());
    assert!(generate_contour_levels(0.0, 100.0, -10.0).is_empty());
}

#[test]
fn test_generate_contour_levels_inverted_range() {
    // max < min should return empty
    assert!(generate_contour_levels(100.0, 0.0, 10.0).is_empty());
}

#[test]
fn test_generate_contour_levels_single_level() {
    // Range only fits one level
    assert_eq!(generate_contour_levels(9.0, 11.0, 10.0), vec![10.0]);
}

// ============================================================================
// stepped_levels tests
// ============================================================================

#[test]
fn test_stepped_levels_demo_sequence() {
    let levels = stepped_levels(demo::LEVEL_START, demo::LEVEL_STEP, demo::LEVEL_COUNT);
    assert_eq!(levels.len(), 20);
    assert_approx_eq!(levels[0], 1.1, 1e-12);
    assert_approx_eq!(levels[1], 1.3, 1e-12);
    assert_approx_eq!(levels[19], 4.9, 1e-12);
}

#[test]
fn test_stepped_levels_negative_step() {
    let levels = stepped_levels(0.0, -2.0, 3);
    assert_eq!(levels, vec![0.0, -2.0, -4.0]);
}

// ============================================================================
// extract_levels tests
// ============================================================================

#[test]
fn test_extract_levels_matches_single_extraction() {
    init_tracing();
    let (w, h) = (4, 3);
    let field = to_field(create_ramp_grid(w, h, 1.0), w, h);
    let isovalues = [0.5, 1.5, 2.5];

    let result = extract_levels(&field, &isovalues).unwrap();
    assert_eq!(result.len(), 3);
    assert_eq!(result.levels(), isovalues.to_vec());

    for level in &result {
        assert_eq!(level.segments.len(), 2);
        assert_eq!(
            level.segments,
            extract_for_isovalue(&field, level.level).unwrap()
        );
    }
    assert_eq!(result.total_segments(), 6);
}

#[test]
fn test_extract_levels_lookup_by_isovalue() {
    let field = to_field(create_ramp_grid(4, 3, 1.0), 4, 3);
    let result = extract_levels(&field, &[2.5, 0.5]).unwrap();

    let segments = result.get(0.5).unwrap();
    assert_eq!(segments.len(), 2);
    assert!(segments.iter().all(|s| s.level() == 0.5));
    assert!(result.get(1.5).is_none());
}

#[test]
fn test_extract_levels_keeps_duplicates() {
    let field = to_field(create_ramp_grid(4, 3, 1.0), 4, 3);
    let result = extract_levels(&field, &[1.5, 1.5]).unwrap();
    assert_eq!(result.len(), 2);
    assert_eq!(result.total_segments(), 4);
}

#[test]
fn test_extract_levels_empty_request() {
    let field = to_field(create_ramp_grid(4, 3, 1.0), 4, 3);
    let result = extract_levels(&field, &[]).unwrap();
    assert!(result.is_empty());
    assert_eq!(result.total_segments(), 0);
}

#[test]
fn test_extract_levels_parallel_matches_sequential() {
    let (w, h) = (48, 32);
    let field = to_field(create_noisy_grid(w, h, 4.0, 99), w, h);
    let isovalues = generate_contour_levels(10.0, 90.0, 5.0);

    let sequential = extract_levels(&field, &isovalues).unwrap();
    let parallel = ContourExtractor::new(ExtractOptions {
        parallel: true,
        ..Default::default()
    })
    .extract_levels(&field, &isovalues)
    .unwrap();

    assert_eq!(sequential, parallel);
}

#[test]
fn test_demo_field_levels() {
    let field = demo_field();
    let isovalues = stepped_levels(demo::LEVEL_START, demo::LEVEL_STEP, demo::LEVEL_COUNT);
    let result = extract_levels(&field, &isovalues).unwrap();

    assert_eq!(result.len(), demo::LEVEL_COUNT);

    // The border ring sits at 1, so the first level must cut through
    assert!(!result.get(isovalues[0]).unwrap().is_empty());

    for level in &result {
        assert!(level.segments.len() <= 2 * field.cell_count());
        for seg in &level.segments {
            assert_eq!(seg.start.z, level.level);
            assert_eq!(seg.end.z, level.level);
            // Pixel coordinates stay within the demo canvas
            assert!(seg.start.x >= 0.0 && seg.start.x <= 600.0);
            assert!(seg.end.y >= 0.0 && seg.end.y <= 400.0);
        }
    }
}

#[test]
fn test_demo_field_above_max_is_empty() {
    let field = demo_field();
    assert!(extract_for_isovalue(&field, 9.5).unwrap().is_empty());
}

// ============================================================================
// extract_configured tests
// ============================================================================

#[test]
fn test_extract_configured_interval_from_data_range() {
    // Ramp 0, 10, 20, 30
    let field = to_field(create_ramp_grid(4, 3, 10.0), 4, 3);
    let extractor = ContourExtractor::new(ExtractOptions {
        levels: LevelSpec::Interval {
            interval: 10.0,
            min: None,
            max: None,
        },
        ..Default::default()
    });

    let result = extractor.extract_configured(&field).unwrap();
    assert_eq!(result.levels(), vec![0.0, 10.0, 20.0, 30.0]);

    // Level 0 is the minimum: every sample is inside, no crossing
    assert!(result.get(0.0).unwrap().is_empty());
    assert_eq!(result.get(10.0).unwrap().len(), 2);
    assert_eq!(result.get(30.0).unwrap().len(), 2);
    assert_eq!(result.total_segments(), 6);
}

#[test]
fn test_extract_configured_explicit() {
    let field = to_field(create_ramp_grid(4, 3, 1.0), 4, 3);
    let extractor = ContourExtractor::new(ExtractOptions {
        levels: LevelSpec::Explicit {
            values: vec![0.5, 5.0],
        },
        ..Default::default()
    });

    let result = extractor.extract_configured(&field).unwrap();
    assert_eq!(result.get(0.5).unwrap().len(), 2);
    assert!(result.get(5.0).unwrap().is_empty());
}
