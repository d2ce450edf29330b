//! Multi-level extraction and isovalue sequence generation.

use isoline_common::{ContourResult, LineSegment, ScalarField};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::extract::ContourExtractor;

/// Segments extracted for one isovalue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelSegments {
    pub level: f64,
    pub segments: Vec<LineSegment>,
}

/// Results of a multi-level extraction, in the order the levels were requested.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContourLevels {
    levels: Vec<LevelSegments>,
}

impl ContourLevels {
    pub fn new(levels: Vec<LevelSegments>) -> Self {
        Self { levels }
    }

    /// Segments for `isovalue`, matched bit-for-bit. With duplicate
    /// requests the first one wins.
    pub fn get(&self, isovalue: f64) -> Option<&[LineSegment]> {
        self.levels
            .iter()
            .find(|l| l.level.to_bits() == isovalue.to_bits())
            .map(|l| l.segments.as_slice())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LevelSegments> {
        self.levels.iter()
    }

    /// The isovalues in request order.
    pub fn levels(&self) -> Vec<f64> {
        self.levels.iter().map(|l| l.level).collect()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Segment count summed over all levels.
    pub fn total_segments(&self) -> usize {
        self.levels.iter().map(|l| l.segments.len()).sum()
    }

    pub fn into_inner(self) -> Vec<LevelSegments> {
        self.levels
    }
}

impl<'a> IntoIterator for &'a ContourLevels {
    type Item = &'a LevelSegments;
    type IntoIter = std::slice::Iter<'a, LevelSegments>;

    fn into_iter(self) -> Self::IntoIter {
        self.levels.iter()
    }
}

impl ContourExtractor {
    /// Extract every isovalue in `isovalues` independently.
    ///
    /// The field is validated once up front. Levels may run concurrently
    /// when the extractor is parallel; the result keeps request order.
    pub fn extract_levels(
        &self,
        field: &ScalarField,
        isovalues: &[f64],
    ) -> ContourResult<ContourLevels> {
        field.validate()?;

        let extract_one = |&level: &f64| -> ContourResult<LevelSegments> {
            let segments = self.scan(field, level)?;
            tracing::trace!(level = level, segments = segments.len(), "level extracted");
            Ok(LevelSegments { level, segments })
        };

        let levels = if self.options().parallel {
            isovalues
                .par_iter()
                .map(extract_one)
                .collect::<ContourResult<Vec<_>>>()?
        } else {
            isovalues
                .iter()
                .map(extract_one)
                .collect::<ContourResult<Vec<_>>>()?
        };

        let result = ContourLevels::new(levels);
        tracing::debug!(
            num_levels = result.len(),
            total_segments = result.total_segments(),
            first_level = isovalues.first().copied().unwrap_or(0.0),
            last_level = isovalues.last().copied().unwrap_or(0.0),
            "extracted contour levels"
        );
        Ok(result)
    }

    /// Extract the levels described by the extractor's own options.
    pub fn extract_configured(&self, field: &ScalarField) -> ContourResult<ContourLevels> {
        let levels = self.options().resolve_levels(field)?;
        self.extract_levels(field, &levels)
    }
}

/// Extract every isovalue in `isovalues` with default options.
pub fn extract_levels(field: &ScalarField, isovalues: &[f64]) -> ContourResult<ContourLevels> {
    ContourExtractor::default().extract_levels(field, isovalues)
}

/// Generate contour levels automatically based on data range and interval.
///
/// Returns every multiple of `interval` in `[min_value, max_value]`.
pub fn generate_contour_levels(min_value: f64, max_value: f64, interval: f64) -> Vec<f64> {
    if interval <= 0.0
        || max_value <= min_value
        || !min_value.is_finite()
        || !max_value.is_finite()
    {
        return vec![];
    }

    // First multiple of interval at or above min_value
    let first = (min_value / interval).ceil();
    let mut levels = Vec::new();

    let mut k = 0.0;
    loop {
        let level = (first + k) * interval;
        if level > max_value {
            break;
        }
        // Past 2^53 consecutive multiples can round to the same value
        if levels.last() != Some(&level) {
            levels.push(level);
        }
        k += 1.0;
    }

    levels
}

/// `start + step * k` for `k` in `0..count`.
pub fn stepped_levels(start: f64, step: f64, count: usize) -> Vec<f64> {
    (0..count).map(|k| start + step * k as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_contour_levels() {
        let levels = generate_contour_levels(0.0, 20.0, 5.0);
        assert_eq!(levels, vec![0.0, 5.0, 10.0, 15.0, 20.0]);

        let levels = generate_contour_levels(2.0, 18.0, 5.0);
        assert_eq!(levels, vec![5.0, 10.0, 15.0]);
    }

    #[test]
    fn test_generate_contour_levels_non_finite_bounds() {
        assert!(generate_contour_levels(f64::NEG_INFINITY, 1.0, 0.5).is_empty());
        assert!(generate_contour_levels(0.0, f64::NAN, 0.5).is_empty());
    }

    #[test]
    fn test_generate_contour_levels_large_magnitude_has_no_duplicates() {
        let levels = generate_contour_levels(1e16, 1e16 + 4.0, 1.0);
        assert!(levels.len() <= 3);
        assert_eq!(levels.first(), Some(&1e16));
        assert_eq!(levels.last(), Some(&(1e16 + 4.0)));
        assert!(levels.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_stepped_levels() {
        let levels = stepped_levels(1.0, 0.5, 3);
        assert_eq!(levels, vec![1.0, 1.5, 2.0]);
        assert!(stepped_levels(1.0, 0.5, 0).is_empty());
    }

    #[test]
    fn test_contour_levels_lookup() {
        let levels = ContourLevels::new(vec![
            LevelSegments {
                level: 1.5,
                segments: vec![],
            },
            LevelSegments {
                level: 2.5,
                segments: vec![],
            },
        ]);
        assert!(levels.get(2.5).is_some());
        assert!(levels.get(3.5).is_none());
        assert_eq!(levels.levels(), vec![1.5, 2.5]);
    }
}
