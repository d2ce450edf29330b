//! Extraction options, loadable from JSON.

use isoline_common::{ContourError, ContourResult, ScalarField, ScanOrder};
use serde::{Deserialize, Serialize};

use crate::levels::{generate_contour_levels, stepped_levels};

/// Options for a [`crate::ContourExtractor`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ExtractOptions {
    /// Order cells are visited in, which is also the output order
    pub scan_order: ScanOrder,
    /// Split the cell scan and the level loop across rayon workers
    pub parallel: bool,
    /// Skip cells with a NaN or infinite corner instead of classifying them
    pub skip_non_finite: bool,
    /// Isovalues used by `extract_configured`
    pub levels: LevelSpec,
}

/// How the isovalues for a multi-level extraction are chosen.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LevelSpec {
    /// A fixed list of isovalues.
    Explicit { values: Vec<f64> },
    /// Every multiple of `interval` within `[min, max]`. Missing bounds fall
    /// back to the field's finite data range.
    Interval {
        interval: f64,
        min: Option<f64>,
        max: Option<f64>,
    },
    /// `start + step * k` for `k` in `0..count`.
    Stepped { start: f64, step: f64, count: usize },
}

impl Default for LevelSpec {
    fn default() -> Self {
        LevelSpec::Explicit { values: vec![] }
    }
}

impl ExtractOptions {
    /// Load options from a JSON string
    pub fn from_json(json_str: &str) -> ContourResult<Self> {
        let options: Self = serde_json::from_str(json_str)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a JSON file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> ContourResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Reject level specifications that can never produce levels.
    pub fn validate(&self) -> ContourResult<()> {
        match &self.levels {
            LevelSpec::Explicit { .. } => Ok(()),
            LevelSpec::Interval { interval, min, max } => {
                if !interval.is_finite() || *interval <= 0.0 {
                    return Err(ContourError::InvalidConfig(format!(
                        "level interval must be positive and finite, got {}",
                        interval
                    )));
                }
                if let (Some(min), Some(max)) = (min, max) {
                    if min > max {
                        return Err(ContourError::InvalidConfig(format!(
                            "level range is inverted: min {} > max {}",
                            min, max
                        )));
                    }
                }
                Ok(())
            }
            LevelSpec::Stepped { start, step, .. } => {
                if !start.is_finite() || !step.is_finite() {
                    return Err(ContourError::InvalidConfig(format!(
                        "stepped levels need finite start and step, got {} and {}",
                        start, step
                    )));
                }
                Ok(())
            }
        }
    }

    /// Concrete isovalues for `field`.
    pub fn resolve_levels(&self, field: &ScalarField) -> ContourResult<Vec<f64>> {
        self.validate()?;

        let levels = match &self.levels {
            LevelSpec::Explicit { values } => values.clone(),
            LevelSpec::Interval { interval, min, max } => {
                let range = field.value_range();
                let min = min.or(range.map(|(lo, _)| lo));
                let max = max.or(range.map(|(_, hi)| hi));
                match (min, max) {
                    (Some(min), Some(max)) => generate_contour_levels(min, max, *interval),
                    _ => {
                        tracing::warn!(
                            interval = interval,
                            "no finite samples to derive level range from, no levels generated"
                        );
                        vec![]
                    }
                }
            }
            LevelSpec::Stepped { start, step, count } => stepped_levels(*start, *step, *count),
        };

        Ok(levels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ExtractOptions::default();
        assert_eq!(options.scan_order, ScanOrder::ColumnMajor);
        assert!(!options.parallel);
        assert!(!options.skip_non_finite);
        assert_eq!(options.levels, LevelSpec::Explicit { values: vec![] });
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let options = ExtractOptions::from_json("{}").unwrap();
        assert_eq!(options, ExtractOptions::default());
    }

    #[test]
    fn test_invalid_interval_rejected() {
        let options = ExtractOptions {
            levels: LevelSpec::Interval {
                interval: 0.0,
                min: None,
                max: None,
            },
            ..Default::default()
        };
        assert!(matches!(
            options.validate(),
            Err(ContourError::InvalidConfig(_))
        ));
    }
}
