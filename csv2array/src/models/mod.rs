//! Domain models for the conversion pipeline.
//!
//! - [`Dataset`] - numeric rows read from a CSV file
//! - [`ScalingParams`] - per-column min/max bounds from the JSON file
//! - [`OutputPair`] - generated source and header text
//! - [`OutputPaths`] - where the output pair is written

use serde::Deserialize;
use std::path::PathBuf;

// =============================================================================
// Dataset
// =============================================================================

/// One CSV data row, one value per column.
pub type Row = Vec<f64>;

/// Rows parsed from a CSV file, header line excluded.
///
/// Built only through [`Dataset::new`], so it is never empty and every row
/// has the same number of columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    rows: Vec<Row>,
    cols: usize,
}

impl Dataset {
    /// Build a dataset, taking the column count from the first row.
    ///
    /// Returns `None` when `rows` is empty or a row length differs from
    /// the first row.
    pub fn new(rows: Vec<Row>) -> Option<Self> {
        let cols = rows.first()?.len();
        if rows.iter().any(|r| r.len() != cols) {
            return None;
        }
        Some(Self { rows, cols })
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.cols
    }
}

// =============================================================================
// Scaling Parameters
// =============================================================================

/// Min/max bounds used downstream to normalize model inputs.
///
/// Lengths are expected to match the dataset's column count but this is
/// not enforced.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ScalingParams {
    pub min: Vec<f64>,
    pub max: Vec<f64>,
}

impl ScalingParams {
    /// True when both bound arrays have `cols` entries.
    pub fn matches_columns(&self, cols: usize) -> bool {
        self.min.len() == cols && self.max.len() == cols
    }
}

// =============================================================================
// Outputs
// =============================================================================

/// Generated text for one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPair {
    pub source: String,
    pub header: String,
}

/// Destination paths for an [`OutputPair`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub source: PathBuf,
    pub header: PathBuf,
}

impl OutputPaths {
    /// Base file name of the header, used in the `#include` line.
    pub fn header_include_name(&self) -> String {
        self.header
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.header.to_string_lossy().into_owned())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_dimensions() {
        let ds = Dataset::new(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(ds.row_count(), 2);
        assert_eq!(ds.col_count(), 3);
    }

    #[test]
    fn test_dataset_rejects_empty_and_ragged() {
        assert!(Dataset::new(vec![]).is_none());
        assert!(Dataset::new(vec![vec![1.0, 2.0], vec![3.0]]).is_none());
    }

    #[test]
    fn test_scaling_params_ignores_extra_keys() {
        let params: ScalingParams =
            serde_json::from_str(r#"{"min": [0, 1.5], "max": [2, 3], "mean": [1, 2]}"#).unwrap();
        assert_eq!(params.min, vec![0.0, 1.5]);
        assert!(params.matches_columns(2));
        assert!(!params.matches_columns(3));
    }

    #[test]
    fn test_header_include_name() {
        let paths = OutputPaths {
            source: PathBuf::from("out/model.c"),
            header: PathBuf::from("out/model.h"),
        };
        assert_eq!(paths.header_include_name(), "model.h");
    }
}
