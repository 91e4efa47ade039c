//! Error types for the csv2array conversion pipeline.
//!
//! - [`CsvError`] - a bad record in the data file, with line/column context
//! - [`LoadError`] - reading the CSV dataset or the JSON scaling parameters
//! - [`WriteError`] - writing the generated source/header files
//! - [`ConvertError`] - top-level error for one input file
//!
//! Conversion is automatic via `From` implementations, so `?` works
//! across the loader/writer boundary.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// CSV Record Errors
// =============================================================================

/// A CSV record that could not be turned into a row of numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvError {
    pub line: u64,
    pub column: Option<usize>,
    pub value: Option<String>,
    pub message: String,
}

impl std::fmt::Display for CsvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.column, &self.value) {
            (Some(col), Some(val)) => {
                write!(f, "Line {}, column {} (value '{}'): {}", self.line, col, val, self.message)
            }
            (Some(col), None) => {
                write!(f, "Line {}, column {}: {}", self.line, col, self.message)
            }
            _ => {
                write!(f, "Line {}: {}", self.line, self.message)
            }
        }
    }
}

impl std::error::Error for CsvError {}

impl CsvError {
    pub fn new(line: u64, message: impl Into<String>) -> Self {
        Self {
            line,
            column: None,
            value: None,
            message: message.into(),
        }
    }

    /// Attach the 1-based column index.
    pub fn with_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

// =============================================================================
// Loader Errors
// =============================================================================

/// Errors while reading the input files.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File missing or unreadable.
    #[error("Cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed record in the CSV data.
    #[error("Invalid CSV data: {0}")]
    Csv(#[from] CsvError),

    /// Scaling file is not valid JSON or lacks `min`/`max`.
    #[error("Invalid scaling parameters in '{}': {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Only a header line, no data rows.
    #[error("'{}' has no data rows after the header", .path.display())]
    EmptyDataset { path: PathBuf },
}

// =============================================================================
// Writer Errors
// =============================================================================

/// Errors while writing generated files.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Cannot write '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// Conversion Errors (top-level)
// =============================================================================

/// Error returned by [`crate::pipeline::convert_file`].
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Write(#[from] WriteError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for loader operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type for writer operations.
pub type WriteResult<T> = Result<T, WriteError>;

/// Result type for a whole conversion.
pub type ConvertResult<T> = Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        // CsvError -> LoadError -> ConvertError
        let csv_err = CsvError::new(3, "not a number").with_column(2).with_value("abc");
        let load_err: LoadError = csv_err.into();
        let convert_err: ConvertError = load_err.into();
        let msg = convert_err.to_string();
        assert!(msg.contains("Line 3"));
        assert!(msg.contains("abc"));
    }

    #[test]
    fn test_csv_error_message_format() {
        let err = CsvError::new(5, "Invalid value").with_column(2).with_value("x");
        let msg = err.to_string();
        assert!(msg.contains("Line 5"));
        assert!(msg.contains("column 2"));
        assert!(msg.contains("value 'x'"));

        let bare = CsvError::new(7, "ragged row");
        assert_eq!(bare.to_string(), "Line 7: ragged row");
    }

    #[test]
    fn test_empty_dataset_names_path() {
        let err = LoadError::EmptyDataset { path: PathBuf::from("data/empty.csv") };
        assert!(err.to_string().contains("data/empty.csv"));
    }
}
