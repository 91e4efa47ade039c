//! CSV dataset and JSON scaling-parameter loaders.
//!
//! The first CSV line is a header and is always discarded. Every other
//! field must parse as a floating-point number.

use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{CsvError, LoadError, LoadResult};
use crate::logs::{log_info, log_success};
use crate::models::{Dataset, Row, ScalingParams};

/// Parse CSV rows from a reader into numbers.
///
/// Exactly the first physical line is discarded as the header, even when it
/// is blank. Column count is fixed by the first data row; any later row with
/// a different length is an error, and a blank data line counts as a row
/// with zero columns.
///
/// # Example
/// ```ignore
/// use csv2array::parser::parse_rows;
///
/// let rows = parse_rows("a,b\n1,2\n3,4\n".as_bytes()).unwrap();
/// assert_eq!(rows, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
/// ```
pub fn parse_rows<R: Read>(mut reader: R) -> Result<Vec<Row>, CsvError> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|e| CsvError::new(0, format!("Cannot read file: {}", e)))?;

    // Header is everything up to the first newline
    let data = content.split_once('\n').map_or("", |(_, rest)| rest);

    let mut rows: Vec<Row> = Vec::new();
    let mut cols: Option<usize> = None;

    for (idx, text) in data.lines().enumerate() {
        // +1 for 0-index, +1 for header
        let line = idx as u64 + 2;

        let row = match split_record(text, line)? {
            Some(record) => parse_record(&record, line)?,
            None => Vec::new(),
        };

        match cols {
            Some(expected) if expected != row.len() => {
                return Err(CsvError::new(
                    line,
                    format!("ragged row: expected {} columns, found {}", expected, row.len()),
                ));
            }
            Some(_) => {}
            None if row.is_empty() => {
                return Err(CsvError::new(line, "ragged row: blank line has no columns"));
            }
            None => cols = Some(row.len()),
        }

        rows.push(row);
    }

    Ok(rows)
}

/// Split one physical line on commas. `None` for a blank line.
fn split_record(text: &str, line: u64) -> Result<Option<StringRecord>, CsvError> {
    let mut line_reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    line_reader
        .records()
        .next()
        .transpose()
        .map_err(|e| CsvError::new(line, format!("Cannot read record: {}", e)))
}

fn parse_record(record: &StringRecord, line: u64) -> Result<Row, CsvError> {
    record
        .iter()
        .enumerate()
        .map(|(i, field)| {
            field.parse::<f64>().map_err(|e| {
                CsvError::new(line, format!("not a number: {}", e))
                    .with_column(i + 1)
                    .with_value(field)
            })
        })
        .collect()
}

/// Load a CSV file into a [`Dataset`].
///
/// Fails with [`LoadError::EmptyDataset`] when the file holds no data rows.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> LoadResult<Dataset> {
    let path = path.as_ref();
    log_info(format!("Reading CSV: {}", path.display()));

    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let rows = parse_rows(file)?;
    let dataset = Dataset::new(rows).ok_or_else(|| LoadError::EmptyDataset {
        path: path.to_path_buf(),
    })?;

    log_success(format!(
        "Read {} rows x {} columns",
        dataset.row_count(),
        dataset.col_count()
    ));
    Ok(dataset)
}

/// Load the `min`/`max` scaling arrays from a JSON file.
pub fn load_scaling_params<P: AsRef<Path>>(path: P) -> LoadResult<ScalingParams> {
    let path = path.as_ref();

    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let params: ScalingParams =
        serde_json::from_str(&content).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    log_success(format!(
        "Loaded scaling parameters: {} min, {} max",
        params.min.len(),
        params.max.len()
    ));
    Ok(params)
}
