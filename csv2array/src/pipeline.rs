//! Per-file conversion pipeline: load, render, write.
//!
//! # Example
//!
//! ```rust,ignore
//! use csv2array::pipeline::convert_all;
//! use std::path::{Path, PathBuf};
//!
//! let inputs = vec![PathBuf::from("test_data.csv")];
//! convert_all(&inputs, Path::new("scaling_params.json"), None)?;
//! // -> test_data.c, test_data.h
//! ```

use std::path::{Path, PathBuf};

use crate::codegen::{render, CodegenOptions};
use crate::error::ConvertResult;
use crate::logs::{log_info_indent, log_success, log_warning};
use crate::models::OutputPaths;
use crate::parser::{load_dataset, load_scaling_params};
use crate::writer::write_outputs;

/// Summary of one converted CSV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub paths: OutputPaths,
    pub rows: usize,
    pub cols: usize,
}

/// Work out where the generated files go.
///
/// With `output_c`, the source goes there and the header next to it with a
/// `.h` extension. Otherwise both sit next to the CSV with `.c`/`.h`
/// replacing its extension.
pub fn resolve_output_paths(csv: &Path, output_c: Option<&Path>) -> OutputPaths {
    match output_c {
        Some(source) => OutputPaths {
            source: source.to_path_buf(),
            header: source.with_extension("h"),
        },
        None => OutputPaths {
            source: csv.with_extension("c"),
            header: csv.with_extension("h"),
        },
    }
}

/// Convert one CSV file.
///
/// Both inputs are fully loaded before anything is written, so a load
/// error leaves no output for this file.
pub fn convert_file(
    csv: &Path,
    scaling_params: &Path,
    paths: &OutputPaths,
    options: &CodegenOptions,
) -> ConvertResult<ConversionReport> {
    let dataset = load_dataset(csv)?;
    let params = load_scaling_params(scaling_params)?;

    if !params.matches_columns(dataset.col_count()) {
        log_warning(format!(
            "Scaling parameters have {} min / {} max values for {} columns",
            params.min.len(),
            params.max.len(),
            dataset.col_count()
        ));
    }

    let pair = render(&dataset, &params, &paths.header_include_name(), options);
    write_outputs(&pair, paths)?;

    log_success(format!("Wrote {}", paths.source.display()));
    log_info_indent(format!("{}", paths.header.display()), 1);

    Ok(ConversionReport {
        input: csv.to_path_buf(),
        paths: paths.clone(),
        rows: dataset.row_count(),
        cols: dataset.col_count(),
    })
}

/// Convert every CSV file in order, stopping at the first error.
///
/// The scaling file is re-read for each input. Outputs are not
/// de-duplicated: with `output_c` set, each input overwrites the last.
pub fn convert_all(
    csv_files: &[PathBuf],
    scaling_params: &Path,
    output_c: Option<&Path>,
) -> ConvertResult<Vec<ConversionReport>> {
    let options = CodegenOptions::default();
    let mut reports = Vec::with_capacity(csv_files.len());

    for csv in csv_files {
        let paths = resolve_output_paths(csv, output_c);

        println!("Generating C file: {}", paths.source.display());
        println!("Generating Header file: {}", paths.header.display());

        reports.push(convert_file(csv, scaling_params, &paths, &options)?);
    }

    Ok(reports)
}
