//! # csv2array - CSV test data to C arrays
//!
//! Turns a CSV dataset plus a JSON file of per-column scaling bounds into a
//! `.c`/`.h` pair that a firmware project can compile in directly.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  CSV + JSON │────▶│   Parser    │────▶│   Codegen   │────▶│   .c / .h   │
//! │   (files)   │     │  (f64 rows) │     │  (5 dp text)│     │  (writer)   │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use csv2array::convert_all;
//! use std::path::{Path, PathBuf};
//!
//! let reports = convert_all(
//!     &[PathBuf::from("test_data.csv")],
//!     Path::new("scaling_params.json"),
//!     None,
//! ).unwrap();
//! println!("{} rows", reports[0].rows);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`models`] - Dataset, scaling parameters, outputs
//! - [`parser`] - CSV and JSON loading
//! - [`codegen`] - C source/header rendering
//! - [`writer`] - Output files
//! - [`pipeline`] - Per-file conversion
//! - [`logs`] - Progress logging

// Core modules
pub mod error;
pub mod models;

// Input
pub mod parser;

// Output
pub mod codegen;
pub mod writer;

// Orchestration
pub mod pipeline;

// Logging
pub mod logs;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ConvertError, CsvError, LoadError, WriteError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{Dataset, OutputPair, OutputPaths, Row, ScalingParams};

// =============================================================================
// Re-exports - Loading, rendering, writing
// =============================================================================

pub use parser::{load_dataset, load_scaling_params, parse_rows};

pub use codegen::{format_value, render, CodegenOptions, COPYRIGHT_HEADER};

pub use writer::{write_file, write_outputs};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use pipeline::{convert_all, convert_file, resolve_output_paths, ConversionReport};
