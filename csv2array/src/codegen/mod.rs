//! C source/header generation.
//!
//! Renders a [`Dataset`] and its [`ScalingParams`] as `const float` arrays.
//! The default [`CodegenOptions`] match the symbol names the firmware
//! build links against: `test_data`, `scaling_min`, `scaling_max`, guarded
//! by `TEST_DATA_H`.

use crate::models::{Dataset, OutputPair, ScalingParams};

/// License block placed at the top of both generated files.
pub const COPYRIGHT_HEADER: &str = "/*
 * SPDX-FileCopyrightText: 2025 Espressif Systems (Shanghai) CO LTD
 *
 * SPDX-License-Identifier: Apache-2.0
 */
";

/// Names and formatting used when rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodegenOptions {
    pub data_array: String,
    pub min_array: String,
    pub max_array: String,
    pub header_guard: String,
    /// Digits after the decimal point
    pub precision: usize,
    pub copyright: String,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            data_array: "test_data".to_string(),
            min_array: "scaling_min".to_string(),
            max_array: "scaling_max".to_string(),
            header_guard: "TEST_DATA_H".to_string(),
            precision: 5,
            copyright: COPYRIGHT_HEADER.to_string(),
        }
    }
}

/// Render the source and header text for one dataset.
///
/// `include_name` is the header file name written into the source's
/// `#include` line.
pub fn render(
    dataset: &Dataset,
    params: &ScalingParams,
    include_name: &str,
    options: &CodegenOptions,
) -> OutputPair {
    OutputPair {
        source: render_source(dataset, params, include_name, options),
        header: render_header(dataset, params, options),
    }
}

/// Format one value with the configured fixed precision.
pub fn format_value(value: f64, precision: usize) -> String {
    format!("{:.*}", precision, value)
}

fn format_values(values: &[f64], precision: usize) -> String {
    values
        .iter()
        .map(|v| format_value(*v, precision))
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_source(
    dataset: &Dataset,
    params: &ScalingParams,
    include_name: &str,
    options: &CodegenOptions,
) -> String {
    let precision = options.precision;
    let mut out = options.copyright.clone();

    out.push_str(&format!("#include \"{}\"\n\n", include_name));

    out.push_str(&format!(
        "const float {}[{}][{}] = {{\n",
        options.data_array,
        dataset.row_count(),
        dataset.col_count()
    ));
    for row in dataset.rows() {
        out.push_str(&format!("    {{ {} }},\n", format_values(row, precision)));
    }
    out.push_str("};\n\n");

    out.push_str(&format!(
        "const float {}[{}] = {{ {} }};\n\n",
        options.min_array,
        params.min.len(),
        format_values(&params.min, precision)
    ));
    out.push_str(&format!(
        "const float {}[{}] = {{ {} }};\n",
        options.max_array,
        params.max.len(),
        format_values(&params.max, precision)
    ));

    out
}

fn render_header(dataset: &Dataset, params: &ScalingParams, options: &CodegenOptions) -> String {
    let guard = &options.header_guard;
    let mut out = options.copyright.clone();

    out.push_str(&format!("#ifndef {}\n", guard));
    out.push_str(&format!("#define {}\n\n", guard));
    out.push_str(&format!(
        "extern const float {}[{}][{}];\n\n",
        options.data_array,
        dataset.row_count(),
        dataset.col_count()
    ));
    out.push_str(&format!(
        "extern const float {}[{}];\n\n",
        options.min_array,
        params.min.len()
    ));
    out.push_str(&format!(
        "extern const float {}[{}];\n\n",
        options.max_array,
        params.max.len()
    ));
    out.push_str(&format!("#endif // {}\n", guard));

    out
}
