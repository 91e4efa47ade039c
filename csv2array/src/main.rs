//! csv2array CLI - Generate C arrays from CSV test data
//!
//! ```bash
//! csv2array test_data.csv --scaling_params scaling_params.json
//! csv2array a.csv b.csv --scaling_params s.json --output_c out/model.c
//! ```
//!
//! Without `--output_c`, each `<name>.csv` produces `<name>.c` and `<name>.h`
//! next to it.

use clap::Parser;
use csv2array::convert_all;
use csv2array::logs::log_error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "csv2array", version)]
#[command(about = "Process CSV files and generate C and header arrays", long_about = None)]
struct Cli {
    /// Paths to the CSV files
    csv_files: Vec<PathBuf>,

    /// Output C file name (header name derived by replacing .c with .h)
    #[arg(long = "output_c")]
    output_c: Option<PathBuf>,

    /// Path to the scaling parameters JSON file
    #[arg(long = "scaling_params")]
    scaling_params: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(e) = convert_all(&cli.csv_files, &cli.scaling_params, cli.output_c.as_deref()) {
        log_error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
