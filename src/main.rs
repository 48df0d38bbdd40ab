//! NHTS Trip Report CLI
//!
//! Aggregates survey trips by mode and distance band.
//! Generates charts, a CSV table and a JSON summary.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use nhts_trip_report::commands::{
    display_schema, display_version, execute_check, execute_report, validate_args,
    validate_export_file, ReportArgs,
};
use nhts_trip_report::utils::config::{
    ChartFormat, ReportConfig, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_DIR,
};

/// NHTS Trip Report - trips by mode and distance
#[derive(Parser, Debug)]
#[command(name = "nhts-report")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Aggregate the dataset and write charts and exports
    Report {
        /// Survey dataset CSV
        #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
        input: PathBuf,

        /// Directory for charts and exports
        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,

        /// Open each chart in the default viewer after saving
        #[arg(long)]
        show: bool,

        /// Chart image format
        #[arg(long, value_enum, default_value_t = ChartFormat::Png)]
        format: ChartFormat,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Also run the row-sum consistency check
        #[arg(long)]
        check: bool,

        /// Skip writing summary.json
        #[arg(long)]
        no_json: bool,
    },

    /// Count rows whose distance fields do not add up to annual_total_trips
    Check {
        /// Survey dataset CSV
        #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
        input: PathBuf,
    },

    /// Validate an aggregated_trips.csv export
    Validate {
        /// Path to the aggregated CSV
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display the required input columns
    Schema {
        /// Show every column name
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Report {
            input,
            output_dir,
            show,
            format,
            summary,
            check,
            no_json,
        } => {
            let config = ReportConfig::new()
                .with_output_dir(output_dir)
                .with_interactive_display(show)
                .with_chart_format(format);

            let args = ReportArgs {
                input_path: input,
                config,
                print_summary: summary,
                run_check: check,
                write_json: !no_json,
            };

            // Validate args first
            validate_args(&args)?;

            execute_report(args)?;
        }

        Commands::Check { input } => {
            execute_check(&input, &ReportConfig::default())?;
        }

        Commands::Validate { file } => {
            validate_export_file(&file, &ReportConfig::default())?;
        }

        Commands::Schema { show } => {
            display_schema(show, &ReportConfig::default());
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
