//! Report command implementation.
//!
//! The report command:
//! 1. Loads the survey dataset
//! 2. Aggregates trips by mode and distance band
//! 3. Renders the stacked bar chart
//! 4. Renders one pie chart per mode
//! 5. Writes the aggregated CSV (and the JSON summary)

use crate::aggregator::{
    aggregate_trips, calculate_mode_summaries, calculate_trip_distribution, check_row_sums,
    AggregatedTrips, ConsistencyReport,
};
use crate::chart::{generate_text_summary, render_pie_charts, render_stacked_bar};
use crate::output::{build_summary, write_aggregated_csv, write_summary};
use crate::parser::load_dataset;
use crate::utils::config::{ReportConfig, DEFAULT_INPUT_PATH, SUMMARY_JSON_FILE};
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Survey dataset CSV
    pub input_path: PathBuf,

    /// Bands, modes, output directory and display settings
    pub config: ReportConfig,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Run the row-sum consistency diagnostic
    pub run_check: bool,

    /// Write `summary.json` next to the other artifacts
    pub write_json: bool,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            config: ReportConfig::default(),
            print_summary: false,
            run_check: false,
            write_json: true,
        }
    }
}

/// What a report run produced
#[derive(Debug, Clone)]
pub struct ReportOutcome {
    pub table: AggregatedTrips,
    pub bar_chart: PathBuf,
    pub pie_charts: Vec<PathBuf>,
    pub csv_path: PathBuf,
    pub summary_path: Option<PathBuf>,
    pub consistency: Option<ConsistencyReport>,
}

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Dataset missing, unreadable or lacking a required column
/// * Chart or file write errors
pub fn execute_report(args: ReportArgs) -> Result<ReportOutcome> {
    let start_time = Instant::now();
    let config = &args.config;

    info!("Starting report for dataset: {}", args.input_path.display());
    info!("Output directory: {}", config.output_dir.display());

    // Step 1: Load dataset
    info!("Step 1/5: Loading dataset...");
    let dataset = load_dataset(&args.input_path, config).context("Failed to load dataset")?;

    // Step 2: Aggregate
    info!("Step 2/5: Aggregating trips by mode and distance...");
    let table = aggregate_trips(&dataset, config).context("Failed to aggregate trips")?;

    let distribution = calculate_trip_distribution(&table, config);
    info!("Trip distribution: {}", distribution.summary());

    let consistency = if args.run_check {
        let report = check_row_sums(&dataset, config).context("Failed to run consistency check")?;
        info!("Consistency: {}", report.summary());
        Some(report)
    } else {
        debug!("Consistency check skipped");
        None
    };

    // Step 3: Stacked bar chart
    info!("Step 3/5: Rendering stacked bar chart...");
    let bar_chart =
        render_stacked_bar(&table, config).context("Failed to render stacked bar chart")?;

    // Step 4: Pie charts
    info!("Step 4/5: Rendering pie charts...");
    let pie_charts = render_pie_charts(&table, config).context("Failed to render pie charts")?;

    // Step 5: Exports
    info!("Step 5/5: Writing aggregated table...");
    let csv_path = write_aggregated_csv(&table, config).context("Failed to write aggregated CSV")?;
    info!("✓ CSV saved as '{}'", csv_path.display());

    let summary_path = if args.write_json {
        let summary = build_summary(
            &table,
            &dataset,
            &args.input_path,
            config,
            consistency.as_ref(),
        );
        let path = config.output_path(SUMMARY_JSON_FILE);
        write_summary(&summary, &path).context("Failed to write summary JSON")?;
        info!("✓ Summary written to: {}", path.display());
        Some(path)
    } else {
        None
    };

    if args.print_summary {
        let summaries = calculate_mode_summaries(&table, config);
        println!("\n{}", "=".repeat(80));
        println!("TRIP SUMMARY");
        println!("{}", "=".repeat(80));
        println!("Dataset: {}", args.input_path.display());
        println!("Records: {}", dataset.len());
        if let Some(report) = &consistency {
            println!("Consistency: {}", report.summary());
        }
        println!("\n{}", generate_text_summary(&summaries, table.grand_total()));
        println!("{}", "=".repeat(80));
    }

    let elapsed = start_time.elapsed();
    info!(
        "Report completed in {:.2}s ({} charts)",
        elapsed.as_secs_f64(),
        pie_charts.len() + 1
    );

    Ok(ReportOutcome {
        table,
        bar_chart,
        pie_charts,
        csv_path,
        summary_path,
        consistency,
    })
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    if args.input_path.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.input_path.is_dir() {
        anyhow::bail!("Input path is a directory: {}", args.input_path.display());
    }

    if args.config.output_dir.is_file() {
        anyhow::bail!(
            "Output directory is an existing file: {}",
            args.config.output_dir.display()
        );
    }

    if args.config.modes.is_empty() {
        anyhow::bail!("At least one mode must be configured");
    }

    if args.config.distance_bands.is_empty() {
        anyhow::bail!("At least one distance band must be configured");
    }

    Ok(())
}
