//! NHTS Trip Report
//!
//! Aggregates the 2022 NHTS passenger origin/destination dataset by
//! transportation mode and distance band, then renders a stacked bar
//! chart, per-mode pie charts and a CSV summary table.
//!
//! This crate provides the core implementation for the
//! `nhts-report` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! nhts-report report --input trips.csv --output-dir out/ --summary
//! nhts-report --help
//! ```

pub mod aggregator;
pub mod chart;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
