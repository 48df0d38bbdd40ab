//! Aggregation of survey records into the mode × distance-band table.
//!
//! This module transforms loaded records into:
//! - The aggregated trips table (column-wise or grouped by mode category)
//! - Per-mode summaries and distribution statistics
//! - The optional row-sum consistency diagnostic

pub mod consistency;
pub mod metrics;
pub mod table;

// Re-export main types and functions
pub use consistency::{check_row_sums, ConsistencyReport, RowMismatch};
pub use metrics::{calculate_mode_summaries, calculate_trip_distribution, ModeSummary, TripDistribution};
pub use table::{aggregate_by_mode_category, aggregate_trips, off_mode_trips, AggregatedTrips};
