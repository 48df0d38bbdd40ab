mod common;

use common::{dataset_csv, Row};
use nhts_trip_report::aggregator::{aggregate_by_mode_category, aggregate_trips, off_mode_trips};
use nhts_trip_report::output::{read_aggregated_csv, write_aggregated_csv};
use nhts_trip_report::parser::read_dataset;
use nhts_trip_report::utils::config::ReportConfig;
use proptest::prelude::*;

const MODES: [&str; 4] = ["air", "rail", "vehicle", "atf"];

/// Synthetic rows: a mode category plus whole-number counts for all 32 fields
fn arb_rows() -> impl Strategy<Value = Vec<(usize, Vec<u32>)>> {
    prop::collection::vec((0..MODES.len(), prop::collection::vec(0u32..100_000, 32)), 1..20)
}

fn to_csv(config: &ReportConfig, rows: &[(usize, Vec<u32>)], fields: &[String]) -> String {
    let rows: Vec<Row> = rows
        .iter()
        .map(|(mode, counts)| {
            let cells: Vec<(&str, f64)> = fields
                .iter()
                .zip(counts)
                .map(|(f, c)| (f.as_str(), *c as f64))
                .collect();
            Row::consistent(MODES[*mode], &cells)
        })
        .collect();
    dataset_csv(config, &rows)
}

proptest! {
    #[test]
    fn aggregated_total_matches_annual_total(rows in arb_rows()) {
        let config = ReportConfig::default();
        let fields = config.field_names();
        let csv = to_csv(&config, &rows, &fields);
        let dataset = read_dataset(csv.as_bytes(), &config).unwrap();

        let table = aggregate_trips(&dataset, &config).unwrap();

        prop_assert_eq!(table.grand_total(), dataset.annual_total());
    }

    #[test]
    fn grouped_equals_columnwise_for_own_mode_rows(rows in arb_rows()) {
        let config = ReportConfig::default();
        let fields = config.field_names();
        let bands = config.distance_bands.len();
        // Keep only the counts under each row's own mode
        let rows: Vec<(usize, Vec<u32>)> = rows
            .into_iter()
            .map(|(mode, counts)| {
                let own = counts
                    .iter()
                    .enumerate()
                    .map(|(i, c)| if i / bands == mode { *c } else { 0 })
                    .collect();
                (mode, own)
            })
            .collect();
        let csv = to_csv(&config, &rows, &fields);
        let dataset = read_dataset(csv.as_bytes(), &config).unwrap();

        let groups = aggregate_by_mode_category(&dataset, &config).unwrap();
        let columnwise = aggregate_trips(&dataset, &config).unwrap();

        for mode in &config.modes {
            for band in &config.distance_bands {
                let grouped = groups.get(&mode.id).map_or(0.0, |t| t.get(mode, band));
                prop_assert_eq!(grouped, columnwise.get(mode, band));
            }
        }
        prop_assert_eq!(off_mode_trips(&dataset, &config).unwrap().grand_total(), 0.0);
    }

    #[test]
    fn grouped_plus_off_mode_equals_columnwise(rows in arb_rows()) {
        let config = ReportConfig::default();
        let fields = config.field_names();
        let csv = to_csv(&config, &rows, &fields);
        let dataset = read_dataset(csv.as_bytes(), &config).unwrap();

        let mut merged = off_mode_trips(&dataset, &config).unwrap();
        for table in aggregate_by_mode_category(&dataset, &config).unwrap().values() {
            merged.merge(table);
        }

        prop_assert_eq!(merged, aggregate_trips(&dataset, &config).unwrap());
    }

    #[test]
    fn export_round_trips(rows in arb_rows()) {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = ReportConfig::new().with_output_dir(temp_dir.path());
        let fields = config.field_names();
        let csv = to_csv(&config, &rows, &fields);
        let dataset = read_dataset(csv.as_bytes(), &config).unwrap();
        let table = aggregate_trips(&dataset, &config).unwrap();

        let path = write_aggregated_csv(&table, &config).unwrap();
        let loaded = read_aggregated_csv(&path, &config).unwrap();

        prop_assert_eq!(loaded, table);
    }
}
