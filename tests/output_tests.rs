use nhts_trip_report::aggregator::AggregatedTrips;
use nhts_trip_report::output::{
    read_aggregated_csv, read_summary, validate_output_path, write_aggregated_csv, write_chart,
};
use nhts_trip_report::utils::config::{ChartFormat, ReportConfig};
use pretty_assertions::assert_eq;
use std::path::Path;

fn sample_table() -> AggregatedTrips {
    [
        ("air_0_10mi".to_string(), 8.0),
        ("air_gt300mi".to_string(), 1234.5),
        ("rail_25_50mi".to_string(), 77.0),
        ("vehicle_gt300mi".to_string(), 100.0),
        ("atf_0_10mi".to_string(), 5_000_000_000.0),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_csv_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = ReportConfig::new().with_output_dir(temp_dir.path());
    let table = sample_table();

    let path = write_aggregated_csv(&table, &config).unwrap();
    let loaded = read_aggregated_csv(&path, &config).unwrap();

    for mode in &config.modes {
        for band in &config.distance_bands {
            assert_eq!(loaded.get(mode, band), table.get(mode, band), "{}", band.field_name(mode));
        }
    }
    assert_eq!(loaded.len(), 32);
}

#[test]
fn test_vehicle_column_only_in_longest_band() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = ReportConfig::new().with_output_dir(temp_dir.path());
    let table: AggregatedTrips = [("vehicle_gt300mi".to_string(), 100.0)].into_iter().collect();

    let path = write_aggregated_csv(&table, &config).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.get(0), Some("Distance"));
    let vehicle_col = headers.iter().position(|h| h == "vehicle").unwrap();

    let rows: Vec<(String, String)> = reader
        .records()
        .map(|r| {
            let r = r.unwrap();
            (r[0].to_string(), r[vehicle_col].to_string())
        })
        .collect();

    assert_eq!(rows.len(), 8);
    for (label, value) in &rows {
        if label == ">300 miles" {
            assert_eq!(value, "100");
        } else {
            assert_eq!(value, "0");
        }
    }
}

#[test]
fn test_write_chart_svg_and_png() {
    let temp_dir = tempfile::tempdir().unwrap();
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10" viewBox="0 0 10 10"><rect width="10" height="10" fill="blue"/></svg>"#;

    let png_path = temp_dir.path().join("charts/out.png");
    write_chart(svg, &png_path, ChartFormat::Png).unwrap();
    assert!(std::fs::read(&png_path).unwrap().starts_with(b"\x89PNG"));

    let svg_path = temp_dir.path().join("charts/out.svg");
    write_chart(svg, &svg_path, ChartFormat::Svg).unwrap();
    assert_eq!(std::fs::read_to_string(&svg_path).unwrap(), svg);
}

#[test]
fn test_validate_output_path_empty() {
    assert!(validate_output_path(Path::new("")).is_err());
}

#[test]
fn test_read_summary_missing_file() {
    assert!(read_summary("/nonexistent/summary.json").is_err());
}
