mod common;

use common::{write_dataset, Row};
use nhts_trip_report::commands::{execute_check, execute_report, validate_args, ReportArgs};
use nhts_trip_report::output::{read_aggregated_csv, read_summary};
use nhts_trip_report::utils::config::{ChartFormat, ReportConfig};
use pretty_assertions::assert_eq;

fn rows() -> Vec<Row<'static>> {
    vec![
        Row::consistent("air", &[("air_0_10mi", 5.0), ("air_gt300mi", 20.0)]),
        Row::consistent("air", &[("air_0_10mi", 3.0)]),
        Row::consistent("vehicle", &[("vehicle_0_10mi", 400.0), ("vehicle_10_25mi", 120.0)]),
        Row::consistent("atf", &[("atf_0_10mi", 75.0)]),
    ]
}

#[test]
fn test_report_writes_all_artifacts() {
    let temp_dir = tempfile::tempdir().unwrap();
    let out_dir = temp_dir.path().join("out");
    let config = ReportConfig::new()
        .with_output_dir(&out_dir)
        .with_chart_format(ChartFormat::Svg);
    let input_path = write_dataset(temp_dir.path(), &config, &rows());

    let args = ReportArgs {
        input_path,
        config: config.clone(),
        run_check: true,
        ..Default::default()
    };
    validate_args(&args).unwrap();

    let outcome = execute_report(args).unwrap();

    assert_eq!(outcome.bar_chart, out_dir.join("trips_by_mode_distance.svg"));
    assert!(outcome.bar_chart.exists());

    // rail has no trips: no pie chart for it
    assert_eq!(
        outcome.pie_charts,
        vec![
            out_dir.join("pie_air.svg"),
            out_dir.join("pie_vehicle.svg"),
            out_dir.join("pie_atf.svg"),
        ]
    );
    assert!(!out_dir.join("pie_rail.svg").exists());

    let pie_air = std::fs::read_to_string(out_dir.join("pie_air.svg")).unwrap();
    assert!(pie_air.contains("Air - Total: 28 trips"));

    assert_eq!(outcome.csv_path, out_dir.join("aggregated_trips.csv"));
    let table = read_aggregated_csv(&outcome.csv_path, &config).unwrap();
    assert_eq!(table, outcome.table);
    assert_eq!(table.get_field("air_0_10mi"), 8.0);
    assert_eq!(table.grand_total(), 623.0);

    let summary = read_summary(outcome.summary_path.unwrap()).unwrap();
    assert_eq!(summary.row_count, 4);
    assert_eq!(summary.grand_total, summary.annual_total_trips);
    assert_eq!(summary.consistency.map(|c| c.mismatches), Some(0));
    assert_eq!(outcome.consistency.map(|c| c.rows_checked), Some(4));
}

#[test]
fn test_report_png_charts() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = ReportConfig::new().with_output_dir(temp_dir.path().join("png"));
    let input_path = write_dataset(temp_dir.path(), &config, &rows());

    let outcome = execute_report(ReportArgs {
        input_path,
        config,
        write_json: false,
        ..Default::default()
    })
    .unwrap();

    assert!(outcome.summary_path.is_none());
    assert_eq!(outcome.bar_chart.extension().unwrap(), "png");
    for path in std::iter::once(&outcome.bar_chart).chain(&outcome.pie_charts) {
        let bytes = std::fs::read(path).unwrap();
        assert!(bytes.starts_with(b"\x89PNG"), "{} is not a PNG", path.display());
    }
}

#[test]
fn test_report_fails_on_missing_column() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input_path = temp_dir.path().join("trips.csv");
    std::fs::write(&input_path, "mode,air_0_10mi,annual_total_trips\nair,1,1\n").unwrap();

    let out_dir = temp_dir.path().join("out");
    let result = execute_report(ReportArgs {
        input_path,
        config: ReportConfig::new().with_output_dir(&out_dir),
        ..Default::default()
    });

    let err = result.unwrap_err();
    assert!(format!("{:#}", err).contains("Missing required column"));
    assert!(!out_dir.exists());
}

#[test]
fn test_check_command_reports_without_failing() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = ReportConfig::default();
    let mut bad = Row::consistent("rail", &[("rail_0_10mi", 2.0)]);
    bad.annual_total_trips = 3.0;
    let input_path = write_dataset(temp_dir.path(), &config, &[bad]);

    let report = execute_check(&input_path, &config).unwrap();

    assert_eq!(report.mismatches, 1);
}
