//! End-to-end aggregation over harness-shaped run lists.

use bench_bigo::aggregate::{aggregate_complexity, aggregate_runs};
use bench_bigo::app::pipeline::run_pipeline;
use bench_bigo::data::{SeriesSpec, generate_series};
use bench_bigo::domain::{AggregateConfig, Curve, GrowthClass, RunRecord, TimeUnit};
use bench_bigo::io::parse_runs;
use bench_bigo::report::format_report;

#[test]
fn linear_family_reports_big_o_n() {
    let c = 3.0e-9;
    let runs: Vec<RunRecord> = [8u64, 64, 512, 4096]
        .iter()
        .map(|&n| RunRecord {
            benchmark_name: format!("BM_ListInsert/{n}"),
            iterations: 500,
            real_accumulated_time: 1.05 * c * n as f64 * 500.0,
            cpu_accumulated_time: c * n as f64 * 500.0,
            complexity_n: n,
            complexity: GrowthClass::Auto,
            time_unit: TimeUnit::Ns,
            ..RunRecord::default()
        })
        .collect();

    let out = aggregate_complexity(&runs).unwrap();
    let big_o = &out[0];
    let rms = &out[1];
    assert_eq!(big_o.benchmark_name, "BM_ListInsert_BigO");
    assert_eq!(big_o.complexity, GrowthClass::N);
    assert!((big_o.cpu_accumulated_time - c).abs() < c * 1e-9);
    assert!(rms.cpu_accumulated_time.abs() < 1e-15);
}

#[test]
fn noisy_quadratic_series_is_recognized() {
    for seed in [1, 2, 3] {
        let spec = SeriesSpec {
            curve: Curve::NSquared,
            sizes: vec![16, 32, 64, 128, 256, 512],
            repetitions: 2,
            noise: 0.03,
            seed,
            ..SeriesSpec::default()
        };
        let runs = generate_series(&spec).unwrap();
        let reports = aggregate_runs(&runs, &AggregateConfig::default()).unwrap();
        assert_eq!(reports.len(), 1);
        let big_o = &reports[0].complexity[0];
        assert_eq!(big_o.complexity, GrowthClass::NSquared, "seed {seed}");
        // Coefficient within noise of the generating value.
        let rel = (big_o.cpu_accumulated_time - spec.coefficient).abs() / spec.coefficient;
        assert!(rel < 0.1, "seed {seed}: relative error {rel}");
    }
}

#[test]
fn json_report_to_console_table() {
    let json = r#"[
        { "name": "BM_StringCopy", "iterations": 100, "real_time": 1.0e-6, "cpu_time": 1.0e-6, "label": "x" },
        { "name": "BM_StringCopy", "iterations": 100, "real_time": 3.0e-6, "cpu_time": 3.0e-6, "label": "x" },
        { "name": "BM_StringCopy", "iterations": 100, "error_occurred": true, "error_message": "oom", "label": "x" },
        { "name": "BM_Sort/1", "iterations": 10, "real_time": 1e-8, "cpu_time": 1e-8,
          "complexity_n": 1, "complexity": "auto", "time_unit": "ns" },
        { "name": "BM_Sort/10", "iterations": 10, "real_time": 1e-7, "cpu_time": 1e-7,
          "complexity_n": 10, "complexity": "auto", "time_unit": "ns" }
    ]"#;
    let runs = parse_runs(json).unwrap();
    let output = run_pipeline(&runs, &AggregateConfig::default()).unwrap();
    assert_eq!(output.errored_runs, 1);

    let names: Vec<String> = output
        .aggregates()
        .iter()
        .map(|r| r.benchmark_name.clone())
        .collect();
    assert_eq!(
        names,
        ["BM_StringCopy_mean", "BM_StringCopy_stddev", "BM_Sort_BigO", "BM_Sort_RMS"]
    );

    let mean = output.aggregates()[0];
    assert_eq!(mean.report_label, "x");
    assert!((mean.cpu_time_per_iteration() - 2.0e-8).abs() < 1e-20);

    let table = format_report(&output.families);
    assert!(table.contains("ERROR OCCURRED: 'oom'"));
    assert!(table.contains("BM_Sort_BigO"));
    assert!(table.contains("1.00 N"), "{table}");
}

#[test]
fn harness_defects_abort_aggregation() {
    let runs = vec![
        RunRecord {
            benchmark_name: "BM_A/1".to_string(),
            iterations: 10,
            real_accumulated_time: 1.0,
            cpu_accumulated_time: 1.0,
            complexity_n: 1,
            complexity: GrowthClass::Auto,
            ..RunRecord::default()
        },
        RunRecord {
            benchmark_name: "BM_A/2".to_string(),
            iterations: 10,
            complexity_n: 2,
            complexity: GrowthClass::Auto,
            ..RunRecord::default()
        },
        RunRecord {
            benchmark_name: "BM_A/3".to_string(),
            iterations: 10,
            complexity_n: 3,
            complexity: GrowthClass::Auto,
            ..RunRecord::default()
        },
    ];
    // Mean time is non-zero here, so this fits fine...
    assert!(aggregate_runs(&runs, &AggregateConfig::default()).is_ok());

    // ...but an all-zero series cannot be normalized.
    let zero: Vec<RunRecord> = runs
        .into_iter()
        .map(|r| RunRecord {
            real_accumulated_time: 0.0,
            cpu_accumulated_time: 0.0,
            ..r
        })
        .collect();
    let err = aggregate_runs(&zero, &AggregateConfig::default()).unwrap_err();
    assert_eq!(err.exit_code(), bench_bigo::error::EXIT_NUMERIC);
}
