//! Formatted terminal output for aggregated runs.
//!
//! Rows follow the harness console layout:
//!
//! ```text
//! Benchmark              Time        CPU   Iterations
//! ---------------------------------------------------
//! BM_Insert/8          20 ns      20 ns        1000
//! BM_Insert_BigO     2.50 N     2.50 N
//! BM_Insert_RMS         1 %        1 %
//! ```
//!
//! Big-O rows print the coefficient in the run's time unit; RMS rows print the
//! normalized error as a percentage (undoing the unit division applied when the
//! summary was built).

use crate::aggregate::FamilyReport;
use crate::domain::RunRecord;

/// Format every family's runs and summaries as one table.
pub fn format_report(reports: &[FamilyReport]) -> String {
    let name_width = reports
        .iter()
        .flat_map(|r| r.records())
        .map(|r| r.benchmark_name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Benchmark".len());

    let mut out = String::new();
    let header = format!(
        "{:<name_width$} {:>13} {:>13} {:>12}",
        "Benchmark", "Time", "CPU", "Iterations"
    );
    out.push_str(&header);
    out.push('\n');
    out.push_str(&"-".repeat(header.len()));
    out.push('\n');

    for record in reports.iter().flat_map(|r| r.records()) {
        out.push_str(format_row(record, name_width).trim_end());
        out.push('\n');
    }

    out
}

/// Format a single record as one table row (no trailing newline).
pub fn format_row(run: &RunRecord, name_width: usize) -> String {
    let name = &run.benchmark_name;

    if run.error_occurred {
        return format!("{name:<name_width$} ERROR OCCURRED: '{}'", run.error_message);
    }

    let multiplier = run.time_unit.multiplier();
    let unit = run.time_unit.suffix();

    if run.report_big_o {
        let curve = run.complexity.to_curve().map(|c| c.name()).unwrap_or("");
        let real = format!("{:.2} {curve}", run.real_accumulated_time * multiplier);
        let cpu = format!("{:.2} {curve}", run.cpu_accumulated_time * multiplier);
        return format!("{name:<name_width$} {real:>13} {cpu:>13}{}", label_suffix(run));
    }

    if run.report_rms {
        let real = format!("{:.0} %", run.real_accumulated_time * multiplier * 100.0);
        let cpu = format!("{:.0} %", run.cpu_accumulated_time * multiplier * 100.0);
        return format!("{name:<name_width$} {real:>13} {cpu:>13}{}", label_suffix(run));
    }

    // Zero-iteration records (stddev) already hold per-iteration values.
    let (real, cpu) = if run.iterations == 0 {
        (run.real_accumulated_time, run.cpu_accumulated_time)
    } else {
        (run.real_time_per_iteration(), run.cpu_time_per_iteration())
    };
    let real = format!("{} {unit}", fmt_time(real * multiplier));
    let cpu = format!("{} {unit}", fmt_time(cpu * multiplier));

    let mut row = format!(
        "{name:<name_width$} {real:>13} {cpu:>13} {:>12}",
        run.iterations
    );
    if run.items_per_second > 0.0 {
        row.push_str(&format!(" {}items/s", fmt_human(run.items_per_second)));
    }
    if run.bytes_per_second > 0.0 {
        row.push_str(&format!(" {}B/s", fmt_human(run.bytes_per_second)));
    }
    row.push_str(&label_suffix(run));
    row
}

fn label_suffix(run: &RunRecord) -> String {
    if run.report_label.is_empty() {
        String::new()
    } else {
        format!(" {}", run.report_label)
    }
}

fn fmt_time(v: f64) -> String {
    if v < 10.0 {
        format!("{v:.2}")
    } else if v < 100.0 {
        format!("{v:.1}")
    } else {
        format!("{v:.0}")
    }
}

/// `1234567.0 -> "1.235M"`.
fn fmt_human(v: f64) -> String {
    const UNITS: [(f64, &str); 3] = [(1e9, "G"), (1e6, "M"), (1e3, "k")];
    for (scale, suffix) in UNITS {
        if v >= scale {
            return format!("{:.3}{suffix}", v / scale);
        }
    }
    format!("{v:.3}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate_runs;
    use crate::domain::{AggregateConfig, GrowthClass, TimeUnit};

    fn run(name: &str, n: u64, cpu: f64) -> RunRecord {
        RunRecord {
            benchmark_name: name.to_string(),
            iterations: 1000,
            real_accumulated_time: cpu * 1000.0,
            cpu_accumulated_time: cpu * 1000.0,
            complexity_n: n,
            complexity: GrowthClass::Auto,
            time_unit: TimeUnit::Ns,
            ..RunRecord::default()
        }
    }

    #[test]
    fn big_o_and_rms_rows_are_rendered_in_display_units() {
        let runs = vec![
            run("BM_Insert/8", 8, 2.5e-9 * 8.0),
            run("BM_Insert/64", 64, 2.5e-9 * 64.0),
        ];
        let reports = aggregate_runs(&runs, &AggregateConfig::default()).unwrap();
        let text = format_report(&reports);

        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("Benchmark"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].contains("20.0 ns"), "{}", lines[2]);
        assert!(lines[2].contains("1000"));
        assert!(lines[4].starts_with("BM_Insert_BigO"));
        assert!(lines[4].contains("2.50 N"), "{}", lines[4]);
        assert!(lines[5].starts_with("BM_Insert_RMS"));
        assert!(lines[5].contains("0 %"), "{}", lines[5]);
    }

    #[test]
    fn errored_runs_show_their_message() {
        let mut failed = run("BM_Broken", 0, 0.0);
        failed.error_occurred = true;
        failed.error_message = "allocation failed".to_string();
        let row = format_row(&failed, 12);
        assert_eq!(row, "BM_Broken    ERROR OCCURRED: 'allocation failed'");
    }

    #[test]
    fn throughput_and_labels_are_appended() {
        let mut r = run("BM_Copy", 0, 1e-6);
        r.items_per_second = 2_500_000.0;
        r.report_label = "cold".to_string();
        let row = format_row(&r, 8);
        assert!(row.contains("2.500Mitems/s"), "{row}");
        assert!(row.ends_with(" cold"));
        assert!(row.contains("1000 ns"));
    }
}
