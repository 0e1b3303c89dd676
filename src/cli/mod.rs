//! Command-line parsing for the benchmark aggregator.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! aggregation and fitting code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::domain::{GrowthClass, TimeUnit};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "bigo", version, about = "Benchmark repetition statistics and Big-O fitting")]
pub struct Cli {
    /// Log aggregation decisions to stderr (overrides RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Aggregate run records from a JSON file and print/export the report.
    Report(ReportArgs),
    /// Generate a synthetic complexity series and aggregate it.
    Demo(DemoArgs),
}

/// How the report is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Console,
    Json,
}

/// Options shared by every command that aggregates.
#[derive(Debug, Args, Clone)]
pub struct AggregateArgs {
    /// Fit this complexity instead of the one requested on the runs.
    #[arg(long, value_enum)]
    pub complexity: Option<GrowthClass>,

    /// Skip `_mean` / `_stddev` summaries.
    #[arg(long)]
    pub no_repetitions: bool,

    /// Skip `_BigO` / `_RMS` summaries.
    #[arg(long)]
    pub no_complexity: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
    pub format: OutputFormat,

    /// Write the report here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct ReportArgs {
    /// Run records (a report document or a bare JSON array).
    #[arg(short, long, value_name = "JSON")]
    pub input: PathBuf,

    #[command(flatten)]
    pub aggregate: AggregateArgs,
}

#[derive(Debug, Args, Clone)]
pub struct DemoArgs {
    /// Benchmark family name for the generated runs.
    #[arg(long, default_value = "BM_Synthetic")]
    pub family: String,

    /// Curve the times are generated from (must be concrete).
    #[arg(long, value_enum, default_value_t = GrowthClass::N)]
    pub curve: GrowthClass,

    /// Complexity requested on the generated runs.
    #[arg(long, value_enum, default_value_t = GrowthClass::Auto)]
    pub request: GrowthClass,

    /// Input sizes (comma separated).
    #[arg(long, value_delimiter = ',', default_value = "8,64,512,4096")]
    pub sizes: Vec<u64>,

    /// Repetitions per input size.
    #[arg(long, default_value_t = 1)]
    pub repetitions: usize,

    /// Iterations per run.
    #[arg(long, default_value_t = 1000)]
    pub iterations: u64,

    /// Seconds per unit of the curve.
    #[arg(long, default_value_t = 2.5e-9)]
    pub coefficient: f64,

    /// Log-normal noise level (0 for exact data).
    #[arg(long, default_value_t = 0.02)]
    pub noise: f64,

    /// Random seed.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Display unit for the generated runs.
    #[arg(long, value_enum, default_value_t = TimeUnit::Ns)]
    pub time_unit: TimeUnit,

    /// Also save the generated runs (bare JSON array).
    #[arg(long, value_name = "JSON")]
    pub save_runs: Option<PathBuf>,

    #[command(flatten)]
    pub aggregate: AggregateArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_report_flags() {
        let cli = Cli::parse_from([
            "bigo", "report", "-i", "runs.json", "--complexity", "nlogn", "--format", "json",
            "--no-repetitions",
        ]);
        let Command::Report(args) = cli.command else {
            panic!("expected report");
        };
        assert_eq!(args.input, PathBuf::from("runs.json"));
        assert_eq!(args.aggregate.complexity, Some(GrowthClass::NLogN));
        assert_eq!(args.aggregate.format, OutputFormat::Json);
        assert!(args.aggregate.no_repetitions);
        assert!(!args.aggregate.no_complexity);
    }

    #[test]
    fn demo_defaults_and_size_list() {
        let cli = Cli::parse_from(["bigo", "-v", "demo", "--sizes", "1,10,100", "--curve", "nsquared"]);
        assert!(cli.verbose);
        let Command::Demo(args) = cli.command else {
            panic!("expected demo");
        };
        assert_eq!(args.sizes, vec![1, 10, 100]);
        assert_eq!(args.curve, GrowthClass::NSquared);
        assert_eq!(args.request, GrowthClass::Auto);
        assert_eq!(args.aggregate.format, OutputFormat::Console);
    }
}
