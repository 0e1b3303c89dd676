//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - installs the log subscriber
//! - loads or generates run records
//! - runs the aggregation pipeline
//! - prints or writes the report

use std::io::Write;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{AggregateArgs, Command, DemoArgs, OutputFormat, ReportArgs};
use crate::data::SeriesSpec;
use crate::domain::AggregateConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `bigo` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Report(args) => handle_report(args),
        Command::Demo(args) => handle_demo(args),
    }
}

/// Install a stderr subscriber. `.env` is loaded first so `RUST_LOG` can live there.
fn init_tracing(verbose: bool) {
    dotenvy::dotenv().ok();
    let filter = if verbose {
        EnvFilter::new("bench_bigo=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_report(args: ReportArgs) -> Result<(), AppError> {
    let runs = crate::io::read_runs(&args.input)?;
    let config = aggregate_config_from_args(&args.aggregate);
    let output = pipeline::run_pipeline(&runs, &config)?;
    emit(&output, &args.aggregate)
}

fn handle_demo(args: DemoArgs) -> Result<(), AppError> {
    let spec = series_spec_from_args(&args)?;
    let runs = crate::data::generate_series(&spec)?;
    if let Some(path) = &args.save_runs {
        crate::io::write_runs_file(path, &runs)?;
    }
    let config = aggregate_config_from_args(&args.aggregate);
    let output = pipeline::run_pipeline(&runs, &config)?;
    emit(&output, &args.aggregate)
}

fn emit(output: &pipeline::RunOutput, args: &AggregateArgs) -> Result<(), AppError> {
    match (args.format, &args.output) {
        (OutputFormat::Json, Some(path)) => crate::io::write_report_file(path, &output.families),
        (OutputFormat::Json, None) => {
            let stdout = std::io::stdout();
            crate::io::write_report_json(stdout.lock(), &output.families)?;
            println!();
            Ok(())
        }
        (OutputFormat::Console, Some(path)) => {
            let mut file = std::fs::File::create(path).map_err(|e| {
                AppError::invalid_input(format!("Failed to create report '{}': {e}", path.display()))
            })?;
            file.write_all(crate::report::format_report(&output.families).as_bytes())
                .map_err(|e| AppError::invalid_input(format!("Failed to write report: {e}")))
        }
        (OutputFormat::Console, None) => {
            print!("{}", crate::report::format_report(&output.families));
            Ok(())
        }
    }
}

pub fn aggregate_config_from_args(args: &AggregateArgs) -> AggregateConfig {
    AggregateConfig {
        repetitions: !args.no_repetitions,
        complexity: !args.no_complexity,
        complexity_override: args.complexity,
    }
}

pub fn series_spec_from_args(args: &DemoArgs) -> Result<SeriesSpec, AppError> {
    let curve = args.curve.to_curve().ok_or_else(|| {
        AppError::invalid_input(format!(
            "--curve must be a concrete complexity, got {:?}.",
            args.curve
        ))
    })?;
    Ok(SeriesSpec {
        family: args.family.clone(),
        curve,
        request: args.request,
        sizes: args.sizes.clone(),
        repetitions: args.repetitions,
        iterations: args.iterations,
        coefficient: args.coefficient,
        noise: args.noise,
        seed: args.seed,
        time_unit: args.time_unit,
    })
}
