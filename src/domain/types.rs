//! Shared domain types.
//!
//! These types are serializable so that run records can be read from and
//! written back to the harness JSON stream without reshaping.

use chrono::{DateTime, Local};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Requested complexity for a benchmark family.
///
/// `Auto` means: search the concrete curves and keep the best fit.
/// `None` means: no complexity fitting was requested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GrowthClass {
    Constant,
    #[value(name = "logn")]
    LogN,
    N,
    #[value(name = "nlogn")]
    NLogN,
    #[value(name = "nsquared")]
    NSquared,
    #[value(name = "ncubed")]
    NCubed,
    Auto,
    #[default]
    None,
}

/// Concrete growth curve actually fitted after resolving `GrowthClass::Auto`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Curve {
    Constant,
    LogN,
    N,
    NLogN,
    NSquared,
    NCubed,
}

impl GrowthClass {
    pub fn to_curve(self) -> Option<Curve> {
        match self {
            GrowthClass::Constant => Some(Curve::Constant),
            GrowthClass::LogN => Some(Curve::LogN),
            GrowthClass::N => Some(Curve::N),
            GrowthClass::NLogN => Some(Curve::NLogN),
            GrowthClass::NSquared => Some(Curve::NSquared),
            GrowthClass::NCubed => Some(Curve::NCubed),
            GrowthClass::Auto | GrowthClass::None => None,
        }
    }

    /// Big-O label; empty for the request-only modifiers.
    pub fn label(self) -> &'static str {
        self.to_curve().map(Curve::label).unwrap_or("")
    }
}

impl From<Curve> for GrowthClass {
    fn from(value: Curve) -> Self {
        match value {
            Curve::Constant => GrowthClass::Constant,
            Curve::LogN => GrowthClass::LogN,
            Curve::N => GrowthClass::N,
            Curve::NLogN => GrowthClass::NLogN,
            Curve::NSquared => GrowthClass::NSquared,
            Curve::NCubed => GrowthClass::NCubed,
        }
    }
}

impl Curve {
    /// Evaluation order for `GrowthClass::Auto`. The first entry is the
    /// incumbent; later entries replace it only on a strictly lower RMS.
    pub const AUTO_CANDIDATES: [Curve; 6] = [
        Curve::Constant,
        Curve::LogN,
        Curve::N,
        Curve::NLogN,
        Curve::NSquared,
        Curve::NCubed,
    ];

    /// Big-O label as printed next to a fitted coefficient.
    pub fn label(self) -> &'static str {
        match self {
            Curve::Constant => "* 1",
            Curve::LogN => "* lgN",
            Curve::N => "* N",
            Curve::NLogN => "* NlgN",
            Curve::NSquared => "* N**2",
            Curve::NCubed => "* N**3",
        }
    }

    /// Short name for terminal tables.
    pub fn name(self) -> &'static str {
        match self {
            Curve::Constant => "(1)",
            Curve::LogN => "lgN",
            Curve::N => "N",
            Curve::NLogN => "NlgN",
            Curve::NSquared => "N^2",
            Curve::NCubed => "N^3",
        }
    }

    /// `log2` shapes are undefined at `n = 0`.
    pub fn requires_positive_n(self) -> bool {
        matches!(self, Curve::LogN | Curve::NLogN)
    }
}

/// Display unit of a benchmark's times.
///
/// Accumulated times are always stored in seconds; the unit only selects the
/// multiplier applied when reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    #[default]
    Ns,
    Us,
    Ms,
}

impl TimeUnit {
    /// Seconds to this unit.
    pub fn multiplier(self) -> f64 {
        match self {
            TimeUnit::Ns => 1e9,
            TimeUnit::Us => 1e6,
            TimeUnit::Ms => 1e3,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            TimeUnit::Ns => "ns",
            TimeUnit::Us => "us",
            TimeUnit::Ms => "ms",
        }
    }
}

/// One benchmark run as produced by the harness (or synthesized by an aggregator).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    #[serde(rename = "name")]
    pub benchmark_name: String,
    #[serde(rename = "label", default)]
    pub report_label: String,
    #[serde(default)]
    pub iterations: u64,
    /// Accumulated wall time in seconds over all iterations.
    #[serde(rename = "real_time", default)]
    pub real_accumulated_time: f64,
    /// Accumulated CPU time in seconds over all iterations.
    #[serde(rename = "cpu_time", default)]
    pub cpu_accumulated_time: f64,
    #[serde(default)]
    pub bytes_per_second: f64,
    #[serde(default)]
    pub items_per_second: f64,
    /// Input size tag used for complexity fitting.
    #[serde(default)]
    pub complexity_n: u64,
    #[serde(default)]
    pub error_occurred: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error_message: String,
    /// Requested complexity (or, on a Big-O summary, the fitted one).
    #[serde(default)]
    pub complexity: GrowthClass,
    #[serde(default)]
    pub time_unit: TimeUnit,
    #[serde(rename = "big_o", default)]
    pub report_big_o: bool,
    #[serde(rename = "rms", default)]
    pub report_rms: bool,
}

impl RunRecord {
    pub fn real_time_per_iteration(&self) -> f64 {
        self.real_accumulated_time / self.iterations as f64
    }

    pub fn cpu_time_per_iteration(&self) -> f64 {
        self.cpu_accumulated_time / self.iterations as f64
    }

    /// Benchmark name up to the first `/` (the argument-free family name).
    pub fn family_name(&self) -> &str {
        match self.benchmark_name.find('/') {
            Some(idx) => &self.benchmark_name[..idx],
            None => &self.benchmark_name,
        }
    }

    pub fn is_aggregate(&self) -> bool {
        self.report_big_o
            || self.report_rms
            || ["_mean", "_stddev"]
                .iter()
                .any(|suffix| self.benchmark_name.ends_with(suffix))
    }
}

/// One `(input size, time per iteration)` observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeTimeSample {
    pub n: u64,
    pub time: f64,
}

impl SizeTimeSample {
    pub fn new(n: u64, time: f64) -> Self {
        Self { n, time }
    }
}

/// Best fit of one curve against one series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitResult {
    pub curve: Curve,
    /// Scalar minimizing `Σ (time_i - coefficient * f(n_i))^2`.
    pub coefficient: f64,
    /// RMS residual divided by the mean observed time.
    pub normalized_rms: f64,
}

/// Which aggregation passes run, as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateConfig {
    /// Emit `_mean` / `_stddev` records for repeated runs.
    pub repetitions: bool,
    /// Emit `_BigO` / `_RMS` records for complexity series.
    pub complexity: bool,
    /// Replaces the complexity requested on the records when set.
    pub complexity_override: Option<GrowthClass>,
}

impl Default for AggregateConfig {
    fn default() -> Self {
        Self {
            repetitions: true,
            complexity: true,
            complexity_override: None,
        }
    }
}

/// Metadata written at the top of a report file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportContext {
    pub tool: String,
    pub date: DateTime<Local>,
    pub families: usize,
}

/// A written report (JSON): the input runs interleaved with their summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportFile {
    pub context: ReportContext,
    pub benchmarks: Vec<RunRecord>,
}
