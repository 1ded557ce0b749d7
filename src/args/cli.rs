use clap::Parser;
use std::time::Duration;

use super::parsers::{parse_duration_arg, parse_err_threshold, parse_positive_usize};
use super::types::{PositiveUsize, RampStyle};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "HTTP load tester that ramps client concurrency against a fixed URL set until the \
target starts to degrade."
)]
pub struct TesterArgs {
    /// The host to connect to. Must include the scheme (e.g. http://localhost:8080).
    #[arg(long)]
    pub host: String,

    /// Backslash (\) separated paths to query.
    #[arg(long, default_value = "")]
    pub paths: String,

    /// File to read URL paths from, one per line. Each path is prefixed by the host.
    #[arg(long = "paths-file", alias = "paths_file")]
    pub paths_file: Option<String>,

    /// Max concurrency to use in the load test (capped at 512).
    #[arg(
        long = "concurrency",
        short = 'c',
        default_value = "10",
        value_parser = parse_positive_usize
    )]
    pub concurrency: PositiveUsize,

    /// Determines how concurrency ramps between stages.
    #[arg(
        long = "ramp-style",
        alias = "ramp_style",
        default_value = "doubling",
        value_enum
    )]
    pub ramp_style: RampStyle,

    /// How much concurrency increases at each stage. Only applies if ramp-style is linear.
    #[arg(
        long = "linear-ramp-step",
        alias = "linear_ramp_step",
        default_value = "5",
        value_parser = parse_positive_usize
    )]
    pub linear_ramp_step: PositiveUsize,

    /// How long to send requests at each degree of concurrency (supports ms/s/m/h).
    #[arg(
        long = "stage-delay",
        alias = "stage_delay",
        default_value = "10s",
        value_parser = parse_duration_arg
    )]
    pub stage_delay: Duration,

    /// The error rate at which the stress test is canceled, even if max concurrency
    /// has not been reached. Must be > 0 and <= 1.0.
    #[arg(
        long = "err-threshold",
        alias = "err_threshold",
        default_value = "0.05",
        value_parser = parse_err_threshold
    )]
    pub err_threshold: f64,

    /// Enable verbose logging (debug level unless overridden by LOADTEST_LOG/RUST_LOG).
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
