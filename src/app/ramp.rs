use std::time::Duration;

use tracing::info;

use crate::args::RampStyle;
use crate::error::AppResult;
use crate::http::Tester;
use crate::metrics::StressResult;
use crate::shutdown::StageToken;

pub(super) struct RampOptions {
    pub(super) concurrency_cap: usize,
    pub(super) stage_delay: Duration,
    pub(super) err_threshold: f64,
    pub(super) ramp_style: RampStyle,
    pub(super) linear_ramp_step: usize,
}

#[derive(Debug, PartialEq)]
pub(super) enum StageVerdict {
    Continue,
    NoSuccess,
    ThresholdExceeded { err_rate: f64 },
}

/// Drives stages at increasing parallelism until the cap is reached or the
/// target degrades. Halting on degradation is a normal result, not an error.
pub(super) async fn run_ramp(tester: &Tester, options: &RampOptions) -> AppResult<()> {
    for concurrency in stage_plan(options) {
        if !run_stage(tester, options, concurrency).await? {
            break;
        }
    }
    Ok(())
}

async fn run_stage(
    tester: &Tester,
    options: &RampOptions,
    concurrency: usize,
) -> AppResult<bool> {
    let token = StageToken::with_deadline(options.stage_delay);
    let result = tester.stress(&token, concurrency).await?;

    info!("Result at concurrency {}", concurrency);
    for line in result.summary_lines() {
        println!("{}", line);
    }
    println!("Details:");
    print!("{}", result);

    match assess_stage(&result, options.err_threshold) {
        StageVerdict::Continue => Ok(true),
        StageVerdict::NoSuccess => {
            info!("No successful calls at concurrency {}", concurrency);
            Ok(false)
        }
        StageVerdict::ThresholdExceeded { err_rate } => {
            info!(
                "Error rate over threshold at concurrency {}. Rate: {:.3}",
                concurrency, err_rate
            );
            Ok(false)
        }
    }
}

/// Concurrency levels to exercise: 2 upward per the ramp style, plus a final
/// stage at the cap when the ramp would otherwise step past it.
pub(super) fn stage_plan(options: &RampOptions) -> Vec<usize> {
    let mut plan = Vec::new();
    let mut concurrency = 2;
    let mut last = 1;
    while concurrency <= options.concurrency_cap {
        plan.push(concurrency);
        last = concurrency;
        concurrency = next_concurrency(concurrency, options);
    }
    if last != options.concurrency_cap {
        plan.push(options.concurrency_cap);
    }
    plan
}

fn next_concurrency(current: usize, options: &RampOptions) -> usize {
    match options.ramp_style {
        RampStyle::Doubling => current.saturating_mul(2),
        RampStyle::Linear => current.saturating_add(options.linear_ramp_step),
    }
}

pub(super) fn assess_stage(result: &StressResult, err_threshold: f64) -> StageVerdict {
    let summary = result.summary();
    let successes = summary.successes.num_calls;
    let failures = summary.failures.num_calls;
    if successes == 0 {
        return StageVerdict::NoSuccess;
    }
    // The error-rate denominator is successes, not total requests.
    let err_rate = failures as f64 / successes as f64;
    if err_rate > err_threshold {
        return StageVerdict::ThresholdExceeded { err_rate };
    }
    StageVerdict::Continue
}
