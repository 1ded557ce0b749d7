//! Run orchestration: URL assembly, tester setup, and the concurrency ramp.
mod ramp;
mod urls;


use tracing::warn;

use crate::args::TesterArgs;
use crate::error::{AppError, AppResult, ValidationError};
use crate::http::Tester;

use ramp::RampOptions;

/// Hard ceiling on parallelism, regardless of the -c flag.
pub(crate) const ABSOLUTE_MAX_CONCURRENCY: usize = 512;

pub async fn run(args: TesterArgs) -> AppResult<()> {
    if args.host.is_empty() {
        return Err(AppError::validation(ValidationError::MissingHost));
    }
    let urls = urls::assemble_urls(&args)?;
    let concurrency_cap = clamped_concurrency_cap(args.concurrency.get());

    let mut tester = Tester::new(concurrency_cap)?;
    tester.init(urls).await?;

    let options = RampOptions {
        concurrency_cap,
        stage_delay: args.stage_delay,
        err_threshold: args.err_threshold,
        ramp_style: args.ramp_style,
        linear_ramp_step: args.linear_ramp_step.get(),
    };
    ramp::run_ramp(&tester, &options).await
}

fn clamped_concurrency_cap(requested: usize) -> usize {
    if requested > ABSOLUTE_MAX_CONCURRENCY {
        warn!("Capping concurrency at {}", ABSOLUTE_MAX_CONCURRENCY);
        return ABSOLUTE_MAX_CONCURRENCY;
    }
    requested
}
