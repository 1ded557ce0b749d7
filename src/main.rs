mod app;
mod args;
mod error;
mod http;
mod logger;
mod metrics;
mod shutdown;

use std::error::Error;

use clap::Parser;

use args::TesterArgs;

fn main() -> Result<(), Box<dyn Error>> {
    let args = TesterArgs::parse();
    logger::init_logging(args.verbose);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(app::run(args))?;
    Ok(())
}
