use tracing_subscriber::EnvFilter;

/// Environment variables consulted for filter directives, highest
/// precedence first.
const FILTER_ENV_VARS: [&str; 2] = ["LOADTEST_LOG", "RUST_LOG"];

/// Installs the global log subscriber. Without filter directives from the
/// environment, the level is `info`, or `debug` under `--verbose`.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let directives = FILTER_ENV_VARS
        .iter()
        .find_map(|var| std::env::var(var).ok())
        .unwrap_or_else(|| fallback.to_owned());
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(fallback));

    let init_result = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    if let Err(err) = init_result {
        eprintln!("Failed to install the log subscriber: {}", err);
    }
}
