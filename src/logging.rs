use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Install a global fmt subscriber
///
/// `RUST_LOG` takes precedence; otherwise logs at `info`, or `debug` when
/// verbose. Returns false if a subscriber was already installed.
pub fn init_logging(verbose: bool) -> bool {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber).is_ok()
}
