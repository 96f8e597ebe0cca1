//! Stderr logging for the command-line front end.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a stderr subscriber. Stdout stays reserved for catalog output.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(directives: &str) {
    let env_filter = EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(false);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init();
}
