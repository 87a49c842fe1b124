//! Sets up the global tracing subscriber for the binaries.

use tracing::Level;
use tracing_subscriber::{
    EnvFilter,
    filter::LevelFilter,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

/// Install a subscriber that writes log events to stderr.
///
/// Events at `default_level` and above are logged, unless the `RUST_LOG`
/// environment variable is set, in which case its directives are used instead.
/// Logs go to stderr so that the program output on stdout stays parseable.
///
/// # Errors
///
/// Returns [TryInitError] if a global subscriber has already been installed.
pub fn setup_logging(default_level: Level) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::default().add_directive(LevelFilter::from_level(default_level).into())
    });

    let stderr_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_log)
        .try_init()
}
