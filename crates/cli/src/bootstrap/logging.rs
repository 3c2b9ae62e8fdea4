use ferrous_resolve_domain::config::{LogFormat, LoggingConfig};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr; stdout is reserved for the resolution trace.
/// `RUST_LOG` directives take precedence over the configured level.
pub fn init_logging(config: &LoggingConfig) {
    let level = config
        .level
        .trim()
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::WARN);

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    match config.format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
