use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable selecting the log format (`json` or anything else).
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Initialize structured logging.
///
/// - `EnvFilter` for dynamic log levels (`RUST_LOG`), defaulting to `info`
///   with debug output for this crate.
/// - Compact human-readable output, or one JSON object per line when
///   `LOG_FORMAT=json`.
pub fn init() {
    let json = std::env::var(LOG_FORMAT_ENV).is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,incident_console=debug"));

    let compact_layer = (!json).then(|| {
        fmt::layer()
            .with_target(true)
            .with_line_number(true)
            .compact()
    });
    let json_layer = json.then(|| fmt::layer().with_target(true).json());

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(compact_layer)
        .with(json_layer)
        .init();
}
