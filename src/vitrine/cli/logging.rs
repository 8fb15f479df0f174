use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "VITRINE_LOG";

/// Picks the filter: an explicit `VITRINE_LOG` wins, then `--verbose`, then
/// warnings only.
pub fn filter_directive(env_value: Option<&str>, verbose: bool) -> String {
    match env_value {
        Some(value) if !value.trim().is_empty() => value.to_string(),
        _ if verbose => "vitrine=debug".to_string(),
        _ => "warn".to_string(),
    }
}

/// Installs the global subscriber, writing to stderr so rendered output on
/// stdout stays clean.
pub fn init(verbose: bool) {
    let env_value = std::env::var(LOG_ENV).ok();
    let directive = filter_directive(env_value.as_deref(), verbose);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time()
        .try_init();
}
