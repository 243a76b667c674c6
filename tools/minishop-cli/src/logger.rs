//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

const CRATES: [&str; 4] = ["minishop", "minishop_sdk", "minishop_commerce", "minishop_auth"];

/// Directive enabling `level` for every minishop crate.
fn default_directive(level: &str) -> String {
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the global subscriber. Logs go to stderr so status lines on
/// stdout stay clean.
pub fn init_logger(config: &LoggingConfig, verbose: bool) {
    let level = if verbose { "debug" } else { config.level.as_str() };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level)));

    let registry = tracing_subscriber::registry().with(filter);
    let fmt = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    match config.format {
        LogFormat::Compact => registry.with(fmt.compact()).init(),
        LogFormat::Json => registry.with(fmt.json()).init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_covers_all_crates() {
        let directive = default_directive("debug");
        assert_eq!(
            directive,
            "minishop=debug,minishop_sdk=debug,minishop_commerce=debug,minishop_auth=debug"
        );
        assert!(EnvFilter::try_new(&directive).is_ok());
    }
}
