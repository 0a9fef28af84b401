//! Logging setup for hosts that do not install their own subscriber.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable that overrides the default log filter.
pub const LOG_ENV_VAR: &str = "META_DESCRIPTIONS_LOG";

/// Installs a global fmt subscriber filtered at `level`.
///
/// `META_DESCRIPTIONS_LOG` (an `EnvFilter` directive) takes precedence over
/// `level`. Returns `false` when a global subscriber was already installed,
/// in which case nothing changes.
pub fn init_logging(level: &str) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging("debug");
        assert!(!init_logging("info"));
    }
}
