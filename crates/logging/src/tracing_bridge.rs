//! crates/logging/src/tracing_bridge.rs
//! Installs a `tracing-subscriber` formatter driven by [`VerbosityConfig`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{VerbosityConfig, init_tracing};
//!
//! init_tracing(VerbosityConfig::from_verbose_level(2));
//! logging::trace_walk!("now visible on stderr");
//! ```

use std::io;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::TryInitError;

use super::config::VerbosityConfig;

/// Builds the filter for `config`, letting `RUST_LOG` override it when set.
#[must_use]
pub fn env_filter(config: VerbosityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.directive()))
}

/// Install a global subscriber writing to stderr.
///
/// Returns an error if a global subscriber was already installed, which
/// callers running several commands in one process may ignore.
pub fn init_tracing(config: VerbosityConfig) -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(config.walk_level() >= tracing::Level::DEBUG)
        .without_time();

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(layer)
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_initialisation_is_reported() {
        let _ = init_tracing(VerbosityConfig::default());
        assert!(init_tracing(VerbosityConfig::from_verbose_level(3)).is_err());
    }
}
