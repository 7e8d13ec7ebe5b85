//! crates/logging/src/config.rs
//! Verbosity configuration mapped onto tracing filter directives.

/// Verbosity selected on the command line with repeated `-v` flags.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerbosityConfig {
    /// Number of `-v` flags.
    pub level: u8,
}

impl VerbosityConfig {
    /// Create a configuration from a verbose level.
    #[must_use]
    pub const fn from_verbose_level(level: u8) -> Self {
        Self { level }
    }

    /// Returns the `tracing_subscriber::EnvFilter` directive for this level.
    ///
    /// Level 0 only reports warnings. Each further `-v` lowers the threshold
    /// for the `walk` targets: `info`, then `debug`, then `trace` from level 3
    /// upwards.
    #[must_use]
    pub const fn directive(&self) -> &'static str {
        match self.level {
            0 => "warn",
            1 => "warn,walk=info",
            2 => "warn,walk=debug",
            _ => "warn,walk=trace",
        }
    }

    /// Returns the most verbose [`tracing::Level`] enabled for `walk` targets.
    ///
    /// The stderr formatter prints event targets once this reaches debug.
    #[must_use]
    pub const fn walk_level(&self) -> tracing::Level {
        match self.level {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_quiet() {
        let config = VerbosityConfig::default();
        assert_eq!(config.directive(), "warn");
        assert_eq!(config.walk_level(), tracing::Level::WARN);
    }

    #[test]
    fn levels_increase_walk_verbosity() {
        assert_eq!(VerbosityConfig::from_verbose_level(1).directive(), "warn,walk=info");
        assert_eq!(VerbosityConfig::from_verbose_level(2).directive(), "warn,walk=debug");
        assert_eq!(VerbosityConfig::from_verbose_level(3).directive(), "warn,walk=trace");
        assert_eq!(
            VerbosityConfig::from_verbose_level(9).walk_level(),
            tracing::Level::TRACE
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn round_trips_through_json() {
        let config = VerbosityConfig::from_verbose_level(2);
        let json = serde_json::to_string(&config).expect("serialize");
        assert_eq!(json, r#"{"level":2}"#);
        let back: VerbosityConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, config);
    }
}
