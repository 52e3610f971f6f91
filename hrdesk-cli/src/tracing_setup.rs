//! Tracing setup for the hrdesk CLI
//!
//! Usage:
//!   hrdesk --debug ...              # Debug logging to stderr
//!   RUST_LOG=hrdesk_core=debug ...  # Fine-grained log control
//!
//! Logs go to stderr so command output on stdout stays clean. The TUI
//! installs no subscriber output while the alternate screen is active.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (sets RUST_LOG=debug if not already set)
    pub debug: bool,
    /// Suppress everything below warn unless RUST_LOG says otherwise
    pub quiet: bool,
}

impl TracingConfig {
    fn default_directive(&self) -> &'static str {
        if self.debug {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

/// Initialize console tracing
pub fn init(config: &TracingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(config.debug) // Show targets in debug mode
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        let debug = TracingConfig { debug: true, quiet: true };
        assert_eq!(debug.default_directive(), "debug");
        let quiet = TracingConfig { debug: false, quiet: true };
        assert_eq!(quiet.default_directive(), "warn");
        assert_eq!(TracingConfig::default().default_directive(), "info");
    }
}
