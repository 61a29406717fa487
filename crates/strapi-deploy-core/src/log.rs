//! Logging system for strapi-deploy.
//!
//! All log output goes to stderr; stdout carries the generated reports and
//! must stay clean enough to redirect into a file.

use strapi_deploy_types::{DeployError, LogLevel, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Target prefix shared by every crate in the workspace.
pub const LOG_TARGET: &str = "strapi_deploy";

/// Build the filter for `level`, letting `RUST_LOG` take precedence.
pub fn filter_for(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, level.as_directive())))
}

/// Initialize the logging system.
pub fn init(level: LogLevel) -> Result<()> {
    fmt()
        .with_env_filter(filter_for(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .try_init()
        .map_err(|e| DeployError::Config(format!("Failed to initialize logging: {}", e)))
}

/// Pick a log level from the common CLI verbosity flags.
///
/// `quiet` wins over everything, then `debug`, then `verbose`.
pub fn level_from_flags(verbose: bool, debug: bool, quiet: bool) -> LogLevel {
    if quiet {
        LogLevel::Error
    } else if debug {
        LogLevel::Debug
    } else if verbose {
        LogLevel::Info
    } else {
        LogLevel::Warn
    }
}
