//! # Strapi Deploy Core
//!
//! Core utilities, configuration management, and logging for the
//! strapi-deploy tool.
//!
//! This crate provides:
//!
//! - **Configuration**: Layered configuration (defaults, loaded files, programmatic values)
//! - **Logging**: `tracing` subscriber setup that keeps stdout free for reports
//! - **Terminal**: Color detection
//! - **Time Utilities**: Timestamps, duration and memory-size parsing
//! - **Data Structures**: YAML loading and deep merging
//!
//! ## Example
//!
//! ```no_run
//! use strapi_deploy_core::{config, log};
//! use strapi_deploy_types::LogLevel;
//!
//! log::init(LogLevel::Warn)?;
//!
//! let supervisor = config::load_supervisor(Some("overrides.yml".as_ref()))?;
//! assert!(!supervisor.apps.is_empty());
//! # Ok::<(), strapi_deploy_types::DeployError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod log;
pub mod term;
pub mod time;
pub mod util;

// Re-export commonly used items
pub use config::Config;
pub use strapi_deploy_types::{DeployError, Result};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "strapi-deploy";
