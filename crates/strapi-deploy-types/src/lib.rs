//! # Strapi Deploy Types
//!
//! Core types, traits, and enums shared across all strapi-deploy crates.
//!
//! This crate provides the fundamental building blocks for the deployment
//! layer around a Strapi CMS install, including:
//!
//! - The secret slot enumeration and the entropy source capability
//! - Declarative process-supervisor policy records
//! - Declarative component schema metadata and validated component uids
//! - Error types and result aliases
//!
//! ## Example
//!
//! ```
//! use strapi_deploy_types::{ComponentUid, SecretSlot};
//!
//! let uid = ComponentUid::new("images.single-image").unwrap();
//! assert_eq!(uid.category(), "images");
//! assert_eq!(uid.name(), "single-image");
//!
//! assert_eq!(SecretSlot::AppKeys.env_key(), "APP_KEYS");
//! assert_eq!(SecretSlot::DatabasePassword.byte_len(), 24);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod identifiers;
pub mod enums;
pub mod traits;
pub mod config;
pub mod schema;

// Re-export common types for convenience
pub use errors::{DeployError, Result};
pub use identifiers::ComponentUid;
pub use enums::{ExecMode, LogLevel, MediaKind, SecretSlot};
pub use traits::{EntropySource, ValidationResult};
pub use config::{AppConfig, SupervisorConfig};
pub use schema::{builtin_components, Attribute, ComponentInfo, ComponentSchema};
