//! Configuration management for strapi-deploy.
//!
//! This module provides layered configuration support with:
//! - Built-in defaults
//! - File-based overrides (YAML)
//! - Programmatic updates
//!
//! ## Configuration Layers
//!
//! Configuration values are resolved in this priority order:
//! 1. Programmatically set values
//! 2. Values loaded from file
//! 3. Default values
//!
//! ## Example
//!
//! ```
//! use strapi_deploy_core::config::Config;
//! use strapi_deploy_types::AppConfig;
//!
//! let mut config = Config::new().with_defaults(AppConfig::default())?;
//! config.set("max_restarts", 3)?;
//!
//! let restarts: u32 = config.get("max_restarts").unwrap();
//! assert_eq!(restarts, 3);
//! # Ok::<(), strapi_deploy_types::DeployError>(())
//! ```

use crate::time::{parse_duration, parse_memory_size};
use crate::util::data::{deep_merge, get_path, load_yaml};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use strapi_deploy_types::{bail, AppConfig, DeployError, Result, SupervisorConfig};

/// Configuration layer priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfigLayer {
    /// Default values
    Default = 0,
    /// Values loaded from file
    Loaded = 1,
    /// Values set programmatically
    Set = 2,
}

impl ConfigLayer {
    const LOWEST_FIRST: [ConfigLayer; 3] =
        [ConfigLayer::Default, ConfigLayer::Loaded, ConfigLayer::Set];
}

/// Layered configuration document.
#[derive(Clone, Debug, Default)]
pub struct Config {
    layers: HashMap<ConfigLayer, Value>,
}

impl Config {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the default layer from a serializable value.
    pub fn with_defaults(mut self, defaults: impl Serialize) -> Result<Self> {
        let value = serde_json::to_value(defaults)
            .map_err(|e| DeployError::Config(format!("Failed to serialize defaults: {}", e)))?;
        self.layers.insert(ConfigLayer::Default, value);
        Ok(self)
    }

    /// Load a YAML file into the loaded layer.
    ///
    /// An empty file leaves the layer untouched.
    pub fn load_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            DeployError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        if content.trim().is_empty() {
            return Ok(self);
        }

        let value = load_yaml(&content).map_err(|e| {
            DeployError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        match value {
            Value::Null => {}
            Value::Object(_) => {
                tracing::debug!("Loaded configuration overrides from {}", path.display());
                self.layers.insert(ConfigLayer::Loaded, value);
            }
            _ => bail!(Config, "{} must contain a mapping at the top level", path.display()),
        }

        Ok(self)
    }

    /// Get a configuration value by dotted key, respecting layer priority.
    ///
    /// Returns None if the key doesn't exist in any layer.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        ConfigLayer::LOWEST_FIRST
            .iter()
            .rev()
            .filter_map(|layer| self.layers.get(layer))
            .filter_map(|data| get_path(data, key))
            .find_map(|value| serde_json::from_value(value.clone()).ok())
    }

    /// Set a configuration value programmatically.
    pub fn set(&mut self, key: &str, value: impl Serialize) -> Result<()> {
        let value = serde_json::to_value(value)
            .map_err(|e| DeployError::Config(format!("Failed to serialize value: {}", e)))?;

        let set_layer = self
            .layers
            .entry(ConfigLayer::Set)
            .or_insert_with(|| Value::Object(Default::default()));

        set_value_at_path(set_layer, key, value)
    }

    /// Get merged data from all layers.
    pub fn merged_data(&self) -> Value {
        ConfigLayer::LOWEST_FIRST
            .iter()
            .filter_map(|layer| self.layers.get(layer))
            .fold(Value::Object(Default::default()), |merged, layer| {
                deep_merge(merged, layer.clone())
            })
    }

    /// Deserialize the merged configuration into a typed record.
    pub fn extract<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.merged_data())
            .map_err(|e| DeployError::Config(format!("Invalid configuration: {}", e)))
    }
}

fn set_value_at_path(data: &mut Value, path: &str, value: Value) -> Result<()> {
    let parts: Vec<&str> = path.split('.').collect();
    let Some((last, parents)) = parts.split_last() else {
        bail!(Config, "Empty path");
    };
    if last.is_empty() {
        bail!(Config, "Empty path segment in '{}'", path);
    }

    // Navigate to parent, creating intermediate objects as needed
    let mut current = data;
    for part in parents {
        if !current.is_object() {
            *current = Value::Object(Default::default());
        }
        current = match current {
            Value::Object(map) => map
                .entry(part.to_string())
                .or_insert_with(|| Value::Object(Default::default())),
            _ => unreachable!("replaced with an object above"),
        };
    }

    match current {
        Value::Object(map) => {
            map.insert(last.to_string(), value);
            Ok(())
        }
        _ => bail!(Config, "Cannot set '{}': parent is not a mapping", path),
    }
}

/// Build the supervisor policy, merging an optional override file over the
/// default application entry.
///
/// The override file holds a partial application entry, e.g.:
///
/// ```yaml
/// cwd: /srv/cms
/// max_memory_restart: 2G
/// env:
///   PORT: 8080
/// ```
pub fn load_supervisor(overrides: Option<&Path>) -> Result<SupervisorConfig> {
    let mut config = Config::new().with_defaults(AppConfig::default())?;
    if let Some(path) = overrides {
        config = config.load_file(path)?;
    }

    let app: AppConfig = config.extract()?;
    let supervisor = SupervisorConfig { apps: vec![app] };
    validate_supervisor(&supervisor)?;
    Ok(supervisor)
}

/// Validate every application entry of a supervisor policy.
pub fn validate_supervisor(config: &SupervisorConfig) -> Result<()> {
    if config.apps.is_empty() {
        bail!(Validation, "Supervisor configuration defines no apps");
    }
    config.apps.iter().try_for_each(validate_app)
}

/// Validate a single application entry.
pub fn validate_app(app: &AppConfig) -> Result<()> {
    if app.name.trim().is_empty() {
        bail!(Validation, "App name must not be empty");
    }
    if app.script.trim().is_empty() {
        bail!(Validation, "App '{}' has no script", app.name);
    }
    if app.instances == 0 {
        bail!(Validation, "App '{}' must run at least one instance", app.name);
    }
    if let Some(limit) = &app.max_memory_restart {
        if parse_memory_size(limit).is_none() {
            bail!(Validation, "App '{}' has invalid max_memory_restart '{}'", app.name, limit);
        }
    }
    if let Some(uptime) = &app.min_uptime {
        if parse_duration(uptime).is_none() {
            bail!(Validation, "App '{}' has invalid min_uptime '{}'", app.name, uptime);
        }
    }
    if app.kill_timeout == Some(0) {
        bail!(Validation, "App '{}' must allow a non-zero kill_timeout", app.name);
    }
    Ok(())
}
