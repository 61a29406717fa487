//! Declarative process-supervisor policy.
//!
//! These records describe how an external PM2-style supervisor should run
//! the CMS process. Nothing in this workspace enforces the policy; it is
//! only built, merged with overrides, validated, and printed.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::ExecMode;

/// Default installation directory of the CMS.
pub const DEFAULT_APP_DIR: &str = "/home/strapi/strapi-cms";

/// Top-level supervisor configuration (the ecosystem file).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupervisorConfig {
    /// Supervised applications
    pub apps: Vec<AppConfig>,
}

impl Default for SupervisorConfig {
    fn default() -> Self {
        Self {
            apps: vec![AppConfig::default()],
        }
    }
}

impl SupervisorConfig {
    /// Find an application entry by name.
    pub fn app(&self, name: &str) -> Option<&AppConfig> {
        self.apps.iter().find(|app| app.name == name)
    }
}

/// Policy for a single supervised process.
///
/// Unknown keys are rejected so that a misspelled override fails loudly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Process name
    pub name: String,
    /// Command to start
    pub script: String,
    /// Arguments passed to the script
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<String>,
    /// Working directory
    pub cwd: String,
    /// Number of instances
    #[serde(default = "default_instances")]
    pub instances: u32,
    /// Execution mode
    #[serde(default = "default_exec_mode")]
    pub exec_mode: ExecMode,

    /// Environment passed to the process
    #[serde(default)]
    pub env: IndexMap<String, Value>,

    /// Restart the process when it exits
    #[serde(default = "default_true")]
    pub autorestart: bool,
    /// Restart on file changes
    #[serde(default)]
    pub watch: bool,
    /// Memory ceiling that triggers a restart (e.g. `1G`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_memory_restart: Option<String>,

    /// Minimum uptime before the process counts as stable (e.g. `10s`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_uptime: Option<String>,
    /// Maximum unstable restarts before giving up
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_restarts: Option<u32>,

    /// Path of the stderr log
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_file: Option<String>,
    /// Path of the stdout log
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_file: Option<String>,
    /// Timestamp format prefixed to log lines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_date_format: Option<String>,
    /// Merge logs of all instances into one file
    #[serde(default)]
    pub merge_logs: bool,

    /// Milliseconds to wait for the app to listen before considering it online
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listen_timeout: Option<u64>,
    /// Milliseconds between SIGINT and SIGKILL on stop
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kill_timeout: Option<u64>,
    /// Send a shutdown message instead of a signal
    #[serde(default)]
    pub shutdown_with_message: bool,
}

fn default_instances() -> u32 {
    1
}

fn default_exec_mode() -> ExecMode {
    ExecMode::Fork
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        let mut env = IndexMap::new();
        env.insert("NODE_ENV".to_string(), Value::from("production"));
        env.insert("PORT".to_string(), Value::from(1337));
        env.insert("HOST".to_string(), Value::from("0.0.0.0"));

        Self {
            name: "strapi-cms".to_string(),
            script: "npm".to_string(),
            args: Some("start".to_string()),
            cwd: DEFAULT_APP_DIR.to_string(),
            instances: 1,
            exec_mode: ExecMode::Fork,
            env,
            autorestart: true,
            watch: false,
            max_memory_restart: Some("1G".to_string()),
            min_uptime: Some("10s".to_string()),
            max_restarts: Some(10),
            error_file: Some(format!("{}/logs/pm2-error.log", DEFAULT_APP_DIR)),
            out_file: Some(format!("{}/logs/pm2-out.log", DEFAULT_APP_DIR)),
            log_date_format: Some("YYYY-MM-DD HH:mm:ss Z".to_string()),
            merge_logs: true,
            listen_timeout: Some(10_000),
            kill_timeout: Some(5_000),
            shutdown_with_message: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_values() {
        let config = SupervisorConfig::default();
        let app = config.app("strapi-cms").unwrap();

        assert_eq!(app.script, "npm");
        assert_eq!(app.args.as_deref(), Some("start"));
        assert_eq!(app.exec_mode, ExecMode::Fork);
        assert_eq!(app.env["PORT"], Value::from(1337));
        assert_eq!(app.max_memory_restart.as_deref(), Some("1G"));
        assert_eq!(app.max_restarts, Some(10));
        assert_eq!(app.kill_timeout, Some(5_000));
        assert!(app.autorestart);
        assert!(!app.watch);
    }

    #[test]
    fn test_serializes_ecosystem_field_names() {
        let json = serde_json::to_value(SupervisorConfig::default()).unwrap();
        let app = &json["apps"][0];

        assert_eq!(app["exec_mode"], "fork");
        assert_eq!(app["max_memory_restart"], "1G");
        assert_eq!(app["min_uptime"], "10s");
        assert_eq!(app["listen_timeout"], 10_000);
        assert_eq!(app["env"]["NODE_ENV"], "production");
        assert_eq!(app["error_file"], "/home/strapi/strapi-cms/logs/pm2-error.log");

        let env_keys: Vec<_> = app["env"].as_object().unwrap().keys().cloned().collect();
        assert_eq!(env_keys, vec!["NODE_ENV", "PORT", "HOST"]);
    }

    #[test]
    fn test_minimal_app_uses_serde_defaults() {
        let app: AppConfig =
            serde_yaml::from_str("name: api\nscript: node\ncwd: /srv/api\n").unwrap();
        assert_eq!(app.instances, 1);
        assert_eq!(app.exec_mode, ExecMode::Fork);
        assert!(app.autorestart);
        assert!(app.env.is_empty());
        assert!(app.max_memory_restart.is_none());
    }

    #[test]
    fn test_unknown_app_keys_rejected() {
        let yaml = "name: api\nscript: node\ncwd: /srv\ncwdd: /x\n";
        let err = serde_yaml::from_str::<AppConfig>(yaml).unwrap_err();
        assert!(err.to_string().contains("unknown field `cwdd`"));
    }
}
