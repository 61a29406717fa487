//! Common enumerations used throughout strapi-deploy.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::errors::{DeployError, Result};

/// Log level enumeration for the logging system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Detailed trace messages
    Trace,
}

impl LogLevel {
    /// Directive string understood by `tracing_subscriber::EnvFilter`.
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl FromStr for LogLevel {
    type Err = DeployError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "ERROR" => Ok(LogLevel::Error),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            "TRACE" => Ok(LogLevel::Trace),
            _ => Err(DeployError::Validation(format!("Invalid log level: {}", s))),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_directive().to_uppercase())
    }
}

/// Named secret slots written to a Strapi `.env` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SecretSlot {
    /// Four comma-joined session keys
    AppKeys,
    /// Salt for API tokens
    ApiTokenSalt,
    /// Secret signing admin panel JWTs
    AdminJwtSecret,
    /// Salt for transfer tokens
    TransferTokenSalt,
    /// Secret signing users-permissions JWTs
    JwtSecret,
    /// Suggested PostgreSQL password
    DatabasePassword,
}

impl SecretSlot {
    /// Every slot, in the order they are generated and printed.
    pub const ALL: [SecretSlot; 6] = [
        SecretSlot::AppKeys,
        SecretSlot::ApiTokenSalt,
        SecretSlot::AdminJwtSecret,
        SecretSlot::TransferTokenSalt,
        SecretSlot::JwtSecret,
        SecretSlot::DatabasePassword,
    ];

    /// The key slots that are redrawn for the `.env` template block.
    pub const KEYS: [SecretSlot; 5] = [
        SecretSlot::AppKeys,
        SecretSlot::ApiTokenSalt,
        SecretSlot::AdminJwtSecret,
        SecretSlot::TransferTokenSalt,
        SecretSlot::JwtSecret,
    ];

    /// Number of keys joined into `APP_KEYS`.
    pub const APP_KEY_COUNT: usize = 4;

    /// The environment variable name for this slot.
    pub fn env_key(&self) -> &'static str {
        match self {
            SecretSlot::AppKeys => "APP_KEYS",
            SecretSlot::ApiTokenSalt => "API_TOKEN_SALT",
            SecretSlot::AdminJwtSecret => "ADMIN_JWT_SECRET",
            SecretSlot::TransferTokenSalt => "TRANSFER_TOKEN_SALT",
            SecretSlot::JwtSecret => "JWT_SECRET",
            SecretSlot::DatabasePassword => "DATABASE_PASSWORD",
        }
    }

    /// Number of random bytes drawn per value in this slot.
    pub fn byte_len(&self) -> usize {
        match self {
            SecretSlot::DatabasePassword => 24,
            _ => 32,
        }
    }

    /// Whether the value is double-quoted in `.env` output.
    ///
    /// Only `APP_KEYS` is quoted, since it carries commas.
    pub fn is_quoted(&self) -> bool {
        matches!(self, SecretSlot::AppKeys)
    }

    /// Format this slot as a `.env` line.
    pub fn env_line(&self, value: &str) -> String {
        if self.is_quoted() {
            format!("{}=\"{}\"", self.env_key(), value)
        } else {
            format!("{}={}", self.env_key(), value)
        }
    }
}

impl fmt::Display for SecretSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.env_key())
    }
}

impl FromStr for SecretSlot {
    type Err = DeployError;

    fn from_str(s: &str) -> Result<Self> {
        SecretSlot::ALL
            .into_iter()
            .find(|slot| slot.env_key() == s)
            .ok_or_else(|| DeployError::Validation(format!("Unknown secret slot: {}", s)))
    }
}

/// Process supervisor execution mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecMode {
    /// Single forked process
    Fork,
    /// Node cluster mode
    Cluster,
}

impl fmt::Display for ExecMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecMode::Fork => write!(f, "fork"),
            ExecMode::Cluster => write!(f, "cluster"),
        }
    }
}

/// Media kinds a media attribute may accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Image uploads
    Images,
    /// Generic file uploads
    Files,
    /// Video uploads
    Videos,
    /// Audio uploads
    Audios,
}

impl MediaKind {
    /// All media kinds.
    pub const ALL: [MediaKind; 4] = [
        MediaKind::Images,
        MediaKind::Files,
        MediaKind::Videos,
        MediaKind::Audios,
    ];
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Images => write!(f, "images"),
            MediaKind::Files => write!(f, "files"),
            MediaKind::Videos => write!(f, "videos"),
            MediaKind::Audios => write!(f, "audios"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_env_keys_round_trip() {
        for slot in SecretSlot::ALL {
            assert_eq!(slot.env_key().parse::<SecretSlot>().unwrap(), slot);
        }
        assert!("SESSION_KEY".parse::<SecretSlot>().is_err());
    }

    #[test]
    fn test_slot_byte_lengths() {
        assert_eq!(SecretSlot::JwtSecret.byte_len(), 32);
        assert_eq!(SecretSlot::AppKeys.byte_len(), 32);
        assert_eq!(SecretSlot::DatabasePassword.byte_len(), 24);
    }

    #[test]
    fn test_slot_env_line_quoting() {
        assert_eq!(SecretSlot::AppKeys.env_line("a,b"), "APP_KEYS=\"a,b\"");
        assert_eq!(SecretSlot::JwtSecret.env_line("abc="), "JWT_SECRET=abc=");
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert!("loud".parse::<LogLevel>().is_err());
        assert_eq!(LogLevel::Info.to_string(), "INFO");
    }
}
