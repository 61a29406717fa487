//! Operator-facing secrets report.

use chrono::{DateTime, Utc};
use std::fmt;
use strapi_deploy_core::time::iso_timestamp;
use strapi_deploy_types::SecretSlot;
use crate::set::SecretSet;

const BANNER: &str = "================================";
const TITLE: &str = "Strapi Production Secrets";
const TEMPLATE_RULE: &str = "-----------------------------------";

/// Security guidance printed after the generated keys.
pub const SECURITY_NOTES: [&str; 5] = [
    "Store these secrets securely (use a password manager)",
    "Never commit these to version control",
    "Use different secrets for each environment",
    "Rotate secrets periodically for enhanced security",
    "Keep backups of these secrets in a secure location",
];

/// Server settings opening the `.env` template.
pub const SERVER_DEFAULTS: [(&str, &str); 3] = [
    ("HOST", "0.0.0.0"),
    ("PORT", "1337"),
    ("APP_URL", "https://yourdomain.com"),
];

/// Database settings surrounding the password in the `.env` template.
pub const DATABASE_DEFAULTS: [(&str, &str); 5] = [
    ("DATABASE_CLIENT", "postgres"),
    ("DATABASE_HOST", "localhost"),
    ("DATABASE_PORT", "5432"),
    ("DATABASE_NAME", "strapi"),
    ("DATABASE_USERNAME", "strapi"),
];

/// A rendered-on-demand provisioning run.
#[derive(Debug, Clone)]
pub struct ProvisionReport {
    /// When the secrets were generated
    pub generated_at: DateTime<Utc>,
    /// Secrets listed under "Security Keys"
    pub secrets: SecretSet,
    /// Secrets embedded in the `.env` template
    pub template: SecretSet,
}

impl ProvisionReport {
    /// Render the full report text.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Only the `.env` template block, suitable for writing to a file.
    pub fn env_template(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_template(&mut out);
        out
    }

    fn write_template(&self, f: &mut impl fmt::Write) -> fmt::Result {
        for (key, value) in SERVER_DEFAULTS {
            writeln!(f, "{}={}", key, value)?;
        }
        writeln!(f)?;

        for line in self.template.key_lines() {
            writeln!(f, "{}", line)?;
        }
        writeln!(f)?;

        for (key, value) in DATABASE_DEFAULTS {
            writeln!(f, "{}={}", key, value)?;
        }
        let password = &self.template.database_password;
        writeln!(f, "{}", SecretSlot::DatabasePassword.env_line(password))?;
        writeln!(f, "DATABASE_SSL=false")?;
        writeln!(f)?;

        writeln!(f, "NODE_ENV=production")
    }
}

impl fmt::Display for ProvisionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", BANNER)?;
        writeln!(f, "{}", TITLE)?;
        writeln!(f, "{}", BANNER)?;
        writeln!(f)?;

        writeln!(f, "Copy these values to your .env file:")?;
        writeln!(f)?;
        writeln!(f, "# Security Keys - Generated on {}", iso_timestamp(self.generated_at))?;
        for line in self.secrets.key_lines() {
            writeln!(f, "{}", line)?;
        }
        writeln!(f)?;
        writeln!(f)?;

        writeln!(f, "⚠️  IMPORTANT SECURITY NOTES:")?;
        for (i, note) in SECURITY_NOTES.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, note)?;
        }
        writeln!(f)?;

        writeln!(f, "Suggested PostgreSQL password:")?;
        writeln!(f, "{}", SecretSlot::DatabasePassword.env_line(&self.secrets.database_password))?;
        writeln!(f)?;
        writeln!(f)?;

        writeln!(f, "Full .env template for production:")?;
        writeln!(f, "{}", TEMPLATE_RULE)?;
        self.write_template(f)?;
        writeln!(f)
    }
}
