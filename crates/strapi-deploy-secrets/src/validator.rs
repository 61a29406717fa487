//! Secret validation utilities.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::collections::HashMap;
use strapi_deploy_types::{SecretSlot, ValidationResult};
use crate::generator::{DATABASE_PASSWORD_BYTES, PASSWORD_STRIPPED_CHARS};

/// Checks `.env` values against the shape of generated secrets.
pub struct SecretValidator;

impl SecretValidator {
    /// Validate every slot, in output order.
    pub fn validate(values: &HashMap<String, String>) -> Vec<(SecretSlot, ValidationResult)> {
        SecretSlot::ALL
            .into_iter()
            .map(|slot| {
                let value = values.get(slot.env_key()).map(String::as_str);
                (slot, Self::validate_slot(slot, value))
            })
            .collect()
    }

    /// Validate a single slot's value.
    ///
    /// An empty value counts as missing, except for the database password,
    /// where an empty assignment is an error.
    pub fn validate_slot(slot: SecretSlot, value: Option<&str>) -> ValidationResult {
        if slot == SecretSlot::DatabasePassword && value == Some("") {
            return ValidationResult::Error(vec!["empty".to_string()]);
        }
        let Some(value) = value.filter(|v| !v.is_empty()) else {
            return ValidationResult::Missing;
        };

        match slot {
            SecretSlot::AppKeys => validate_app_keys(value),
            SecretSlot::DatabasePassword => validate_database_password(value),
            _ => match check_secret(value, slot.byte_len()) {
                Ok(()) => ValidationResult::Ok,
                Err(e) => ValidationResult::Error(vec![e]),
            },
        }
    }

    /// Get summary of validation results.
    pub fn summary(values: &HashMap<String, String>) -> ValidationSummary {
        let mut summary = ValidationSummary::default();

        for (slot, result) in Self::validate(values) {
            match result {
                ValidationResult::Ok => summary.ok.push(slot),
                ValidationResult::Missing => summary.missing.push(slot),
                ValidationResult::Warning(warnings) => summary.warnings.push((slot, warnings)),
                ValidationResult::Error(errors) => summary.errors.push((slot, errors)),
            }
        }

        summary
    }
}

fn check_secret(value: &str, byte_len: usize) -> Result<(), String> {
    let decoded = STANDARD
        .decode(value)
        .map_err(|e| format!("not valid base64: {}", e))?;
    if decoded.len() != byte_len {
        return Err(format!("decodes to {} bytes, expected {}", decoded.len(), byte_len));
    }
    Ok(())
}

fn validate_app_keys(value: &str) -> ValidationResult {
    let parts: Vec<&str> = value.split(',').collect();
    if parts.len() != SecretSlot::APP_KEY_COUNT {
        return ValidationResult::Error(vec![format!(
            "expected {} comma-separated keys, found {}",
            SecretSlot::APP_KEY_COUNT,
            parts.len()
        )]);
    }

    let errors: Vec<String> = parts
        .iter()
        .enumerate()
        .filter_map(|(i, part)| {
            check_secret(part, SecretSlot::AppKeys.byte_len())
                .err()
                .map(|e| format!("key {}: {}", i + 1, e))
        })
        .collect();

    if errors.is_empty() {
        ValidationResult::Ok
    } else {
        ValidationResult::Error(errors)
    }
}

fn validate_database_password(value: &str) -> ValidationResult {
    if value.contains(PASSWORD_STRIPPED_CHARS) {
        return ValidationResult::Error(vec![
            "contains '/', '+', or '=' which break connection strings".to_string(),
        ]);
    }
    if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
        return ValidationResult::Error(vec![
            "contains characters outside the base64 alphabet".to_string(),
        ]);
    }
    if value.len() < DATABASE_PASSWORD_BYTES {
        return ValidationResult::Warning(vec![format!(
            "only {} characters; generated passwords are close to 32",
            value.len()
        )]);
    }
    ValidationResult::Ok
}

/// Summary of validation results.
#[derive(Debug, Default)]
pub struct ValidationSummary {
    /// Secrets that are valid
    pub ok: Vec<SecretSlot>,
    /// Secrets that are missing
    pub missing: Vec<SecretSlot>,
    /// Secrets with warnings (slot, warnings)
    pub warnings: Vec<(SecretSlot, Vec<String>)>,
    /// Secrets with errors (slot, errors)
    pub errors: Vec<(SecretSlot, Vec<String>)>,
}

impl ValidationSummary {
    /// Check if all secrets are present and usable.
    pub fn is_all_valid(&self) -> bool {
        self.missing.is_empty() && self.errors.is_empty()
    }

    /// Get total count of secrets.
    pub fn total(&self) -> usize {
        self.ok.len() + self.missing.len() + self.warnings.len() + self.errors.len()
    }
}
