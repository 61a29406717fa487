//! `.env` document parsing.

use std::collections::HashMap;
use strapi_deploy_types::{bail, Result};

/// Parse a `.env` document into key/value pairs.
///
/// Blank lines and `#` comments are skipped, an optional `export ` prefix is
/// accepted, and one pair of surrounding double quotes is removed from the
/// value. Later assignments override earlier ones.
pub fn parse_env(content: &str) -> Result<HashMap<String, String>> {
    let mut values = HashMap::new();

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line = line.strip_prefix("export ").unwrap_or(line);
        let Some((key, value)) = line.split_once('=') else {
            bail!(Validation, "line {}: expected KEY=value", index + 1);
        };

        let key = key.trim();
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            bail!(Validation, "line {}: invalid variable name '{}'", index + 1, key);
        }

        values.insert(key.to_string(), unquote(value.trim()).to_string());
    }

    Ok(values)
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
