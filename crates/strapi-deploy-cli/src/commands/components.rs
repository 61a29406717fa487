//! Print the content component schemas.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::io::Write;
use strapi_deploy_types::builtin_components;
use crate::cli::OutputFormat;

pub fn execute(format: OutputFormat, out: &mut impl Write) -> Result<()> {
    let mut registry = Map::new();
    for component in builtin_components() {
        let schema = serde_json::to_value(&component)
            .with_context(|| format!("Failed to serialize component {}", component.uid))?;
        registry.insert(component.uid.to_string(), schema);
    }

    out.write_all(format.render(&Value::Object(registry))?.as_bytes())?;
    out.flush()?;
    Ok(())
}
