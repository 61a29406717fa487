//! Print the process supervisor policy.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use strapi_deploy_core::config;
use crate::cli::OutputFormat;

pub fn execute(
    overrides: Option<&Path>,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let supervisor = config::load_supervisor(overrides)
        .context("Failed to build supervisor configuration")?;

    tracing::info!("Rendering supervisor policy for {} app(s)", supervisor.apps.len());
    out.write_all(format.render(&supervisor)?.as_bytes())?;
    out.flush()?;
    Ok(())
}
