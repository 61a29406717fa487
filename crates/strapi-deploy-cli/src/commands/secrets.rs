//! Secret provisioning and checking commands.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::fs;
use std::io::Write;
use std::path::Path;
use strapi_deploy_secrets::{parse_env, SecretProvisioner, SecretValidator};
use strapi_deploy_types::ValidationResult;

pub fn generate(out: &mut impl Write) -> Result<()> {
    let report = SecretProvisioner::new()
        .report()
        .context("Failed to generate secrets")?;

    out.write_all(report.render().as_bytes())?;
    out.flush()?;

    Ok(())
}

pub fn check(env_file: &Path, out: &mut impl Write) -> Result<()> {
    let content = fs::read_to_string(env_file)
        .with_context(|| format!("Failed to read {}", env_file.display()))?;
    let values = parse_env(&content)
        .with_context(|| format!("Failed to parse {}", env_file.display()))?;

    tracing::debug!("Parsed {} variables from {}", values.len(), env_file.display());

    writeln!(
        out,
        "{} secrets in: {}",
        "Checking".cyan().bold(),
        env_file.display().to_string().cyan()
    )?;

    for (slot, result) in SecretValidator::validate(&values) {
        match result {
            ValidationResult::Ok => writeln!(out, "  {} {}", "✓".green(), slot)?,
            ValidationResult::Missing => writeln!(out, "  {} {} (missing)", "✗".red(), slot)?,
            ValidationResult::Warning(warnings) => {
                writeln!(out, "  {} {}: {}", "!".yellow(), slot, warnings.join("; "))?
            }
            ValidationResult::Error(errors) => {
                writeln!(out, "  {} {}: {}", "✗".red(), slot, errors.join("; "))?
            }
        }
    }

    let summary = SecretValidator::summary(&values);
    writeln!(out, "\nSecret Status:")?;
    writeln!(out, "  Total secrets: {}", summary.total())?;
    writeln!(out, "  Valid: {}", summary.ok.len().to_string().green())?;
    writeln!(out, "  Warnings: {}", summary.warnings.len().to_string().yellow())?;
    writeln!(out, "  Missing: {}", summary.missing.len().to_string().red())?;
    writeln!(out, "  Invalid: {}", summary.errors.len().to_string().red())?;
    out.flush()?;

    if !summary.is_all_valid() {
        bail!("Some secrets are missing or invalid");
    }

    writeln!(out, "\n{} All secrets are valid", "✓".green().bold())?;
    Ok(())
}
