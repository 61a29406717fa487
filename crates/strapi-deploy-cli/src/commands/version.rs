//! Show version information.

use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use strapi_deploy_core::{APP_NAME, VERSION};

pub fn execute(verbose: bool, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{} {}", APP_NAME.cyan().bold(), VERSION)?;

    if verbose {
        writeln!(out, "\nBuild Information:")?;
        writeln!(out, "  Version: {}", VERSION)?;
        writeln!(out, "  Target: {}", std::env::consts::ARCH)?;
        writeln!(out, "  OS: {}", std::env::consts::OS)?;
        writeln!(out, "  Rust Version: {}", env!("CARGO_PKG_RUST_VERSION"))?;
    }

    Ok(())
}
