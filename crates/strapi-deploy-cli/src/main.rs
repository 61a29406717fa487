//! strapi-deploy CLI entry point.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use strapi_deploy_core::{log, term};

mod cli;
mod commands;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    term::configure_color();
    let level = log::level_from_flags(cli.verbose, cli.debug, cli.quiet);
    if let Err(e) = log::init(level) {
        eprintln!("{} {}", "Warning:".yellow().bold(), e);
    }

    match cli.execute() {
        Ok(_) => Ok(()),
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}
