//! CLI structure and command definitions.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "strapi-deploy")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Provision secrets and deployment config for a Strapi CMS install",
    long_about = None
)]
pub struct Cli {
    /// Defaults to `secrets` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate production secrets and print a .env template
    Secrets,

    /// Validate the secrets in an existing .env file
    Check {
        /// Path to the .env file
        env_file: PathBuf,
    },

    /// Print the process supervisor configuration
    Supervisor {
        /// YAML file with overrides for the default app entry
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Print the content component schemas
    Components {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Show version information
    Version,
}

/// Serialization format for printed configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(value).context("Failed to serialize JSON")?;
                Ok(format!("{}\n", json))
            }
            OutputFormat::Yaml => serde_yaml::to_string(value).context("Failed to serialize YAML"),
        }
    }
}

impl Cli {
    pub fn execute(&self) -> Result<()> {
        use crate::commands::*;

        let mut out = io::stdout().lock();
        match &self.command {
            None | Some(Commands::Secrets) => secrets::generate(&mut out),
            Some(Commands::Check { env_file }) => secrets::check(env_file, &mut out),
            Some(Commands::Supervisor { config, format }) => {
                supervisor::execute(config.as_deref(), *format, &mut out)
            }
            Some(Commands::Components { format }) => components::execute(*format, &mut out),
            Some(Commands::Version) => version::execute(self.verbose, &mut out),
        }
    }
}
