//! Command-line interface for termconf.
//!
//! Loads the layered settings (optional defaults file, then the user file)
//! and prints, validates or initializes them.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use termconf_config::AppSettings;

/// termconf - Layered terminal settings inspector
#[derive(Parser, Debug)]
#[command(name = "termconf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Defaults file layered underneath the user settings
    #[arg(long, value_name = "PATH", global = true)]
    pub defaults: Option<PathBuf>,

    /// User settings file (default: platform config directory)
    #[arg(long, value_name = "PATH", global = true)]
    pub settings: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace); overrides DEBUG_LEVEL
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<LevelFilter>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print the merged settings document
    Show,
    /// Print only the global settings snapshot
    Globals,
    /// Report problems in the merged settings; exits 1 if any are found
    Validate,
    /// Write a default settings file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// The user settings path, falling back to the platform location.
    pub fn settings_path(&self) -> PathBuf {
        self.settings
            .clone()
            .unwrap_or_else(AppSettings::settings_path)
    }

    fn load(&self) -> Result<AppSettings> {
        let path = self.settings_path();
        AppSettings::load_layered(self.defaults.as_deref(), &path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))
    }
}

/// Run a parsed command, writing results to `out`. Returns the exit code.
pub fn execute(cli: &Cli, out: &mut impl Write) -> Result<i32> {
    match &cli.command {
        Commands::Show => {
            let settings = cli.load()?;
            writeln!(out, "{}", serde_json::to_string_pretty(&settings.to_document())?)?;
            Ok(0)
        }
        Commands::Globals => {
            let settings = cli.load()?;
            writeln!(
                out,
                "{}",
                serde_json::to_string_pretty(&settings.globals.to_document())?
            )?;
            Ok(0)
        }
        Commands::Validate => {
            let mut settings = cli.load()?;
            let warnings = settings.validate();
            if warnings.is_empty() {
                writeln!(out, "Settings are valid.")?;
                return Ok(0);
            }
            for warning in &warnings {
                writeln!(out, "warning: {warning}")?;
            }
            Ok(1)
        }
        Commands::Init { force } => {
            let path = cli.settings_path();
            if path.exists() && !force {
                bail!(
                    "{} already exists; pass --force to overwrite it",
                    path.display()
                );
            }
            AppSettings::starter()
                .save(&path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            writeln!(out, "Wrote default settings to {}", path.display())?;
            Ok(0)
        }
    }
}
