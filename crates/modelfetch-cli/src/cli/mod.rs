//! CLI for modelfetch.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use modelfetch_core::config::{self, FetchConfig};
use std::path::PathBuf;

use commands::{run_fetch, run_list, run_status};

/// Every asset resolved, or failures tolerated because strict mode is off.
pub const EXIT_OK: i32 = 0;
/// Config, save-directory, or manifest error.
pub const EXIT_FATAL: i32 = 1;
/// Strict mode and at least one asset failed to resolve.
pub const EXIT_ITEM_FAILURES: i32 = 2;

/// Top-level CLI for the modelfetch asset fetcher.
#[derive(Debug, Parser)]
#[command(name = "modelfetch")]
#[command(about = "modelfetch: fetch a catalog of 3D model assets and write a manifest", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/modelfetch/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory assets are saved into.
    #[arg(long, global = true, value_name = "DIR")]
    pub save_dir: Option<PathBuf>,

    /// Path of the JSON manifest.
    #[arg(long, global = true, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Per-request connect/stall timeout in seconds (at least 1).
    #[arg(long, global = true, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Exit with status 2 if any asset fails to resolve.
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum CliCommand {
    /// Download missing assets and rewrite the manifest (default).
    Fetch,

    /// Print the resolved source list and any file name collisions. No network access.
    List,

    /// Show which manifest entries are present in the save directory.
    Status,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, cfg: &mut FetchConfig) {
        if let Some(dir) = &self.save_dir {
            cfg.save_dir = dir.clone();
        }
        if let Some(path) = &self.manifest {
            cfg.manifest_path = path.clone();
        }
        if let Some(secs) = self.timeout {
            cfg.timeout_secs = secs;
        }
        if self.strict {
            cfg.strict = true;
        }
    }

    fn load_config(&self) -> Result<FetchConfig> {
        let mut cfg = match &self.config {
            Some(path) => config::load_from_path(path)?,
            None => match config::config_path() {
                Ok(path) if path.exists() => config::load_from_path(&path)?,
                _ => default_config(config::load_or_init()),
            },
        };
        self.apply_overrides(&mut cfg);
        Ok(cfg)
    }
}

/// The freshly written default config, or the built-in defaults when it
/// cannot be written, so a bare `modelfetch` still runs without a writable
/// config directory.
fn default_config(loaded: Result<FetchConfig>) -> FetchConfig {
    match loaded {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!("config unavailable, using built-in defaults: {:#}", e);
            FetchConfig::default()
        }
    }
}

/// Process exit status for a command result; any error is fatal.
pub fn process_exit_code(result: &Result<i32>) -> i32 {
    match result {
        Ok(code) => *code,
        Err(_) => EXIT_FATAL,
    }
}

impl CliCommand {
    /// Parse arguments, run the selected command, and return the process exit code.
    pub fn run_from_args() -> Result<i32> {
        let cli = Cli::parse();
        let cfg = cli.load_config()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command.unwrap_or(CliCommand::Fetch) {
            CliCommand::Fetch => run_fetch(&cfg),
            CliCommand::List => run_list(&cfg).map(|()| EXIT_OK),
            CliCommand::Status => run_status(&cfg).map(|()| EXIT_OK),
        }
    }
}

#[cfg(test)]
mod tests;
