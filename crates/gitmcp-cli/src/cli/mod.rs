//! CLI for the gitmcp URL converter.

mod browser;
mod commands;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use gitmcp_core::config::{self, GitmcpConfig};
use gitmcp_core::Mode;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

pub use browser::{Browser, SystemBrowser};
use commands::{run_batch, run_completions, run_config, run_convert, run_example, run_man};

/// Top-level CLI for the gitmcp URL converter.
#[derive(Debug, Parser)]
#[command(name = "gitmcp")]
#[command(about = "Convert GitHub repository URLs into GitMCP mirror URLs", long_about = None)]
pub struct Cli {
    /// Configuration file to use instead of ~/.config/gitmcp/config.toml.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Mirror host to convert to, overriding the configuration.
    #[arg(long, global = true, value_name = "HOST")]
    pub mirror_host: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Convert a GitHub URL and open the result in the browser.
    Convert {
        /// github.com/owner/repo or owner.github.io/repo (scheme optional).
        url: String,
        /// Target endpoint: "mcp" or "chat" (default from config).
        #[arg(long)]
        mode: Option<Mode>,
        /// Print the converted URL without opening a browser.
        #[arg(long)]
        no_open: bool,
    },

    /// Convert the configured example repository.
    Example {
        /// Target endpoint: "mcp" or "chat" (default from config).
        #[arg(long)]
        mode: Option<Mode>,
        /// Print the converted URL without opening a browser.
        #[arg(long)]
        no_open: bool,
    },

    /// Convert one URL per line from a file or stdin.
    Batch {
        /// Input file; reads stdin when omitted.
        file: Option<PathBuf>,
        /// Target endpoint: "mcp" or "chat" (default from config).
        #[arg(long)]
        mode: Option<Mode>,
        /// Emit one JSON object per line.
        #[arg(long)]
        json: bool,
    },

    /// Show the effective configuration.
    Config {
        /// Print only the configuration file path.
        #[arg(long)]
        path: bool,
    },

    /// Generate shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Render the man page (roff) to stdout.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut out = io::stdout().lock();
        cli.run(&SystemBrowser, &mut out)
    }
}

impl Cli {
    /// Dispatches the parsed command, writing user output to `out`.
    pub fn run(self, browser: &dyn Browser, out: &mut dyn Write) -> Result<()> {
        let Cli {
            config,
            mirror_host,
            command,
        } = self;
        let load = || load_config(config.as_deref(), mirror_host.as_deref());

        match command {
            CliCommand::Convert { url, mode, no_open } => {
                let (cfg, _) = load()?;
                let mode = mode.unwrap_or(cfg.default_mode);
                let open = cfg.open_browser && !no_open;
                run_convert(&cfg.normalizer(), &url, mode, open, browser, out)?;
            }
            CliCommand::Example { mode, no_open } => {
                let (cfg, _) = load()?;
                let mode = mode.unwrap_or(cfg.default_mode);
                let open = cfg.open_browser && !no_open;
                run_example(&cfg.normalizer(), &cfg.example_url, mode, open, browser, out)?;
            }
            CliCommand::Batch { file, mode, json } => {
                let (cfg, _) = load()?;
                let normalizer = cfg.normalizer();
                let mode = mode.unwrap_or(cfg.default_mode);
                let summary = match file {
                    Some(path) => {
                        let file = File::open(&path)
                            .with_context(|| format!("open {}", path.display()))?;
                        run_batch(&normalizer, BufReader::new(file), mode, json, out)?
                    }
                    None => run_batch(&normalizer, io::stdin().lock(), mode, json, out)?,
                };
                if summary.failed > 0 {
                    bail!(
                        "{} of {} inputs could not be converted",
                        summary.failed,
                        summary.total()
                    );
                }
            }
            CliCommand::Config { path } => {
                let (cfg, config_file) = load()?;
                run_config(&cfg, &config_file, path, out)?;
            }
            CliCommand::Completions { shell } => run_completions(shell, out)?,
            CliCommand::Man => run_man(out)?,
        }

        Ok(())
    }
}

/// Loads the explicit or default config file and applies `--mirror-host`.
fn load_config(path: Option<&Path>, mirror_host: Option<&str>) -> Result<(GitmcpConfig, PathBuf)> {
    let (mut cfg, path) = match path {
        Some(path) => (config::load_from(path)?, path.to_path_buf()),
        None => (config::load_or_init()?, config::config_path()?),
    };
    if let Some(host) = mirror_host {
        cfg.mirror_host = host.to_string();
        cfg.validate()?;
    }
    tracing::debug!("loaded config from {}: {:?}", path.display(), cfg);
    Ok((cfg, path))
}

#[cfg(test)]
mod tests;
