//! `gitmcp config` – show the effective configuration.

use anyhow::Result;
use gitmcp_core::config::GitmcpConfig;
use std::io::Write;
use std::path::Path;

pub fn run_config(
    cfg: &GitmcpConfig,
    path: &Path,
    path_only: bool,
    out: &mut dyn Write,
) -> Result<()> {
    if path_only {
        writeln!(out, "{}", path.display())?;
    } else {
        writeln!(out, "# {}", path.display())?;
        write!(out, "{}", cfg.to_toml()?)?;
    }
    Ok(())
}
