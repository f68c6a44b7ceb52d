//! `gitmcp convert <url>` – convert one URL and open it.

use crate::cli::Browser;
use anyhow::{anyhow, Result};
use gitmcp_core::{Mode, TargetUrl, UrlNormalizer};
use std::io::Write;

/// Prints the mirror URL for `input`, then opens it when `open` is set.
///
/// A conversion failure becomes an error carrying only the user-facing message.
/// A browser failure is reported on stderr and does not fail the command.
pub fn run_convert(
    normalizer: &UrlNormalizer,
    input: &str,
    mode: Mode,
    open: bool,
    browser: &dyn Browser,
    out: &mut dyn Write,
) -> Result<TargetUrl> {
    tracing::debug!("convert input={:?} mode={}", input, mode);
    let target = normalizer.normalize(input, mode).map_err(|err| {
        tracing::warn!("conversion failed ({}) for input={:?}: {:?}", err.kind(), input, err);
        anyhow!("{err}")
    })?;
    tracing::info!("converted {:?} to {}", input, target);

    writeln!(out, "{target}")?;
    out.flush()?;

    if open {
        if let Err(e) = browser.open(target.as_str()) {
            tracing::warn!("failed to open browser for {}: {}", target, e);
            eprintln!("Failed to open browser: {}", e);
        }
    }
    Ok(target)
}
