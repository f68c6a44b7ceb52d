//! `gitmcp example` – convert the configured example repository.

use super::run_convert;
use crate::cli::Browser;
use anyhow::Result;
use gitmcp_core::{Mode, TargetUrl, UrlNormalizer};
use std::io::Write;

pub fn run_example(
    normalizer: &UrlNormalizer,
    example_url: &str,
    mode: Mode,
    open: bool,
    browser: &dyn Browser,
    out: &mut dyn Write,
) -> Result<TargetUrl> {
    writeln!(out, "Example: {example_url}")?;
    run_convert(normalizer, example_url, mode, open, browser, out)
}
