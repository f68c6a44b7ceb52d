//! `gitmcp batch [file]` – convert many inputs, reporting failures inline.

use anyhow::{Context, Result};
use gitmcp_core::{Mode, UrlNormalizer};
use serde::Serialize;
use std::io::{BufRead, Write};

/// Counts of converted and rejected (non-blank) input lines.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub converted: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.converted + self.failed
    }
}

#[derive(Serialize)]
struct BatchRecord<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

pub fn run_batch(
    normalizer: &UrlNormalizer,
    reader: impl BufRead,
    mode: Mode,
    json: bool,
    out: &mut dyn Write,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    // Invalid UTF-8 is replaced, then reported inline like any other bad input.
    for line in reader.split(b'\n') {
        let bytes = line.context("read batch input")?;
        let line = String::from_utf8_lossy(&bytes);
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let record = match normalizer.normalize(input, mode) {
            Ok(target) => {
                summary.converted += 1;
                let target = target.into_string();
                if json {
                    let record = BatchRecord {
                        input,
                        target: Some(target.as_str()),
                        error: None,
                        message: None,
                    };
                    serde_json::to_string(&record)?
                } else {
                    format!("{input}\t{target}")
                }
            }
            Err(err) => {
                summary.failed += 1;
                tracing::debug!("batch: {:?} rejected ({})", input, err.kind());
                if json {
                    let record = BatchRecord {
                        input,
                        target: None,
                        error: Some(err.kind()),
                        message: Some(err.to_string()),
                    };
                    serde_json::to_string(&record)?
                } else {
                    format!("{input}\t{err}")
                }
            }
        };
        writeln!(out, "{record}")?;
    }

    tracing::info!(
        "batch finished: {} converted, {} failed",
        summary.converted,
        summary.failed
    );
    Ok(summary)
}
