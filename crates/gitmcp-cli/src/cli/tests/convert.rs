//! Tests for convert, example and batch parsing.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use gitmcp_core::Mode;

#[test]
fn cli_parse_convert() {
    match parse(&["gitmcp", "convert", "github.com/owner/repo"]) {
        CliCommand::Convert { url, mode, no_open } => {
            assert_eq!(url, "github.com/owner/repo");
            assert!(mode.is_none());
            assert!(!no_open);
        }
        _ => panic!("expected Convert"),
    }
}

#[test]
fn cli_parse_convert_chat_no_open() {
    match parse(&[
        "gitmcp",
        "convert",
        "owner.github.io/repo",
        "--mode",
        "chat",
        "--no-open",
    ]) {
        CliCommand::Convert { url, mode, no_open } => {
            assert_eq!(url, "owner.github.io/repo");
            assert_eq!(mode, Some(Mode::Chat));
            assert!(no_open);
        }
        _ => panic!("expected Convert with --mode chat --no-open"),
    }
}

#[test]
fn cli_parse_convert_rejects_unknown_mode() {
    assert!(Cli::try_parse_from(["gitmcp", "convert", "github.com/a/b", "--mode", "docs"]).is_err());
}

#[test]
fn cli_parse_convert_requires_url() {
    assert!(Cli::try_parse_from(["gitmcp", "convert"]).is_err());
}

#[test]
fn cli_parse_example() {
    match parse(&["gitmcp", "example", "--mode", "mcp"]) {
        CliCommand::Example { mode, no_open } => {
            assert_eq!(mode, Some(Mode::Mcp));
            assert!(!no_open);
        }
        _ => panic!("expected Example"),
    }
}

#[test]
fn cli_parse_batch_stdin() {
    match parse(&["gitmcp", "batch"]) {
        CliCommand::Batch { file, mode, json } => {
            assert!(file.is_none());
            assert!(mode.is_none());
            assert!(!json);
        }
        _ => panic!("expected Batch"),
    }
}

#[test]
fn cli_parse_batch_file_json() {
    match parse(&["gitmcp", "batch", "urls.txt", "--json"]) {
        CliCommand::Batch { file, json, .. } => {
            assert_eq!(file.as_deref(), Some(std::path::Path::new("urls.txt")));
            assert!(json);
        }
        _ => panic!("expected Batch with file and --json"),
    }
}
