//! Tests for fetch and fetch-raw.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn cli_parse_fetch_defaults() {
    match parse(&["snapdiff", "fetch", "https://example.com/api", "out/data.json"]) {
        CliCommand::Fetch {
            url,
            path,
            no_timestamp,
            indent,
            timeout,
            headers,
        } => {
            assert_eq!(url, "https://example.com/api");
            assert_eq!(path, PathBuf::from("out/data.json"));
            assert!(!no_timestamp);
            assert!(indent.is_none());
            assert!(timeout.is_none());
            assert!(headers.is_empty());
        }
        _ => panic!("expected Fetch"),
    }
}

#[test]
fn cli_parse_fetch_all_options() {
    match parse(&[
        "snapdiff",
        "fetch",
        "https://example.com/api",
        "data.json",
        "--no-timestamp",
        "--indent",
        "2",
        "--timeout",
        "5",
        "-H",
        "Accept: application/json",
        "--header",
        "X-Token: abc",
    ]) {
        CliCommand::Fetch {
            no_timestamp,
            indent,
            timeout,
            headers,
            ..
        } => {
            assert!(no_timestamp);
            assert_eq!(indent, Some(2));
            assert_eq!(timeout, Some(5));
            assert_eq!(headers, vec!["Accept: application/json", "X-Token: abc"]);
        }
        _ => panic!("expected Fetch with options"),
    }
}

#[test]
fn cli_parse_fetch_requires_path() {
    assert!(Cli::try_parse_from(["snapdiff", "fetch", "https://example.com"]).is_err());
}

#[test]
fn cli_parse_fetch_raw() {
    match parse(&[
        "snapdiff",
        "fetch-raw",
        "https://raw.example.com/repo/main/logo.png",
        "assets/logo.png",
        "--no-timestamp",
    ]) {
        CliCommand::FetchRaw {
            url,
            path,
            no_timestamp,
            timeout,
        } => {
            assert_eq!(url, "https://raw.example.com/repo/main/logo.png");
            assert_eq!(path, PathBuf::from("assets/logo.png"));
            assert!(no_timestamp);
            assert!(timeout.is_none());
        }
        _ => panic!("expected FetchRaw"),
    }
}
