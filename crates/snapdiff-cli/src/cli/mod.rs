//! CLI for snapdiff.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use snapdiff_core::config;
use std::path::PathBuf;

use commands::{run_compare, run_fetch, run_fetch_raw, run_highlight, run_report, FetchArgs};

/// Top-level CLI for snapdiff.
#[derive(Debug, Parser)]
#[command(name = "snapdiff")]
#[command(about = "snapdiff: content downloader and screenshot diff reports", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download a URL, detect JSON vs text, and save it.
    Fetch {
        /// HTTP/HTTPS URL to download.
        url: String,
        /// Where to save (a timestamp is inserted before the extension unless --no-timestamp).
        path: PathBuf,
        /// Keep the file name exactly as given.
        #[arg(long)]
        no_timestamp: bool,
        /// JSON indent width (default from config).
        #[arg(long, value_name = "N")]
        indent: Option<usize>,
        /// Request timeout in seconds (default from config).
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,
        /// Request header as "Name: value"; replaces the default headers. Repeatable.
        #[arg(short = 'H', long = "header", value_name = "HEADER")]
        headers: Vec<String>,
    },

    /// Download any file and save its bytes unchanged.
    FetchRaw {
        /// HTTP/HTTPS URL to download.
        url: String,
        /// Where to save.
        path: PathBuf,
        /// Keep the file name exactly as given.
        #[arg(long)]
        no_timestamp: bool,
        /// Request timeout in seconds (default from config).
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,
    },

    /// Build the HTML comparison report from a file of records ("-" for stdin).
    Report {
        /// Record file: one "origin_link,origin_redirect,origin_shot,target_link,target_redirect,target_shot" per line.
        input: String,
        /// Report path (default from config).
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Compare two screenshots pixel by pixel and write the diff image.
    Compare {
        original: PathBuf,
        target: PathBuf,
        /// Diff image path; format follows the extension.
        diff: PathBuf,
    },

    /// Show where the target URL differs from the original.
    Highlight { original: String, target: String },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch {
                url,
                path,
                no_timestamp,
                indent,
                timeout,
                headers,
            } => {
                let args = FetchArgs {
                    no_timestamp,
                    indent,
                    timeout,
                    headers,
                };
                run_fetch(&cfg, &url, &path, args)?
            }
            CliCommand::FetchRaw {
                url,
                path,
                no_timestamp,
                timeout,
            } => run_fetch_raw(&cfg, &url, &path, no_timestamp, timeout)?,
            CliCommand::Report { input, output } => run_report(&cfg, &input, output)?,
            CliCommand::Compare {
                original,
                target,
                diff,
            } => run_compare(&cfg, &original, &target, &diff)?,
            CliCommand::Highlight { original, target } => run_highlight(&original, &target),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
