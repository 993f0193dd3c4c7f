// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands:
// - resolve: resolve a single include target and print the lines
// - expand: expand every GitHub include in a document
//
// The access token can come from --token or the GITHUB_ACCESS_TOKEN
// environment variable (clap's `env` feature reads it for us).
// =============================================================================

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use github_include::config::DEFAULT_CONCURRENCY;

#[derive(Parser, Debug)]
#[command(
    name = "github-include",
    version,
    about = "Resolve include:: directives that point at raw GitHub files",
    long_about = "github-include fetches files from raw.githubusercontent.com and reduces them to \
                  the requested lines or tagged regions, the way an include directive would. \
                  Private repositories work with an access token."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// GitHub access token, sent as `Authorization: token <value>`
    #[arg(long, global = true, env = "GITHUB_ACCESS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Give up on a request after this many seconds (default: no limit)
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Show debug output on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve one include target and print the selected lines
    ///
    /// Example: github-include resolve https://raw.githubusercontent.com/o/r/main/src/lib.rs --tag setup
    Resolve {
        /// Raw file URL (must start with https://raw.githubusercontent.com)
        url: String,

        /// Line selection, e.g. "1;3..4;6..-1"
        #[arg(long)]
        lines: Option<String>,

        /// Single tag to extract
        #[arg(long)]
        tag: Option<String>,

        /// Several tags, e.g. "setup;teardown"
        #[arg(long)]
        tags: Option<String>,

        /// Output the result and warnings as JSON
        #[arg(long)]
        json: bool,
    },

    /// Expand every GitHub include directive in a document
    ///
    /// Example: github-include expand README.adoc -o README.expanded.adoc
    Expand {
        /// Document to read ("-" for stdin)
        input: PathBuf,

        /// Where to write the result (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// How many includes to fetch at once
        #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
        jobs: usize,
    },
}
