// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (warnings go to stderr)
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with proper code (0 = clean, 1 = warnings were reported, 2 = error)
// =============================================================================

mod cli;

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;

use cli::{Cli, Commands};
use github_include::config::Config;
use github_include::document::expand_document;
use github_include::github::GithubFetcher;
use github_include::include::{handles, resolve, Diagnostics, Directive, ResolvedContent};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    github_include::init_logging(cli.verbose);

    match cli.command {
        Commands::Resolve {
            url,
            lines,
            tag,
            tags,
            json,
        } => {
            let config = Config::new(cli.token, cli.timeout, 1);
            let mut directive = Directive::new(url);
            for (name, value) in [("lines", lines), ("tag", tag), ("tags", tags)] {
                if let Some(value) = value {
                    directive.attributes.insert(name.to_string(), value);
                }
            }
            handle_resolve(&directive, &config, json).await
        }
        Commands::Expand {
            input,
            output,
            jobs,
        } => {
            let config = Config::new(cli.token, cli.timeout, jobs);
            handle_expand(&input, output.as_deref(), &config).await
        }
    }
}

// What `resolve --json` prints
#[derive(Serialize)]
struct ResolveReport<'a> {
    #[serde(flatten)]
    content: &'a ResolvedContent,
    diagnostics: &'a Diagnostics,
}

async fn handle_resolve(directive: &Directive, config: &Config, json: bool) -> Result<i32> {
    if !handles(&directive.target) {
        bail!(
            "not a raw GitHub URL: {} (expected it to start with {})",
            directive.target,
            github_include::include::RAW_CONTENT_PREFIX
        );
    }

    let fetcher = GithubFetcher::new(config.timeout)?;
    let (content, diagnostics) = resolve(&fetcher, directive, config.token()).await;

    if json {
        let report = ResolveReport {
            content: &content,
            diagnostics: &diagnostics,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for line in &content.lines {
            writeln!(out, "{}", line)?;
        }
    }

    Ok(exit_code(&diagnostics))
}

async fn handle_expand(input: &Path, output: Option<&Path>, config: &Config) -> Result<i32> {
    let document = read_input(input)?;

    let fetcher = GithubFetcher::new(config.timeout)?;
    let expansion = expand_document(&document, &fetcher, config).await;

    tracing::debug!(
        includes = expansion.includes,
        warnings = expansion.diagnostics.len(),
        "expanded document"
    );

    match output {
        Some(path) => fs::write(path, &expansion.text)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => io::stdout().write_all(expansion.text.as_bytes())?,
    }

    Ok(exit_code(&expansion.diagnostics))
}

fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }

    fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))
}

// 0 when everything resolved cleanly, 1 when any warning was reported
fn exit_code(diagnostics: &Diagnostics) -> i32 {
    if diagnostics.is_empty() {
        0
    } else {
        1
    }
}
