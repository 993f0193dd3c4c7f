// src/config.rs
// =============================================================================
// Runtime settings shared by every command.
//
// Built once from the command line (and GITHUB_ACCESS_TOKEN through clap's
// env support), then passed down by reference.
// =============================================================================

use std::time::Duration;

/// How many includes of one document are fetched at the same time
pub const DEFAULT_CONCURRENCY: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Access token for private repositories
    pub token: Option<String>,
    /// Per-request deadline; None means no deadline
    pub timeout: Option<Duration>,
    /// Upper bound on concurrent fetches while expanding a document
    pub concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token: None,
            timeout: None,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl Config {
    pub fn new(token: Option<String>, timeout_secs: Option<u64>, concurrency: usize) -> Self {
        Self {
            // An empty token is as good as none; sending `token ` would only earn a 401
            token: token.filter(|t| !t.trim().is_empty()),
            timeout: timeout_secs.map(Duration::from_secs),
            concurrency: concurrency.max(1),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}
