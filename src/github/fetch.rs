// src/github/fetch.rs
// =============================================================================
// This module downloads raw files from GitHub.
//
// Strategy:
// - One GET per include, no retries, no caching
// - If an access token is configured it is sent as `Authorization: token ...`
//   so private repositories work
// - Any failure (DNS, TLS, 404, 401, ...) becomes one warning plus a single
//   placeholder line, so the document still renders
//
// The actual HTTP call sits behind the `Fetch` trait. The real implementation
// uses reqwest; tests plug in an in-memory map instead of the network.
// =============================================================================

use std::future::Future;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use thiserror::Error;

use crate::include::{Diagnostic, DiagnosticKind, Diagnostics};

/// Name of the document attribute that carries the access token
pub const TOKEN_ATTRIBUTE: &str = "github-access-token";

#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS, timeout or body decoding problem
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The server answered, but not with 2xx
    #[error("failed to fetch {url}: HTTP {status}")]
    Status { url: String, status: u16 },
    /// The token can't be used as a header value (e.g. it contains a newline)
    #[error("access token is not a valid header value")]
    InvalidToken,
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

// Anything that can turn a URL into text
//
// Implementations must be usable from several resolutions at once, so they
// take &self and keep no per-request state.
pub trait Fetch {
    fn fetch_text(
        &self,
        url: &str,
        token: Option<&str>,
    ) -> impl Future<Output = Result<String, FetchError>> + Send;
}

// The real fetcher, backed by a reqwest Client
//
// Client is cheap to clone and pools connections, so one instance is shared
// by every include in a document.
#[derive(Debug, Clone)]
pub struct GithubFetcher {
    client: Client,
}

impl GithubFetcher {
    // Creates a fetcher
    //
    // Parameters:
    //   timeout: optional per-request deadline; None waits as long as the
    //            server keeps the connection open
    pub fn new(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("text/plain, */*"));

        let mut builder = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(5));

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(FetchError::Client)?;
        Ok(Self { client })
    }
}

impl Fetch for GithubFetcher {
    async fn fetch_text(&self, url: &str, token: Option<&str>) -> Result<String, FetchError> {
        let mut request = self.client.get(url);

        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("token {}", token))
                .map_err(|_| FetchError::InvalidToken)?;
            value.set_sensitive(true);
            request = request.header(AUTHORIZATION, value);
        }

        let response = request.send().await.map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        response.text().await.map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })
    }
}

/// Result of fetching one include target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    pub lines: Vec<String>,
    /// False when `lines` is the failure placeholder
    pub ok: bool,
}

// Fetches a target and splits it into lines
//
// Never fails: on error the warning goes into `diagnostics` and the content
// is the one-line placeholder from `failure_placeholder`.
pub async fn fetch_lines<F: Fetch>(
    fetcher: &F,
    target: &str,
    token: Option<&str>,
    diagnostics: &mut Diagnostics,
) -> Fetched {
    match fetcher.fetch_text(target, token).await {
        Ok(text) => {
            tracing::debug!(uri = %target, bytes = text.len(), "fetched include");
            Fetched {
                lines: split_content_lines(&text),
                ok: true,
            }
        }
        Err(error) => {
            tracing::debug!(uri = %target, error = %error, "fetch failed");
            diagnostics.push(Diagnostic::warning(
                DiagnosticKind::FetchFailed,
                target,
                format!(
                    "Failed to retrieve GitHub URI {}. Did you set :{}:?",
                    target, TOKEN_ATTRIBUTE
                ),
            ));
            Fetched {
                lines: vec![failure_placeholder(target)],
                ok: false,
            }
        }
    }
}

/// The single line shown in place of content that couldn't be fetched
pub fn failure_placeholder(target: &str) -> String {
    format!("WARNING: Failed to retrieve GitHub URI link:{}[]", target)
}

// Splits a body into lines so that numbering matches the file on GitHub
//
// A trailing newline does not start an extra line, and `\r\n` endings are
// stripped just like `\n`.
pub fn split_content_lines(text: &str) -> Vec<String> {
    text.lines().map(String::from).collect()
}
