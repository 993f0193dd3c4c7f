// src/github/mod.rs
// =============================================================================
// This module handles fetching files from GitHub.
//
// Currently implements:
// - Downloading raw files from raw.githubusercontent.com
// - Token authentication for private repositories
// - Turning failed downloads into a visible placeholder line
// =============================================================================

mod fetch;

pub use fetch::{
    failure_placeholder, fetch_lines, split_content_lines, Fetch, FetchError, Fetched,
    GithubFetcher, TOKEN_ATTRIBUTE,
};
