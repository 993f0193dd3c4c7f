// src/document/expand.rs
// =============================================================================
// Expands the GitHub includes of a whole document.
//
// How it works:
// 1. Walk the document line by line
// 2. Track `:github-access-token:` attribute entries, so a document can carry
//    its own token (it overrides the one from the command line)
// 3. Every `include::https://raw.githubusercontent.com/...[...]` line becomes
//    a pending include; every other line is copied as-is
// 4. Resolve the pending includes concurrently, but keep document order
// 5. Splice the resolved lines back in
//
// Includes for other targets (local files, other hosts) are left untouched.
// =============================================================================

use futures::stream::{self, StreamExt};

use crate::config::Config;
use crate::github::{Fetch, TOKEN_ATTRIBUTE};
use crate::include::{handles, resolve, Diagnostics, Directive};

/// The expanded document and everything that was reported on the way
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    pub text: String,
    pub diagnostics: Diagnostics,
    /// Number of include directives that were resolved
    pub includes: usize,
}

// One piece of the document, in order
enum Piece {
    Text(String),
    Include {
        directive: Directive,
        token: Option<String>,
    },
}

// Expands a document
//
// Parameters:
//   document: the full source text
//   fetcher: where included files come from
//   config: token, concurrency
pub async fn expand_document<F: Fetch>(document: &str, fetcher: &F, config: &Config) -> Expansion {
    let pieces = split_pieces(document, config.token.clone());
    let includes = pieces
        .iter()
        .filter(|piece| matches!(piece, Piece::Include { .. }))
        .count();

    // .buffered (not buffer_unordered) so results come back in document order
    let resolved: Vec<(Vec<String>, Diagnostics)> = stream::iter(pieces)
        .map(move |piece| async move {
            match piece {
                Piece::Text(line) => (vec![line], Diagnostics::new()),
                Piece::Include { directive, token } => {
                    let (content, diagnostics) =
                        resolve(fetcher, &directive, token.as_deref()).await;
                    (content.lines, diagnostics)
                }
            }
        })
        .buffered(config.concurrency)
        .collect()
        .await;

    let mut lines = Vec::new();
    let mut diagnostics = Diagnostics::new();
    for (piece_lines, piece_diagnostics) in resolved {
        lines.extend(piece_lines);
        diagnostics.extend(piece_diagnostics);
    }

    let mut text = lines.join("\n");
    if document.ends_with('\n') && !lines.is_empty() {
        text.push('\n');
    }

    Expansion {
        text,
        diagnostics,
        includes,
    }
}

fn split_pieces(document: &str, mut token: Option<String>) -> Vec<Piece> {
    let mut pieces = Vec::new();

    for line in document.lines() {
        if let Some(update) = token_entry(line) {
            token = update;
            pieces.push(Piece::Text(line.to_string()));
            continue;
        }

        match Directive::parse_line(line) {
            Some(directive) if handles(&directive.target) => pieces.push(Piece::Include {
                directive,
                token: token.clone(),
            }),
            _ => pieces.push(Piece::Text(line.to_string())),
        }
    }

    pieces
}

// Reads a token attribute entry
//
// `:github-access-token: abc` -> Some(Some("abc"))
// `:github-access-token!:`    -> Some(None)   (unset)
// anything else               -> None
fn token_entry(line: &str) -> Option<Option<String>> {
    let rest = line.strip_prefix(':')?;

    if let Some(after) = rest.strip_prefix(TOKEN_ATTRIBUTE) {
        if after.starts_with("!:") {
            return Some(None);
        }
        let value = after.strip_prefix(':')?.trim();
        return Some(if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        });
    }

    // `:!github-access-token:` is the other way to unset an attribute
    if rest.strip_prefix('!')?.strip_prefix(TOKEN_ATTRIBUTE)? == ":" {
        return Some(None);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::FetchError;

    // Serves a two-line file whose first line names the token it was given
    struct TokenEcho;

    impl Fetch for TokenEcho {
        async fn fetch_text(&self, url: &str, token: Option<&str>) -> Result<String, FetchError> {
            if url.ends_with("missing.adoc") {
                return Err(FetchError::Status {
                    url: url.to_string(),
                    status: 404,
                });
            }
            Ok(format!("token {}\nbody of {}\n", token.unwrap_or("none"), url))
        }
    }

    #[test]
    fn test_token_entries() {
        assert_eq!(
            token_entry(":github-access-token: abc123"),
            Some(Some("abc123".to_string()))
        );
        assert_eq!(token_entry(":github-access-token!:"), Some(None));
        assert_eq!(token_entry(":!github-access-token:"), Some(None));
        assert_eq!(token_entry(":github-access-token:"), Some(None));
        assert_eq!(token_entry(":other: abc"), None);
        assert_eq!(token_entry("github-access-token: abc"), None);
    }

    #[tokio::test]
    async fn test_text_without_includes_is_unchanged() {
        let doc = "= Title\n\nSome text.\ninclude::local.adoc[]\n";
        let expansion = expand_document(doc, &TokenEcho, &Config::default()).await;
        assert_eq!(expansion.text, doc);
        assert_eq!(expansion.includes, 0);
        assert!(expansion.diagnostics.is_empty());
    }

    #[tokio::test]
    async fn test_includes_are_spliced_in_order() {
        let doc = "before\n\
                   include::https://raw.githubusercontent.com/o/r/main/a.adoc[lines=2]\n\
                   middle\n\
                   include::https://raw.githubusercontent.com/o/r/main/b.adoc[lines=2]\n\
                   after\n";
        let config = Config::new(None, None, 2);
        let expansion = expand_document(doc, &TokenEcho, &config).await;

        assert_eq!(
            expansion.text,
            "before\n\
             body of https://raw.githubusercontent.com/o/r/main/a.adoc\n\
             middle\n\
             body of https://raw.githubusercontent.com/o/r/main/b.adoc\n\
             after\n"
        );
        assert_eq!(expansion.includes, 2);
    }

    #[tokio::test]
    async fn test_document_token_overrides_config() {
        let doc = "include::https://raw.githubusercontent.com/o/r/main/a.adoc[lines=1]\n\
                   :github-access-token: from-doc\n\
                   include::https://raw.githubusercontent.com/o/r/main/a.adoc[lines=1]\n\
                   :github-access-token!:\n\
                   include::https://raw.githubusercontent.com/o/r/main/a.adoc[lines=1]\n";
        let config = Config::new(Some("from-cli".to_string()), None, 4);
        let expansion = expand_document(doc, &TokenEcho, &config).await;

        let tokens: Vec<_> = expansion
            .text
            .lines()
            .filter(|line| line.starts_with("token "))
            .collect();
        assert_eq!(tokens, vec!["token from-cli", "token from-doc", "token none"]);
    }

    #[tokio::test]
    async fn test_failed_include_keeps_rest_of_document() {
        let doc = "include::https://raw.githubusercontent.com/o/r/main/missing.adoc[]\n\
                   \n\
                   trailing content\n";
        let expansion = expand_document(doc, &TokenEcho, &Config::default()).await;

        let lines: Vec<_> = expansion.text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "WARNING: Failed to retrieve GitHub URI link:https://raw.githubusercontent.com/o/r/main/missing.adoc[]",
                "",
                "trailing content",
            ]
        );
        assert_eq!(expansion.diagnostics.len(), 1);
    }
}
