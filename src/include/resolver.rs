// src/include/resolver.rs
// =============================================================================
// Resolves one include directive into the lines that replace it.
//
// Decision order:
// 1. Fetch the target. A failed fetch returns the placeholder right away;
//    selection is never applied to it.
// 2. `lines` set      -> line selection (tag attributes are ignored)
// 3. `tag` or `tags`  -> tagged regions
// 4. nothing          -> the whole file
//
// Empty attribute values count as missing, so `lines=` falls through to the
// tag or whole-file case.
//
// Every call builds its own state, so many directives can be resolved at the
// same time with one shared fetcher.
// =============================================================================

use serde::Serialize;

use super::diagnostics::Diagnostics;
use super::directive::Directive;
use super::lines::{select_lines, split_data_list};
use super::tags::extract_tags;
use crate::github::{fetch_lines, Fetch};

/// Which selection was applied to the fetched file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    Lines,
    Tags,
    WholeFile,
    /// The fetch failed, content is the placeholder
    Failed,
}

/// The lines that replace a directive, plus where they came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedContent {
    pub target: String,
    pub selection: Selection,
    pub lines: Vec<String>,
}

impl ResolvedContent {
    pub fn is_placeholder(&self) -> bool {
        self.selection == Selection::Failed
    }
}

// Resolves a directive
//
// Parameters:
//   fetcher: where the content comes from
//   directive: target + attributes
//   token: access token, if one is configured
//
// Returns the content and every warning raised along the way. Nothing in
// here returns an error.
pub async fn resolve<F: Fetch>(
    fetcher: &F,
    directive: &Directive,
    token: Option<&str>,
) -> (ResolvedContent, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let target = directive.target.as_str();

    let fetched = fetch_lines(fetcher, target, token, &mut diagnostics).await;
    if !fetched.ok {
        let content = ResolvedContent {
            target: target.to_string(),
            selection: Selection::Failed,
            lines: fetched.lines,
        };
        return (content, diagnostics);
    }

    let (selection, lines) = if let Some(spec) = directive.attribute("lines") {
        (Selection::Lines, select_lines(&fetched.lines, spec))
    } else if let Some(tags) = requested_tags(directive) {
        let lines = extract_tags(&fetched.lines, &tags, target, &mut diagnostics);
        (Selection::Tags, lines)
    } else {
        (Selection::WholeFile, fetched.lines)
    };

    let content = ResolvedContent {
        target: target.to_string(),
        selection,
        lines,
    };
    (content, diagnostics)
}

// Builds the ordered list of tag names to extract
//
// `tag` wins over `tags` when both are given. Returns None when neither
// names anything.
fn requested_tags(directive: &Directive) -> Option<Vec<String>> {
    if let Some(tag) = directive.attribute("tag") {
        return Some(vec![tag.trim().to_string()]);
    }

    let tags: Vec<String> = split_data_list(directive.attribute("tags")?)
        .into_iter()
        .map(String::from)
        .collect();

    if tags.is_empty() {
        None
    } else {
        Some(tags)
    }
}
