// src/include/tags.rs
// =============================================================================
// Tagged region extraction for the `tag` and `tags` attributes.
//
// A region is delimited by two marker lines in the included file:
//
//   // tag::snippet[]
//   let x = 1;
//   // end::snippet[]
//
// Only the lines strictly between the markers are kept. For file types with
// circumfix comments the marker must also end with the closing token, e.g.
// `<!-- tag::snippet[] -->`.
//
// Known limitation: each marker is located by its first occurrence in the
// file, independently of the other. A file that repeats a tag, or closes one
// tag with another tag's end marker, can pair the wrong lines. Files are
// expected to hold one region per tag.
// =============================================================================

use super::diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
use super::syntax::{circumfix_for, target_extension};

// Builds the text a marker line has to end with
fn marker(kind: &str, tag: &str, suffix: Option<&str>) -> String {
    match suffix {
        Some(suffix) => format!("{}::{}[] {}", kind, tag, suffix),
        None => format!("{}::{}[]", kind, tag),
    }
}

fn find_marker(lines: &[String], marker: &str) -> Option<usize> {
    lines
        .iter()
        .position(|line| line.trim_end_matches(['\r', '\n']).ends_with(marker))
}

// Extracts the requested regions, in the order they were requested
//
// Parameters:
//   lines: the file content, one entry per line
//   tags: tag names; a name listed twice is extracted twice
//   target: URL of the file, used for its extension and in warnings
//   diagnostics: receives one warning per tag that can't be extracted
pub fn extract_tags(
    lines: &[String],
    tags: &[String],
    target: &str,
    diagnostics: &mut Diagnostics,
) -> Vec<String> {
    let extension = target_extension(target);
    let suffix = circumfix_for(&extension).map(|syntax| syntax.suffix);

    let mut snipped = Vec::new();

    for tag in tags {
        let open = find_marker(lines, &marker("tag", tag, suffix));
        let close = find_marker(lines, &marker("end", tag, suffix));

        match (open, close) {
            (Some(open), Some(close)) => {
                if close > open + 1 {
                    snipped.extend_from_slice(&lines[open + 1..close]);
                }
            }
            (None, None) => diagnostics.push(Diagnostic::warning(
                DiagnosticKind::TagNotFound,
                target,
                format!("Tag {} not found in included GitHub URI {}.", tag, target),
            )),
            (None, Some(_)) => diagnostics.push(Diagnostic::warning(
                DiagnosticKind::TagOnlyEndFound,
                target,
                format!(
                    "Tag {} not found in included GitHub URI {}, but end::[] tag was found.",
                    tag, target
                ),
            )),
            (Some(_), None) => diagnostics.push(Diagnostic::warning(
                DiagnosticKind::TagNotClosed,
                target,
                format!(
                    "Closing tag for tag {} not found in included GitHub URI {}.",
                    tag, target
                ),
            )),
        }
    }

    snipped
}
