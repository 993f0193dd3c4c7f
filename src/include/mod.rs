// src/include/mod.rs
// =============================================================================
// This module turns an include directive into the lines that replace it.
//
// Submodules:
// - directive: the directive type and `include::` line recognition
// - syntax: comment syntax per file extension, for tag markers
// - lines: the `lines` attribute (line ranges)
// - tags: the `tag` / `tags` attributes (marked regions)
// - diagnostics: warnings collected during resolution
// - resolver: ties fetch and selection together
// =============================================================================

mod diagnostics;
mod directive;
mod lines;
mod resolver;
mod syntax;
mod tags;

pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
pub use directive::{handles, parse_attrlist, Directive, RAW_CONTENT_PREFIX};
pub use lines::{parse_line_selection, select_lines, split_data_list};
pub use resolver::{resolve, ResolvedContent, Selection};
pub use syntax::{circumfix_for, target_extension, CircumfixSyntax};
pub use tags::extract_tags;
