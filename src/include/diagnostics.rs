// src/include/diagnostics.rs
// =============================================================================
// Warnings produced while resolving an include directive.
//
// Nothing in the resolver fails hard: a missing tag or a failed download is
// turned into a Diagnostic and resolution carries on. Callers get the list
// back next to the resolved lines, so tests can assert on it directly and the
// CLI can decide what to print.
//
// Every diagnostic is also forwarded to `tracing`, which is how warnings
// reach stderr when the binary runs.
// =============================================================================

use serde::Serialize;

// What went wrong, in machine-readable form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The remote file could not be retrieved
    FetchFailed,
    /// Neither marker of a tag was found
    TagNotFound,
    /// Only the end:: marker of a tag was found
    TagOnlyEndFound,
    /// Only the tag:: marker of a tag was found
    TagNotClosed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// The include target this diagnostic is about
    pub target: String,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(kind: DiagnosticKind, target: &str, message: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.to_string(),
            message: message.into(),
        }
    }
}

// Collector passed through one resolution
//
// It is owned by the call that created it, so concurrent resolutions never
// share one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic and logs it
    pub fn push(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(
            kind = ?diagnostic.kind,
            uri = %diagnostic.target,
            "{}",
            diagnostic.message
        );
        self.items.push(diagnostic);
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.items.extend(other.items);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Counts diagnostics of one kind
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.items.iter().filter(|d| d.kind == kind).count()
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
