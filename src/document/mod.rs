// src/document/mod.rs
// =============================================================================
// Whole-document processing: finds include directives in a text and replaces
// them with the resolved content.
// =============================================================================

mod expand;

pub use expand::{expand_document, Expansion};
