// src/include/syntax.rs
// =============================================================================
// Comment syntax table for tag markers.
//
// Most languages use a line comment (`//`, `#`, `--`) so a marker line simply
// ends with `tag::name[]`. Languages with circumfix comments need the closing
// token after the marker, e.g. `<!-- tag::name[] -->` in XML. This table maps
// a file extension (with its leading dot) to those tokens.
//
// The map is built the first time it is used and never mutated afterwards,
// so every resolution can read it without locking.
// =============================================================================

use once_cell::sync::Lazy;
use std::collections::HashMap;
use url::Url;

/// Opening and closing tokens of a circumfix comment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircumfixSyntax {
    pub prefix: &'static str,
    pub suffix: &'static str,
}

static CIRCUMFIX_COMMENTS: Lazy<HashMap<&'static str, CircumfixSyntax>> = Lazy::new(|| {
    let groups: [(&str, &str, &[&str]); 4] = [
        ("/*", "*/", &[".css"]),
        ("(*", "*)", &[".ml", ".mli", ".nb"]),
        ("<!--", "-->", &[".html", ".xml"]),
        ("<%--", "--%>", &[".asp", ".jsp"]),
    ];

    let mut map = HashMap::new();
    for (prefix, suffix, extensions) in groups {
        for ext in extensions {
            map.insert(*ext, CircumfixSyntax { prefix, suffix });
        }
    }
    map
});

/// Looks up the circumfix syntax for an extension such as ".xml"
pub fn circumfix_for(extension: &str) -> Option<&'static CircumfixSyntax> {
    CIRCUMFIX_COMMENTS.get(extension)
}

// Returns the extension of the file a target points at, including the dot
//
// Reads the URL path when the target parses as a URL, so a query string like
// `?token=...` never ends up in the extension. Only the last path segment is
// considered. Returns "" when that segment has no dot.
pub fn target_extension(target: &str) -> String {
    let path = match Url::parse(target) {
        Ok(url) => url.path().to_string(),
        Err(_) => target.to_string(),
    };
    let file_name = path.rsplit('/').next().unwrap_or("");

    match file_name.rfind('.') {
        Some(dot) => file_name[dot..].to_string(),
        None => String::new(),
    }
}
