// src/include/directive.rs
// =============================================================================
// The include directive handed to the resolver.
//
// A directive is a target URL plus a bag of string attributes, as written in
// a document:
//
//   include::https://raw.githubusercontent.com/o/r/main/file.rb[tags=a;b]
//
// This module also recognizes such lines, which is what the `expand` command
// uses. Only targets on raw.githubusercontent.com are claimed; everything
// else is left for other tools.
// =============================================================================

use std::collections::BTreeMap;

/// Prefix of every target this resolver handles
pub const RAW_CONTENT_PREFIX: &str = "https://raw.githubusercontent.com";

/// Returns true when a target belongs to this resolver
pub fn handles(target: &str) -> bool {
    target.starts_with(RAW_CONTENT_PREFIX)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directive {
    pub target: String,
    pub attributes: BTreeMap<String, String>,
}

impl Directive {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Builder-style helper, mostly for tests and the CLI
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    // Returns an attribute value, treating "" the same as a missing attribute
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    // Parses a document line like `include::<target>[<attrs>]`
    //
    // Returns None when the line isn't an include directive at all. The
    // target can be anything; call `handles` to see if it's ours.
    pub fn parse_line(line: &str) -> Option<Directive> {
        let rest = line.trim_end().strip_prefix("include::")?;
        let open = rest.find('[')?;
        let attrlist = rest[open + 1..].strip_suffix(']')?;
        let target = &rest[..open];

        if target.is_empty() || target.contains(char::is_whitespace) {
            return None;
        }

        Some(Directive {
            target: target.to_string(),
            attributes: parse_attrlist(attrlist),
        })
    }
}

// Parses `lines=1;3..4, tags="a;b"` into name/value pairs
//
// Commas separate attributes unless they are inside double quotes. Values
// are trimmed and their surrounding quotes removed. Entries without `=`
// (positional attributes) are ignored since the resolver has no use for them.
pub fn parse_attrlist(attrlist: &str) -> BTreeMap<String, String> {
    let mut attributes = BTreeMap::new();

    for entry in split_outside_quotes(attrlist) {
        let Some((name, value)) = entry.split_once('=') else {
            continue;
        };
        let name = name.trim();
        if name.is_empty() {
            continue;
        }

        let value = value.trim();
        let value = value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .unwrap_or(value);

        attributes.insert(name.to_string(), value.to_string());
    }

    attributes
}

fn split_outside_quotes(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    for (i, c) in text.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                parts.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGET: &str =
        "https://raw.githubusercontent.com/asciidoctor/asciidoctor/master/test/fixtures/include-file.asciidoc";

    #[test]
    fn test_handles_raw_github_only() {
        assert!(handles(TARGET));
        assert!(!handles("https://github.com/rust-lang/rust"));
        assert!(!handles("fixtures/include-file.asciidoc"));
    }

    #[test]
    fn test_parse_plain_directive() {
        let line = format!("include::{}[]", TARGET);
        let directive = Directive::parse_line(&line).unwrap();
        assert_eq!(directive.target, TARGET);
        assert!(directive.attributes.is_empty());
    }

    #[test]
    fn test_parse_lines_and_tags() {
        let line = format!("include::{}[lines=1, tags=snippetA;snippetB]", TARGET);
        let directive = Directive::parse_line(&line).unwrap();
        assert_eq!(directive.attribute("lines"), Some("1"));
        assert_eq!(directive.attribute("tags"), Some("snippetA;snippetB"));
    }

    #[test]
    fn test_parse_quoted_value_keeps_commas() {
        let line = format!("include::{}[lines=\"1, 3..4 , 6 .. -1\"]", TARGET);
        let directive = Directive::parse_line(&line).unwrap();
        assert_eq!(directive.attribute("lines"), Some("1, 3..4 , 6 .. -1"));
    }

    #[test]
    fn test_empty_value_reads_as_absent() {
        let line = format!("include::{}[lines=]", TARGET);
        let directive = Directive::parse_line(&line).unwrap();
        assert!(directive.attributes.contains_key("lines"));
        assert_eq!(directive.attribute("lines"), None);
    }

    #[test]
    fn test_positional_attributes_are_ignored() {
        let attrs = parse_attrlist("source, tag=main");
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs["tag"], "main");
    }

    #[test]
    fn test_non_directive_lines() {
        assert!(Directive::parse_line("plain text").is_none());
        assert!(Directive::parse_line("include::[]").is_none());
        assert!(Directive::parse_line("include::file.adoc").is_none());
        assert!(Directive::parse_line(" include::file.adoc[]").is_none());
    }
}
