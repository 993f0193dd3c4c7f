use std::collections::HashMap;
use std::sync::Mutex;

use github_include::github::{Fetch, FetchError};
use github_include::include::{resolve, DiagnosticKind, Directive, Selection};

const BASE: &str = "https://raw.githubusercontent.com/asciidoctor/asciidoctor/master/test/fixtures";

const INCLUDE_FILE: &str = "first line of included content
second line of included content
third line of included content
fourth line of included content
fifth line of included content
sixth line of included content
seventh line of included content
eighth line of included content
last line of included content
";

const INCLUDE_XML: &str = "<root>
  <!-- tag::snippet[] -->
  <snippet>content</snippet>
  <!-- end::snippet[] -->
</root>
";

// In-memory files; records the token of every request
struct Files {
    files: HashMap<String, &'static str>,
    tokens: Mutex<Vec<Option<String>>>,
}

impl Files {
    fn new() -> Self {
        let mut files = HashMap::new();
        files.insert(format!("{}/include-file.asciidoc", BASE), INCLUDE_FILE);
        files.insert(format!("{}/include-file.xml", BASE), INCLUDE_XML);
        Files {
            files,
            tokens: Mutex::new(Vec::new()),
        }
    }
}

impl Fetch for Files {
    async fn fetch_text(&self, url: &str, token: Option<&str>) -> Result<String, FetchError> {
        self.tokens.lock().unwrap().push(token.map(String::from));
        match self.files.get(url) {
            Some(text) => Ok(text.to_string()),
            None => Err(FetchError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}

fn target(name: &str) -> String {
    format!("{}/{}", BASE, name)
}

#[tokio::test]
async fn quoted_line_selection() {
    let directive = Directive::new(target("include-file.asciidoc"))
        .with_attribute("lines", "1, 3..4 , 6 .. -1");
    let (content, diagnostics) = resolve(&Files::new(), &directive, None).await;

    assert!(diagnostics.is_empty());
    assert_eq!(content.lines.len(), 7);
    assert!(!content.lines.iter().any(|l| l.starts_with("second")));
    assert!(!content.lines.iter().any(|l| l.starts_with("fifth")));
    assert_eq!(content.lines.last().unwrap(), "last line of included content");
}

#[tokio::test]
async fn circumfix_tag_keeps_indentation() {
    let directive = Directive::new(target("include-file.xml")).with_attribute("tag", "snippet");
    let (content, _) = resolve(&Files::new(), &directive, None).await;
    assert_eq!(content.selection, Selection::Tags);
    assert_eq!(content.lines, vec!["  <snippet>content</snippet>"]);
}

#[tokio::test]
async fn missing_file_is_a_single_warning_line() {
    let missing = target("no-such-file.adoc");
    let directive = Directive::new(missing.clone());
    let (content, diagnostics) = resolve(&Files::new(), &directive, Some("tok")).await;

    assert_eq!(content.selection, Selection::Failed);
    assert_eq!(
        content.lines,
        vec![format!("WARNING: Failed to retrieve GitHub URI link:{}[]", missing)]
    );

    let warning = diagnostics.iter().next().expect("a warning");
    assert_eq!(warning.kind, DiagnosticKind::FetchFailed);
    assert!(warning.message.contains(&missing));
    assert!(warning.message.contains("github-access-token"));
}

#[tokio::test]
async fn token_reaches_the_fetcher() {
    let files = Files::new();
    let directive = Directive::new(target("include-file.asciidoc"));
    resolve(&files, &directive, Some("abc")).await;
    resolve(&files, &directive, None).await;

    let tokens = files.tokens.lock().unwrap().clone();
    assert_eq!(tokens, vec![Some("abc".to_string()), None]);
}

#[tokio::test]
async fn concurrent_resolutions_do_not_interfere() {
    let files = Files::new();
    let by_lines = Directive::new(target("include-file.asciidoc")).with_attribute("lines", "2");
    let by_tag = Directive::new(target("include-file.xml")).with_attribute("tag", "snippet");

    let ((a, _), (b, _)) = tokio::join!(
        resolve(&files, &by_lines, None),
        resolve(&files, &by_tag, None)
    );

    assert_eq!(a.lines, vec!["second line of included content"]);
    assert_eq!(b.lines, vec!["  <snippet>content</snippet>"]);
}
