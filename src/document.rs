use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static TITLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<h1>(.*?)</h1>").unwrap());
static DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@@\n?(.*?)\n?@@").unwrap());
static EMPTY_P: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<p>\s*</p>").unwrap());

/// The JSON record written for every converted file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub title: String,
    pub description: String,
    pub body: String,
}

impl Document {
    /// Split rendered HTML into title, description and remaining body.
    ///
    /// Title and description are both located in the untouched HTML; then the
    /// first occurrence of each matched block is cut out of the body.
    pub fn from_html(html: &str) -> Self {
        let (title_block, title) = first_capture(&TITLE, html);
        let (description_block, description) = first_capture(&DESCRIPTION, html);

        let body = remove_first(html, title_block);
        let body = remove_first(&body, description_block);
        // only the first empty paragraph goes
        let body = EMPTY_P.replace(&body, "");
        let body = body.trim_matches('\n').to_string();

        Self {
            title: title.to_string(),
            description: description.to_string(),
            body,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Whole match and first group, both empty when `re` does not match.
fn first_capture<'h>(re: &Regex, html: &'h str) -> (&'h str, &'h str) {
    match re.captures(html) {
        Some(caps) => (
            caps.get(0).map_or("", |m| m.as_str()),
            caps.get(1).map_or("", |m| m.as_str()),
        ),
        None => ("", ""),
    }
}

fn remove_first(html: &str, block: &str) -> String {
    if block.is_empty() {
        html.to_string()
    } else {
        html.replacen(block, "", 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_title_and_description() {
        let doc = Document::from_html("<h1>Title</h1>\n<p>@@\nDesc\n@@\nBody text</p>\n");
        assert_eq!(doc.title, "Title");
        assert_eq!(doc.description, "Desc");
        assert_eq!(doc.body, "<p>\nBody text</p>");
    }

    #[test]
    fn description_in_its_own_paragraph_leaves_no_empty_tag() {
        let doc = Document::from_html("<h1>T</h1>\n<p>@@ Short @@</p>\n<p>Body</p>\n");
        assert_eq!(doc.description, " Short ");
        assert_eq!(doc.body, "<p>Body</p>");
    }

    #[test]
    fn without_markers_body_is_trimmed_html() {
        let doc = Document::from_html("\n<h2>Sub</h2>\n<p>Text</p>\n\n");
        assert_eq!(doc.title, "");
        assert_eq!(doc.description, "");
        assert_eq!(doc.body, "<h2>Sub</h2>\n<p>Text</p>");
    }

    #[test]
    fn only_first_h1_is_taken() {
        let doc = Document::from_html("<h1>One</h1>\n<h1>Two</h1>\n");
        assert_eq!(doc.title, "One");
        assert_eq!(doc.body, "<h1>Two</h1>");
    }

    #[test]
    fn only_first_empty_paragraph_is_removed() {
        let doc = Document::from_html("<p> </p>\n<p>x</p>\n<p>\n</p>");
        assert_eq!(doc.body, "<p>x</p>\n<p>\n</p>");
    }

    #[test]
    fn single_marker_is_not_a_description() {
        let doc = Document::from_html("<p>@@ dangling</p>\n");
        assert_eq!(doc.description, "");
        assert_eq!(doc.body, "<p>@@ dangling</p>");
    }

    #[test]
    fn json_keeps_field_order() {
        let doc = Document {
            title: "T".into(),
            description: "D".into(),
            body: "<p>\"q\"</p>".into(),
        };
        assert_eq!(
            doc.to_json().unwrap(),
            r#"{"title":"T","description":"D","body":"<p>\"q\"</p>"}"#
        );
    }
}
