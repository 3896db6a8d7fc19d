//! Markdown to HTML rendering.
//!
//! Code blocks are handed to a [`Highlighter`] and emitted as raw HTML, all
//! other events go through `pulldown_cmark::html` untouched. Headings are
//! rendered as plain `<hN>` tags since heading attributes stay disabled.

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Options, Parser, Tag, escape::escape_html};
use syntect::{
    html::{ClassStyle, ClassedHTMLGenerator},
    parsing::{SyntaxReference, SyntaxSet},
    util::LinesWithEndings,
};

use crate::error::HighlightError;

/// Turns the contents of a code block into HTML.
pub trait Highlighter {
    /// `lang` is the first word of the fence info string, if any.
    fn highlight(&self, code: &str, lang: Option<&str>) -> Result<String, HighlightError>;
}

/// Escapes code without any highlighting.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn highlight(&self, code: &str, _lang: Option<&str>) -> Result<String, HighlightError> {
        let mut html = String::with_capacity(code.len());
        escape_html(&mut html, code)?;
        Ok(html)
    }
}

/// Class based highlighting backed by the default syntect syntaxes.
pub struct SyntectHighlighter {
    syntaxes: SyntaxSet,
}

impl SyntectHighlighter {
    pub fn new() -> Self {
        Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
        }
    }

    /// Fence language first, then first line detection, then plain text.
    fn detect(&self, code: &str, lang: Option<&str>) -> &SyntaxReference {
        lang.and_then(|lang| self.syntaxes.find_syntax_by_token(lang))
            .or_else(|| self.syntaxes.find_syntax_by_first_line(code))
            .unwrap_or_else(|| self.syntaxes.find_syntax_plain_text())
    }
}

impl Default for SyntectHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter for SyntectHighlighter {
    fn highlight(&self, code: &str, lang: Option<&str>) -> Result<String, HighlightError> {
        let syntax = self.detect(code, lang);
        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntaxes, ClassStyle::Spaced);
        for line in LinesWithEndings::from(code) {
            generator.parse_html_for_line_which_includes_newline(line)?;
        }
        Ok(generator.finalize())
    }
}

/// Markdown renderer with a pluggable code highlighter.
///
/// The fence language, when present, picks the syntax and becomes the
/// `language-<lang>` class; content based detection only applies without one.
pub struct Renderer {
    options: Options,
    highlighter: Box<dyn Highlighter>,
}

impl Renderer {
    pub fn new(highlighter: Box<dyn Highlighter>) -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        Self {
            options,
            highlighter,
        }
    }

    pub fn render(&self, markdown: &str) -> Result<String, HighlightError> {
        let mut events = Vec::new();
        // language and collected text of the code block being read
        let mut code: Option<(Option<String>, String)> = None;

        for event in Parser::new_ext(markdown, self.options) {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(info) => {
                            info.split_whitespace().next().map(str::to_owned)
                        }
                        CodeBlockKind::Indented => None,
                    };
                    code = Some((lang, String::new()));
                }
                Event::End(Tag::CodeBlock(_)) => {
                    if let Some((lang, text)) = code.take() {
                        events.push(Event::Html(self.code_block(&text, lang.as_deref())?));
                    }
                }
                Event::Text(text) if code.is_some() => {
                    if let Some((_, buf)) = code.as_mut() {
                        buf.push_str(&text);
                    }
                }
                other => events.push(other),
            }
        }

        let mut html = String::new();
        pulldown_cmark::html::push_html(&mut html, events.into_iter());
        Ok(html)
    }

    fn code_block(&self, text: &str, lang: Option<&str>) -> Result<CowStr<'static>, HighlightError> {
        let body = self.highlighter.highlight(text, lang)?;
        let mut html = String::from("<pre><code");
        if let Some(lang) = lang {
            html.push_str(" class=\"language-");
            escape_html(&mut html, lang)?;
            html.push('"');
        }
        html.push('>');
        html.push_str(&body);
        html.push_str("</code></pre>\n");
        Ok(html.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> Renderer {
        Renderer::new(Box::new(PlainHighlighter))
    }

    /// Wraps code so tests can see what reached the highlighter.
    struct Tagging;

    impl Highlighter for Tagging {
        fn highlight(&self, code: &str, lang: Option<&str>) -> Result<String, HighlightError> {
            Ok(format!("[{}]{}", lang.unwrap_or("-"), code.trim_end()))
        }
    }

    #[test]
    fn headings_have_no_ids() {
        let html = plain().render("# Title\n\n## Sub\n").unwrap();
        assert_eq!(html, "<h1>Title</h1>\n<h2>Sub</h2>\n");
    }

    #[test]
    fn fenced_code_goes_through_highlighter() {
        let renderer = Renderer::new(Box::new(Tagging));
        let html = renderer.render("```rust\nfn main() {}\n```\n").unwrap();
        assert_eq!(
            html,
            "<pre><code class=\"language-rust\">[rust]fn main() {}</code></pre>\n"
        );
    }

    #[test]
    fn indented_code_has_no_language() {
        let renderer = Renderer::new(Box::new(Tagging));
        let html = renderer.render("    let x = 1;\n").unwrap();
        assert_eq!(html, "<pre><code>[-]let x = 1;</code></pre>\n");
    }

    #[test]
    fn plain_highlighter_escapes() {
        let html = plain().render("```\n<b>&</b>\n```\n").unwrap();
        assert_eq!(html, "<pre><code>&lt;b&gt;&amp;&lt;/b&gt;\n</code></pre>\n");
    }

    #[test]
    fn gfm_tables_and_strikethrough() {
        let html = plain().render("~~old~~\n\n| a |\n|---|\n| 1 |\n").unwrap();
        assert!(html.contains("<del>old</del>"));
        assert!(html.contains("<table>"));
    }

    #[test]
    fn syntect_marks_up_known_language() {
        let highlighter = SyntectHighlighter::new();
        let html = highlighter.highlight("fn main() {}\n", Some("rust")).unwrap();
        assert!(html.contains("<span class=\""));
        assert!(html.contains("main"));
    }

    #[test]
    fn syntect_detects_shebang() {
        let highlighter = SyntectHighlighter::new();
        let html = highlighter.highlight("#!/bin/bash\necho hi\n", None).unwrap();
        assert!(html.contains("source shell"));
    }

    #[test]
    fn unlabelled_fence_uses_first_line_detection() {
        let renderer = Renderer::new(Box::new(SyntectHighlighter::new()));
        let html = renderer.render("```\n#!/bin/bash\necho hi\n```\n").unwrap();
        assert!(html.starts_with("<pre><code>"));
        assert!(html.contains("<span class=\"source shell"));
    }

    #[test]
    fn syntect_falls_back_to_plain_text() {
        let highlighter = SyntectHighlighter::new();
        let html = highlighter.highlight("a < b\n", Some("klingon")).unwrap();
        assert!(html.contains("a &lt; b"));
    }
}
