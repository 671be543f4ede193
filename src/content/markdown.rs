//! Markdown rendering with syntax highlighting and heading anchors

use anyhow::Result;
use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use serde::Serialize;
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::helpers::html_escape;

/// A heading found while rendering, used for the table of contents
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heading {
    pub level: usize,
    pub id: String,
    pub text: String,
}

/// Rendered post body
#[derive(Debug, Clone, Default)]
pub struct RenderedMarkdown {
    pub html: String,
    pub headings: Vec<Heading>,
    /// Words of prose, code blocks excluded
    pub word_count: usize,
}

/// Markdown renderer with syntax highlighting
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
    line_numbers: bool,
}

struct OpenHeading {
    level: usize,
    id: Option<String>,
    text: String,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self::with_options("base16-ocean.dark", false)
    }

    /// Create with custom settings
    pub fn with_options(theme: &str, line_numbers: bool) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: theme.to_string(),
            line_numbers,
        }
    }

    /// Render markdown to HTML, collecting headings and a word count
    pub fn render(&self, markdown: &str) -> Result<RenderedMarkdown> {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_HEADING_ATTRIBUTES;
        let parser = Parser::new_ext(markdown, options);

        let mut events: Vec<Event> = Vec::new();
        let mut headings = Vec::new();
        let mut word_count = 0;

        let mut code_block: Option<(Option<String>, String)> = None;
        let mut heading: Option<OpenHeading> = None;

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.to_string()),
                        _ => None,
                    };
                    code_block = Some((lang, String::new()));
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some((lang, code)) = code_block.take() {
                        let highlighted = self.highlight_code(&code, lang.as_deref());
                        events.push(Event::Html(CowStr::from(highlighted)));
                    }
                }
                Event::Text(text) if code_block.is_some() => {
                    if let Some((_, code)) = code_block.as_mut() {
                        code.push_str(&text);
                    }
                }
                Event::Start(Tag::Heading { level, id, .. }) => {
                    heading = Some(OpenHeading {
                        level: heading_level(level),
                        id: id.map(|id| id.to_string()),
                        text: String::new(),
                    });
                }
                Event::End(TagEnd::Heading(_)) => {
                    if let Some(open) = heading.take() {
                        let text = open.text.trim().to_string();
                        let id = open.id.unwrap_or_else(|| slug::slugify(&text));
                        word_count += count_words(&text);
                        events.push(Event::Html(CowStr::from(format!(
                            r#"<h{level} id="{id}">{text}</h{level}>"#,
                            level = open.level,
                            id = id,
                            text = html_escape(&text),
                        ))));
                        headings.push(Heading {
                            level: open.level,
                            id,
                            text,
                        });
                    }
                }
                Event::Text(text) | Event::Code(text) if heading.is_some() => {
                    if let Some(open) = heading.as_mut() {
                        open.text.push_str(&text);
                    }
                }
                _ if heading.is_some() => {}
                Event::Text(text) => {
                    word_count += count_words(&text);
                    events.push(Event::Text(text));
                }
                other => events.push(other),
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());

        Ok(RenderedMarkdown {
            html: html_output,
            headings,
            word_count,
        })
    }

    /// Highlight a code block
    fn highlight_code(&self, code: &str, lang: Option<&str>) -> String {
        let lang = lang.unwrap_or("text");

        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let Some(theme) = self
            .theme_set
            .themes
            .get(&self.theme_name)
            .or_else(|| self.theme_set.themes.values().next())
        else {
            return plain_code_block(code, lang);
        };

        match highlighted_html_for_string(code, &self.syntax_set, syntax, theme) {
            Ok(highlighted) if self.line_numbers => add_line_numbers(&highlighted, lang),
            Ok(highlighted) => format!(
                r#"<figure class="highlight {}">{}</figure>"#,
                lang, highlighted
            ),
            Err(e) => {
                tracing::debug!("Highlighting failed for {}: {}", lang, e);
                plain_code_block(code, lang)
            }
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn heading_level(level: HeadingLevel) -> usize {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

fn count_words(text: &str) -> usize {
    text.split_whitespace()
        .filter(|w| w.chars().any(|c| c.is_alphanumeric()))
        .count()
}

fn plain_code_block(code: &str, lang: &str) -> String {
    format!(
        r#"<pre><code class="language-{}">{}</code></pre>"#,
        lang,
        html_escape(code)
    )
}

/// Add line numbers to highlighted code
fn add_line_numbers(code: &str, lang: &str) -> String {
    let lines: Vec<&str> = code.lines().collect();

    let gutter = (1..=lines.len())
        .map(|n| format!(r#"<span class="line-number">{}</span>"#, n))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<figure class="highlight {}"><table><tr><td class="gutter"><pre>{}</pre></td><td class="code">{}</td></tr></table></figure>"#,
        lang,
        gutter,
        lines.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        let renderer = MarkdownRenderer::new();
        let rendered = renderer.render("Hello *World*\n\nThis is a test.").unwrap();
        assert!(rendered.html.contains("<em>World</em>"));
        assert!(rendered.html.contains("<p>This is a test.</p>"));
        assert_eq!(rendered.word_count, 6);
    }

    #[test]
    fn test_heading_attribute_id() {
        let renderer = MarkdownRenderer::new();
        let rendered = renderer
            .render("## The Impact of AI {#personalization}\n\nBody.")
            .unwrap();
        assert!(rendered
            .html
            .contains(r#"<h2 id="personalization">The Impact of AI</h2>"#));
        assert_eq!(rendered.headings[0].id, "personalization");
        assert_eq!(rendered.headings[0].text, "The Impact of AI");
    }

    #[test]
    fn test_heading_without_attribute_gets_slug() {
        let renderer = MarkdownRenderer::new();
        let rendered = renderer.render("### Getting Started\n").unwrap();
        assert_eq!(rendered.headings[0].level, 3);
        assert_eq!(rendered.headings[0].id, "getting-started");
    }

    #[test]
    fn test_render_code_block() {
        let renderer = MarkdownRenderer::new();
        let rendered = renderer
            .render("```rust\nfn main() {}\n```\n\nafter")
            .unwrap();
        assert!(rendered.html.contains("highlight rust"));
        // Code is not prose
        assert_eq!(rendered.word_count, 1);
    }

    #[test]
    fn test_line_numbers() {
        let renderer = MarkdownRenderer::with_options("base16-ocean.dark", true);
        let rendered = renderer.render("```\na\nb\n```").unwrap();
        assert!(rendered.html.contains(r#"<span class="line-number">2</span>"#));
    }
}
