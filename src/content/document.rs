//! Loaded content units.
//!
//! Content bodies are Markdown or MDX. MDX `import`/`export` lines are
//! dropped before parsing; the rest goes through `pulldown-cmark`.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use std::sync::Arc;

use super::key::ContentPath;

/// A renderable content unit. Cheap to clone; never mutated after load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    path: ContentPath,
    body: Arc<str>,
    title: Option<String>,
}

impl Content {
    /// Build a content unit from a Markdown/MDX body.
    pub fn from_markdown(path: ContentPath, body: impl Into<Arc<str>>) -> Self {
        let body = body.into();
        let title = first_heading(&strip_mdx_statements(&body));
        Self { path, body, title }
    }

    pub fn path(&self) -> &ContentPath {
        &self.path
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Text of the first heading, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Render the body as plain terminal text.
    pub fn plain_text(&self) -> String {
        render_plain(&strip_mdx_statements(&self.body))
    }
}

/// Drop top-level MDX `import`/`export` statements.
fn strip_mdx_statements(body: &str) -> String {
    body.lines()
        .filter(|line| !(line.starts_with("import ") || line.starts_with("export ")))
        .collect::<Vec<_>>()
        .join("\n")
}

fn first_heading(markdown: &str) -> Option<String> {
    let mut in_heading = false;
    let mut title = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Heading { .. }) => in_heading = true,
            Event::End(TagEnd::Heading(_)) => {
                let trimmed = title.trim();
                return (!trimmed.is_empty()).then(|| trimmed.to_string());
            }
            Event::Text(text) | Event::Code(text) if in_heading => title.push_str(&text),
            _ => {}
        }
    }
    None
}

fn render_plain(markdown: &str) -> String {
    let mut out = String::new();
    let mut list_depth = 0usize;

    for event in Parser::new_ext(markdown, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH) {
        match event {
            Event::Start(Tag::List(_)) => list_depth += 1,
            Event::End(TagEnd::List(_)) => {
                list_depth = list_depth.saturating_sub(1);
                if list_depth == 0 {
                    out.push('\n');
                }
            }
            Event::Start(Tag::Item) => {
                out.push_str(&"  ".repeat(list_depth.saturating_sub(1)));
                out.push_str("- ");
            }
            Event::End(TagEnd::Item) => {
                if !out.ends_with('\n') {
                    out.push('\n');
                }
            }
            Event::End(TagEnd::Heading(_)) | Event::End(TagEnd::Paragraph) => {
                // Paragraphs inside list items end with the item itself.
                if list_depth == 0 {
                    out.push_str("\n\n");
                }
            }
            Event::End(TagEnd::CodeBlock) => out.push('\n'),
            Event::End(TagEnd::TableRow) | Event::End(TagEnd::TableHead) => out.push('\n'),
            Event::End(TagEnd::TableCell) => out.push_str("  "),
            Event::Text(text) | Event::Code(text) => out.push_str(&text),
            Event::SoftBreak => out.push(' '),
            Event::HardBreak => out.push('\n'),
            _ => {}
        }
    }

    out.trim_end().to_string()
}
