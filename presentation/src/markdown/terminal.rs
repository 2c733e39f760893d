//! Markdown rendering for the terminal.
//!
//! Walks the markdown event stream and produces ANSI-styled text.
//! Links go through the same dispatch as HTML export: internal routes
//! show cyan, external URLs show with the address in parentheses, and
//! hrefless links collapse to their text.

use crate::markdown::links::{LinkDisposition, classify_link};
use colored::Colorize;
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

const CODE_INDENT: &str = "    ";

enum ListKind {
    Bullet,
    Numbered(u64),
}

/// Renders markdown replies as styled terminal text.
pub struct TerminalRenderer {
    color: bool,
}

struct RenderState {
    out: String,
    lists: Vec<ListKind>,
    link: Option<(LinkDisposition, String)>,
    image_alt: Option<String>,
    in_code_block: bool,
    in_heading: bool,
    strong: u32,
    emphasis: u32,
}

impl RenderState {
    fn new() -> Self {
        Self {
            out: String::new(),
            lists: Vec::new(),
            link: None,
            image_alt: None,
            in_code_block: false,
            in_heading: false,
            strong: 0,
            emphasis: 0,
        }
    }

    fn ensure_newline(&mut self) {
        if !self.out.is_empty() && !self.out.ends_with('\n') {
            self.out.push('\n');
        }
    }

    fn ensure_blank_line(&mut self) {
        self.ensure_newline();
        if !self.out.is_empty() && !self.out.ends_with("\n\n") {
            self.out.push('\n');
        }
    }
}

impl TerminalRenderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Render markdown to terminal text, ending with a single newline.
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(
            markdown,
            Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES,
        );
        let mut state = RenderState::new();

        for event in parser {
            self.handle(event, &mut state);
        }

        let mut out = state.out.trim_end().to_string();
        out.push('\n');
        out
    }

    fn handle(&self, event: Event, state: &mut RenderState) {
        match event {
            Event::Start(Tag::Heading { .. }) => {
                state.ensure_blank_line();
                state.in_heading = true;
            }
            Event::End(TagEnd::Heading(_)) => {
                state.in_heading = false;
                state.ensure_blank_line();
            }
            Event::Start(Tag::Paragraph) => {}
            Event::End(TagEnd::Paragraph) => {
                if state.lists.is_empty() {
                    state.ensure_blank_line();
                } else {
                    state.ensure_newline();
                }
            }
            Event::Start(Tag::List(start)) => {
                if state.lists.is_empty() {
                    state.ensure_blank_line();
                } else {
                    state.ensure_newline();
                }
                state.lists.push(match start {
                    Some(n) => ListKind::Numbered(n),
                    None => ListKind::Bullet,
                });
            }
            Event::End(TagEnd::List(_)) => {
                state.lists.pop();
                if state.lists.is_empty() {
                    state.ensure_blank_line();
                }
            }
            Event::Start(Tag::Item) => {
                state.ensure_newline();
                let indent = "  ".repeat(state.lists.len().saturating_sub(1));
                let marker = match state.lists.last_mut() {
                    Some(ListKind::Numbered(n)) => {
                        let marker = format!("{}. ", n);
                        *n += 1;
                        marker
                    }
                    _ => "- ".to_string(),
                };
                state.out.push_str(&indent);
                state.out.push_str(&marker);
            }
            Event::End(TagEnd::Item) => {
                state.ensure_newline();
            }
            Event::Start(Tag::CodeBlock(_)) => {
                state.ensure_blank_line();
                state.in_code_block = true;
            }
            Event::End(TagEnd::CodeBlock) => {
                state.in_code_block = false;
                state.ensure_blank_line();
            }
            Event::Start(Tag::Emphasis) => state.emphasis += 1,
            Event::End(TagEnd::Emphasis) => state.emphasis = state.emphasis.saturating_sub(1),
            Event::Start(Tag::Strong) => state.strong += 1,
            Event::End(TagEnd::Strong) => state.strong = state.strong.saturating_sub(1),
            Event::Start(Tag::Link { dest_url, .. }) => {
                state.link = Some((classify_link(Some(dest_url.as_ref())), String::new()));
            }
            Event::End(TagEnd::Link) => {
                if let Some((disposition, text)) = state.link.take() {
                    self.write_link(state, disposition, &text);
                }
            }
            Event::Start(Tag::Image { .. }) => {
                state.image_alt = Some(String::new());
            }
            Event::End(TagEnd::Image) => {
                if let Some(alt) = state.image_alt.take() {
                    let label = format!("[image: {}]", alt);
                    let styled = self.paint(&label, |s| s.dimmed());
                    state.out.push_str(&styled);
                }
            }
            Event::Text(text) => self.write_text(state, &text),
            Event::Code(code) => {
                if let Some((_, buffer)) = &mut state.link {
                    buffer.push_str(&code);
                } else {
                    let styled = self.paint(&code, |s| s.yellow());
                    state.out.push_str(&styled);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some((_, buffer)) = &mut state.link {
                    buffer.push(' ');
                } else {
                    state.out.push('\n');
                }
            }
            Event::Rule => {
                state.ensure_blank_line();
                let rule = self.paint(&"-".repeat(40), |s| s.dimmed());
                state.out.push_str(&rule);
                state.ensure_blank_line();
            }
            Event::TaskListMarker(checked) => {
                state.out.push_str(if checked { "[x] " } else { "[ ] " });
            }
            Event::Html(text) | Event::InlineHtml(text) => {
                state.out.push_str(&text);
            }
            Event::Start(_) | Event::End(_) => {}
            _ => {}
        }
    }

    fn write_text(&self, state: &mut RenderState, text: &str) {
        if let Some((_, buffer)) = &mut state.link {
            buffer.push_str(text);
            return;
        }
        if let Some(alt) = &mut state.image_alt {
            alt.push_str(text);
            return;
        }
        if state.in_code_block {
            let indented: String = text
                .lines()
                .map(|line| format!("{}{}\n", CODE_INDENT, line))
                .collect();
            let styled = self.paint(indented.trim_end_matches('\n'), |s| s.dimmed());
            state.out.push_str(&styled);
            state.out.push('\n');
            return;
        }

        let styled = if state.in_heading {
            self.paint(text, |s| s.cyan().bold())
        } else if state.strong > 0 {
            self.paint(text, |s| s.bold())
        } else if state.emphasis > 0 {
            self.paint(text, |s| s.italic())
        } else {
            text.to_string()
        };
        state.out.push_str(&styled);
    }

    fn write_link(&self, state: &mut RenderState, disposition: LinkDisposition, text: &str) {
        match disposition {
            LinkDisposition::PlainText => state.out.push_str(text),
            LinkDisposition::Internal(path) => {
                let styled = self.paint(text, |s| s.cyan().underline());
                state.out.push_str(&styled);
                // The auto-linker emits the canonical number as the text,
                // so the route tail repeats it; skip the parenthetical then.
                if !path.ends_with(text) {
                    let suffix = self.paint(&format!(" ({})", path), |s| s.dimmed());
                    state.out.push_str(&suffix);
                }
            }
            LinkDisposition::External(href) => {
                let styled = self.paint(text, |s| s.blue().underline());
                state.out.push_str(&styled);
                if href != text {
                    let suffix = self.paint(&format!(" ({})", href), |s| s.dimmed());
                    state.out.push_str(&suffix);
                }
            }
        }
    }

    fn paint(
        &self,
        text: &str,
        style: impl FnOnce(colored::ColoredString) -> colored::ColoredString,
    ) -> String {
        if self.color {
            style(text.into()).to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(markdown: &str) -> String {
        TerminalRenderer::new(false).render(markdown)
    }

    #[test]
    fn heading_then_paragraph() {
        assert_eq!(render("# Title\n\nBody text."), "Title\n\nBody text.\n");
    }

    #[test]
    fn bullet_list() {
        assert_eq!(render("- first\n- second"), "- first\n- second\n");
    }

    #[test]
    fn numbered_list_counts_up() {
        assert_eq!(render("1. one\n1. two\n1. three"), "1. one\n2. two\n3. three\n");
    }

    #[test]
    fn nested_list_indents() {
        let out = render("- outer\n  - inner");
        assert_eq!(out, "- outer\n  - inner\n");
    }

    #[test]
    fn internal_link_with_matching_tail_shows_text_only() {
        assert_eq!(render("[S01528](/bills/S01528)"), "S01528\n");
    }

    #[test]
    fn internal_link_with_different_text_shows_route() {
        assert_eq!(
            render("[the bill](/bills/S01528)"),
            "the bill (/bills/S01528)\n"
        );
    }

    #[test]
    fn external_link_shows_url() {
        assert_eq!(
            render("[docs](https://example.com/page)"),
            "docs (https://example.com/page)\n"
        );
    }

    #[test]
    fn hrefless_link_collapses_to_text() {
        assert_eq!(render("[just text]()"), "just text\n");
    }

    #[test]
    fn code_block_is_indented() {
        assert_eq!(render("```\nlet x = 1;\n```"), "    let x = 1;\n");
    }

    #[test]
    fn inline_code_is_kept() {
        assert_eq!(render("run `cargo test` now"), "run cargo test now\n");
    }
}
