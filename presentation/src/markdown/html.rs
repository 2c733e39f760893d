//! Markdown to HTML rendering for transcript export.
//!
//! Replies are rendered with the same link dispatch as the terminal:
//! links without an href collapse to their text, internal routes become
//! ordinary anchors, and external URLs open in a new tab with
//! `rel="noopener noreferrer"`.

use crate::markdown::links::{LinkDisposition, classify_link};
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use statehouse_domain::ChatTurn;

const PAGE_STYLE: &str = r#"
body { max-width: 46rem; margin: 2rem auto; padding: 0 1rem;
       font-family: Georgia, serif; line-height: 1.5; color: #1a1a2e; }
h1 { font-size: 1.4rem; border-bottom: 2px solid #1a1a2e; padding-bottom: .3rem; }
.turn { margin: 2rem 0; }
.prompt { font-weight: bold; }
.prompt .who { color: #8a4600; }
.meta { color: #777; font-size: .8rem; }
.reply pre { background: #f4f4f0; padding: .8rem; overflow-x: auto; }
.reply code { background: #f4f4f0; padding: 0 .2rem; }
a { color: #1d5c87; }
"#;

fn parser_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES
}

/// Render one markdown reply to an HTML fragment.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, parser_options());
    let mut stack: Vec<LinkDisposition> = Vec::new();

    let events = parser.filter_map(|event| match event {
        Event::Start(Tag::Link { dest_url, .. }) => {
            let disposition = classify_link(Some(dest_url.as_ref()));
            let replacement = match &disposition {
                LinkDisposition::PlainText => None,
                LinkDisposition::Internal(path) => {
                    Some(format!("<a href=\"{}\">", escape_attr(path)))
                }
                LinkDisposition::External(href) => Some(format!(
                    "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">",
                    escape_attr(href)
                )),
            };
            stack.push(disposition);
            replacement.map(|anchor| Event::Html(anchor.into()))
        }
        Event::End(TagEnd::Link) => match stack.pop() {
            Some(LinkDisposition::PlainText) | None => None,
            Some(_) => Some(Event::Html("</a>".into())),
        },
        other => Some(other),
    });

    let mut html = String::with_capacity(markdown.len() * 2);
    pulldown_cmark::html::push_html(&mut html, events);
    html
}

/// Render a whole session as a standalone HTML page.
pub fn render_transcript(turns: &[ChatTurn], title: &str) -> String {
    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str(&format!("<title>{}</title>\n", escape_text(title)));
    page.push_str("<style>");
    page.push_str(PAGE_STYLE);
    page.push_str("</style>\n</head>\n<body>\n");
    page.push_str(&format!("<h1>{}</h1>\n", escape_text(title)));
    page.push_str(&format!(
        "<p class=\"meta\">Exported {}</p>\n",
        chrono::Utc::now().format("%Y-%m-%d %H:%M UTC")
    ));

    for turn in turns {
        page.push_str("<section class=\"turn\">\n");
        page.push_str(&format!(
            "<p class=\"prompt\"><span class=\"who\">You:</span> {}</p>\n",
            escape_text(&turn.prompt)
        ));
        page.push_str("<div class=\"reply\">\n");
        page.push_str(&markdown_to_html(&turn.reply));
        page.push_str("</div>\n");
        page.push_str(&format!(
            "<p class=\"meta\">{} &middot; {}</p>\n",
            escape_text(&turn.model),
            turn.asked_at.format("%Y-%m-%d %H:%M UTC")
        ));
        page.push_str("</section>\n");
    }

    page.push_str("</body>\n</html>\n");
    page
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_links_open_in_a_new_tab() {
        let html = markdown_to_html("see [the site](https://example.com/page)");
        assert!(html.contains(
            "<a href=\"https://example.com/page\" target=\"_blank\" rel=\"noopener noreferrer\">"
        ));
        assert!(html.contains("the site</a>"));
    }

    #[test]
    fn internal_routes_are_plain_anchors() {
        let html = markdown_to_html("see [S01528](/bills/S01528)");
        assert!(html.contains("<a href=\"/bills/S01528\">S01528</a>"));
        assert!(!html.contains("target"));
    }

    #[test]
    fn recognized_bill_pages_are_rewritten() {
        let html =
            markdown_to_html("[S1528](https://www.nysenate.gov/legislation/bills/2025/S1528)");
        assert!(html.contains("<a href=\"/bills/S01528\">S1528</a>"));
    }

    #[test]
    fn empty_href_renders_text_only() {
        let html = markdown_to_html("see [just text]()");
        assert!(!html.contains("<a"));
        assert!(html.contains("just text"));
    }

    #[test]
    fn transcript_page_escapes_prompts() {
        let turns = vec![ChatTurn::new("m", "<script>alert(1)</script>", "fine")];
        let page = render_transcript(&turns, "Session");
        assert!(page.contains("&lt;script&gt;"));
        assert!(!page.contains("<script>alert"));
        assert!(page.contains("<title>Session</title>"));
    }

    #[test]
    fn transcript_page_renders_reply_markdown() {
        let turns = vec![ChatTurn::new("m", "q", "**bold** and [S01528](/bills/S01528)")];
        let page = render_transcript(&turns, "Session");
        assert!(page.contains("<strong>bold</strong>"));
        assert!(page.contains("<a href=\"/bills/S01528\">"));
    }
}
