//! HTML stripping for memo content.
//!
//! Sponsor memos come back as markup fragments. We walk the parsed tree,
//! keep the text, turn block boundaries into line breaks, and squeeze
//! the leftover whitespace.

use scraper::{ElementRef, Html, Node};

const SKIP_TAGS: [&str; 3] = ["script", "style", "noscript"];
const BREAK_TAGS: [&str; 7] = ["p", "div", "li", "br", "table", "tr", "ul"];

/// Strip markup from an HTML fragment, preserving paragraph breaks.
pub fn html_to_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut raw = String::with_capacity(html.len());
    collect_text(fragment.root_element(), &mut raw);
    squeeze_whitespace(&raw)
}

fn collect_text(element: ElementRef, out: &mut String) {
    let name = element.value().name();
    if SKIP_TAGS.contains(&name) {
        return;
    }
    let breaks = BREAK_TAGS.contains(&name);
    if breaks && !out.ends_with('\n') {
        out.push('\n');
    }
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_text(child_element, out);
                }
            }
            _ => {}
        }
    }
    if breaks && !out.ends_with('\n') {
        out.push('\n');
    }
}

/// Collapse intra-line whitespace and cap blank runs at one line.
fn squeeze_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut blank_run = 0usize;
    for line in text.lines() {
        let collapsed = line.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        out.push_str(&collapsed);
        out.push('\n');
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_keeps_text() {
        let text = html_to_text("<p>PURPOSE:</p><p>To cap costs.</p>");
        assert!(text.contains("PURPOSE:"));
        assert!(text.contains("To cap costs."));
        assert!(!text.contains('<'));
    }

    #[test]
    fn block_elements_become_line_breaks() {
        let text = html_to_text("<div>first</div><div>second</div>");
        assert_eq!(text, "first\nsecond");
    }

    #[test]
    fn entities_are_decoded() {
        let text = html_to_text("costs &amp; savings");
        assert_eq!(text, "costs & savings");
    }

    #[test]
    fn scripts_and_styles_are_dropped() {
        let text =
            html_to_text("<style>p { color: red }</style><p>kept</p><script>alert(1)</script>");
        assert_eq!(text, "kept");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(html_to_text("no markup here"), "no markup here");
    }

    #[test]
    fn runs_of_blank_lines_are_capped() {
        let text = html_to_text("<p>a</p>\n\n\n\n<p>b</p>");
        assert_eq!(text, "a\n\nb");
    }

    #[test]
    fn empty_blocks_add_no_blank_lines() {
        let text = html_to_text("<p>a</p><p></p><p></p><p>b</p>");
        assert_eq!(text, "a\nb");
    }

    #[test]
    fn empty_input_is_empty() {
        assert_eq!(html_to_text(""), "");
    }
}
