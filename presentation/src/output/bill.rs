//! Console card for bill detail

use crate::markdown::TerminalRenderer;
use colored::Colorize;
use statehouse_application::BillView;

/// How many of the most recent actions the card shows.
const MAX_ACTIONS: usize = 5;

/// Formats a bill lookup result for console display
pub struct BillCard {
    color: bool,
}

impl BillCard {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Format the complete bill card
    pub fn format(&self, view: &BillView) -> String {
        let detail = &view.detail;
        let mut output = String::new();

        // Header
        let heading = format!(
            "{} ({} session)",
            detail.number.canonical(),
            detail.session_year
        );
        output.push_str(&self.header(&heading));
        output.push('\n');

        if !detail.title.is_empty() {
            output.push_str(&format!("{}\n\n", self.paint(&detail.title, |s| s.bold())));
        }

        if let Some(sponsor) = &detail.sponsor {
            output.push_str(&format!(
                "{} {}\n",
                self.paint("Sponsor:", |s| s.cyan().bold()),
                sponsor
            ));
        }
        if let Some(status) = &detail.status {
            output.push_str(&format!(
                "{} {}\n",
                self.paint("Status:", |s| s.cyan().bold()),
                status
            ));
        }

        // Summary (with bill references linked)
        if !view.linked_summary.is_empty() {
            output.push_str(&self.section_header("Summary"));
            let renderer = TerminalRenderer::new(self.color);
            output.push_str(&renderer.render(&view.linked_summary));
        }

        // Recent actions, newest last
        if !detail.actions.is_empty() {
            output.push_str(&self.section_header("Recent Actions"));
            let skip = detail.actions.len().saturating_sub(MAX_ACTIONS);
            for action in detail.actions.iter().skip(skip) {
                let chamber = action.chamber.as_deref().unwrap_or("");
                output.push_str(&format!(
                    "  {}  {:<8} {}\n",
                    self.paint(&action.date, |s| s.dimmed()),
                    chamber,
                    action.text
                ));
            }
            if skip > 0 {
                output.push_str(&self.paint(
                    &format!("  ({} earlier actions not shown)\n", skip),
                    |s| s.dimmed(),
                ));
            }
        }

        // PDF availability
        match detail.pdf_available {
            Some(true) => {
                output.push('\n');
                output.push_str(&format!(
                    "{} bill text PDF is available\n",
                    self.paint("v", |s| s.green())
                ));
            }
            Some(false) => {
                output.push('\n');
                output.push_str(&self.paint("No bill text PDF published yet\n", |s| s.dimmed()));
            }
            None => {}
        }

        output
    }

    fn header(&self, title: &str) -> String {
        let line = "=".repeat(60);
        format!(
            "{}\n{:^60}\n{}",
            self.paint(&line, |s| s.cyan()),
            self.paint(title, |s| s.bold()),
            self.paint(&line, |s| s.cyan())
        )
    }

    fn section_header(&self, title: &str) -> String {
        format!(
            "\n{}\n{}\n",
            self.paint(title, |s| s.cyan().bold()),
            "-".repeat(40)
        )
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
    use statehouse_domain::{BillAction, BillDetail, BillNumber};

    fn sample_view() -> BillView {
        let number = BillNumber::parse("S1528").unwrap();
        let mut detail = BillDetail::new(number, 2025, "An act to amend the public health law")
            .with_summary("Caps copayments; companion to A405.")
            .with_sponsor("Jane Doe")
            .with_status("In Senate Committee");
        detail.pdf_available = Some(true);
        detail.actions = vec![
            BillAction {
                date: "2025-01-08".to_string(),
                text: "REFERRED TO HEALTH".to_string(),
                chamber: Some("SENATE".to_string()),
            },
            BillAction {
                date: "2025-02-12".to_string(),
                text: "AMEND AND RECOMMIT TO HEALTH".to_string(),
                chamber: Some("SENATE".to_string()),
            },
        ];
        BillView {
            linked_summary: "Caps copayments; companion to [A00405](/bills/A00405).".to_string(),
            detail,
        }
    }

    #[test]
    fn card_shows_all_sections() {
        let card = BillCard::new(false).format(&sample_view());
        assert!(card.contains("S01528 (2025 session)"));
        assert!(card.contains("An act to amend the public health law"));
        assert!(card.contains("Sponsor: Jane Doe"));
        assert!(card.contains("Status: In Senate Committee"));
        assert!(card.contains("Summary"));
        assert!(card.contains("A00405"));
        assert!(card.contains("REFERRED TO HEALTH"));
        assert!(card.contains("PDF is available"));
    }

    #[test]
    fn long_action_lists_are_truncated() {
        let mut view = sample_view();
        view.detail.actions = (0..8)
            .map(|i| BillAction {
                date: format!("2025-01-{:02}", i + 1),
                text: format!("ACTION {}", i),
                chamber: None,
            })
            .collect();

        let card = BillCard::new(false).format(&view);
        assert!(!card.contains("ACTION 0"));
        assert!(card.contains("ACTION 7"));
        assert!(card.contains("(3 earlier actions not shown)"));
    }

    #[test]
    fn missing_pdf_flag_prints_nothing_about_pdf() {
        let mut view = sample_view();
        view.detail.pdf_available = None;
        let card = BillCard::new(false).format(&view);
        assert!(!card.contains("PDF"));
    }
}
