//! Title bar with the process-wide credit balance

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme;

/// One-line header: app title on the left, credits on the right
pub struct HeaderBar {
    credits: Option<u64>,
}

impl HeaderBar {
    pub fn new(credits: Option<u64>) -> Self {
        Self { credits }
    }

    fn credits_text(&self) -> String {
        match self.credits {
            Some(credits) => format!("⛁ {credits} credits "),
            None => "⛁ — credits ".to_string(),
        }
    }
}

impl Widget for HeaderBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(Span::styled(
            " zipline ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )))
        .render(area, buf);

        Paragraph::new(Line::from(Span::styled(self.credits_text(), theme::dim())))
            .alignment(Alignment::Right)
            .render(area, buf);
    }
}
