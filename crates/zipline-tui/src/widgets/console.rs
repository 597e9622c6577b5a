//! Console view: the append-only session log

use std::collections::VecDeque;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use zipline_core::ConsoleEntry;

use crate::theme;

/// Scrolling console widget; follows the tail of the log
pub struct ConsoleView<'a> {
    entries: &'a VecDeque<ConsoleEntry>,
    title: &'a str,
    show_timestamps: bool,
}

impl<'a> ConsoleView<'a> {
    pub fn new(entries: &'a VecDeque<ConsoleEntry>) -> Self {
        Self {
            entries,
            title: " Console ",
            show_timestamps: true,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    pub fn show_timestamps(mut self, show: bool) -> Self {
        self.show_timestamps = show;
        self
    }

    fn entry_line(&self, entry: &ConsoleEntry) -> Line<'static> {
        let mut spans = Vec::new();
        if self.show_timestamps {
            spans.push(Span::styled(
                format!("{} ", entry.formatted_time()),
                theme::dim(),
            ));
        }
        spans.push(Span::styled(
            format!("{} ", theme::severity_icon(entry.severity)),
            theme::severity_style(entry.severity),
        ));
        spans.push(Span::styled(
            entry.display_message(),
            theme::message_style(entry.severity),
        ));
        Line::from(spans)
    }
}

impl Widget for ConsoleView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(self.title);
        let inner = block.inner(area);
        block.render(area, buf);

        // Tail-follow: keep the newest lines visible
        let visible = inner.height as usize;
        let skip = self.entries.len().saturating_sub(visible);
        let lines: Vec<Line> = self
            .entries
            .iter()
            .skip(skip)
            .map(|entry| self.entry_line(entry))
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use zipline_core::Severity;

    fn render_to_string(entries: &VecDeque<ConsoleEntry>, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                frame.render_widget(ConsoleView::new(entries), frame.area());
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_renders_messages_with_icons() {
        let entries: VecDeque<ConsoleEntry> = vec![
            ConsoleEntry::info("Uploading project ZIP file..."),
            ConsoleEntry::success("Upload complete. Starting process..."),
        ]
        .into();

        let content = render_to_string(&entries, 60, 8);
        assert!(content.contains("Uploading project ZIP file..."));
        assert!(content.contains("ℹ"));
        assert!(content.contains("✔"));
    }

    #[test]
    fn test_unknown_severity_uses_default_icon() {
        let entries: VecDeque<ConsoleEntry> = vec![ConsoleEntry::new(
            Severity::parse("shiny-new-kind"),
            "mystery line",
            false,
        )]
        .into();

        let content = render_to_string(&entries, 40, 5);
        assert!(content.contains("›"));
        assert!(content.contains("mystery line"));
    }

    #[test]
    fn test_markup_lines_render_stripped() {
        let entries: VecDeque<ConsoleEntry> = vec![ConsoleEntry::new(
            Severity::Info,
            "<b>3 files</b> optimized",
            true,
        )]
        .into();

        let content = render_to_string(&entries, 40, 5);
        assert!(content.contains("3 files optimized"));
        assert!(!content.contains("<b>"));
    }

    #[test]
    fn test_tail_follow_shows_newest_lines() {
        let entries: VecDeque<ConsoleEntry> =
            (0..20).map(|i| ConsoleEntry::info(format!("line {i}"))).collect();

        // Inner height of 3 leaves room for the last three lines only
        let content = render_to_string(&entries, 40, 5);
        assert!(content.contains("line 19"));
        assert!(content.contains("line 17"));
        assert!(!content.contains("line 0 "));
    }
}
