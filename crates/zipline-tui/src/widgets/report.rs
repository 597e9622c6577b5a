//! Summary report view for the results screen

use std::collections::BTreeMap;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use zipline_core::ReportEntry;

use crate::theme;

/// One row per report entry; values carry their classification color.
/// An empty report renders an empty section, not an error.
pub struct ReportView<'a> {
    report: &'a BTreeMap<String, ReportEntry>,
}

impl<'a> ReportView<'a> {
    pub fn new(report: &'a BTreeMap<String, ReportEntry>) -> Self {
        Self { report }
    }
}

impl Widget for ReportView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Optimization Summary ");
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = self
            .report
            .values()
            .map(|entry| {
                Line::from(vec![
                    Span::raw(format!("{:<24}", entry.label)),
                    Span::styled(
                        entry.value.clone(),
                        theme::classification_style(entry.classification),
                    ),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use zipline_core::Classification;

    fn render_to_string(report: &BTreeMap<String, ReportEntry>) -> String {
        let backend = TestBackend::new(50, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| frame.render_widget(ReportView::new(report), frame.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_renders_rows_with_values() {
        let mut report = BTreeMap::new();
        report.insert(
            "size".to_string(),
            ReportEntry {
                label: "Size Reduction".to_string(),
                value: "40%".to_string(),
                classification: Classification::Positive,
            },
        );
        report.insert(
            "warnings".to_string(),
            ReportEntry {
                label: "Warnings".to_string(),
                value: "2".to_string(),
                classification: Classification::Negative,
            },
        );

        let content = render_to_string(&report);
        assert!(content.contains("Size Reduction"));
        assert!(content.contains("40%"));
        assert!(content.contains("Warnings"));
    }

    #[test]
    fn test_empty_report_renders_section_only() {
        let report = BTreeMap::new();
        let content = render_to_string(&report);
        assert!(content.contains("Optimization Summary"));
    }
}
