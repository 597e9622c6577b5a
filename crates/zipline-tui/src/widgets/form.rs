//! Submission form view

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use zipline_app::FormState;

use crate::theme;

/// The drop-zone analogue: archive path entry, option controls, and the
/// submit row, with the focused row highlighted.
pub struct FormView<'a> {
    form: &'a FormState,
}

impl<'a> FormView<'a> {
    pub fn new(form: &'a FormState) -> Self {
        Self { form }
    }

    fn row_prefix(&self, row: usize) -> Span<'static> {
        if self.form.focus == row {
            Span::styled("› ", Style::default().fg(theme::ACCENT))
        } else {
            Span::raw("  ")
        }
    }

    fn row_style(&self, row: usize) -> Style {
        if self.form.focus == row {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    }
}

impl Widget for FormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(" New Run ");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::new();

        // Selection summary (the drop-zone display)
        match self.form.archive_name() {
            Some(name) => lines.push(Line::from(Span::styled(
                format!("⌂ {name}"),
                theme::severity_style(zipline_core::Severity::Success),
            ))),
            None => lines.push(Line::from(Span::styled(
                "Select a .zip archive to begin".to_string(),
                theme::dim(),
            ))),
        }
        lines.push(Line::default());

        // Row 0: archive path entry
        let cursor = if self.form.path_focused() { "▏" } else { "" };
        lines.push(Line::from(vec![
            self.row_prefix(0),
            Span::styled(
                format!("Archive path: {}{cursor}", self.form.path_input),
                self.row_style(0),
            ),
        ]));

        // Option rows
        for (i, control) in self.form.controls.iter().enumerate() {
            let row = i + 1;
            lines.push(Line::from(vec![
                self.row_prefix(row),
                Span::styled(
                    format!("{}: {}", control.label, control.display_value()),
                    self.row_style(row),
                ),
            ]));
        }

        // Submit row
        let submit_row = self.form.rows() - 1;
        let submit_style = if self.form.is_submittable() {
            self.row_style(submit_row)
                .fg(ratatui::style::Color::Green)
        } else {
            theme::dim()
        };
        lines.push(Line::default());
        lines.push(Line::from(vec![
            self.row_prefix(submit_row),
            Span::styled("[ Start run ]", submit_style),
        ]));

        // Validation feedback
        if let Some(feedback) = &self.form.feedback {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                feedback.clone(),
                theme::severity_style(zipline_core::Severity::Error),
            )));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use std::path::PathBuf;
    use zipline_app::Settings;

    fn render_to_string(form: &FormState) -> String {
        let backend = TestBackend::new(60, 14);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| frame.render_widget(FormView::new(form), frame.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_empty_form_shows_prompt_and_disabled_submit() {
        let form = FormState::new(&Settings::default().options);
        let content = render_to_string(&form);
        assert!(content.contains("Select a .zip archive to begin"));
        assert!(content.contains("[ Start run ]"));
        assert!(content.contains("JS obfuscation"));
    }

    #[test]
    fn test_selected_archive_shown() {
        let mut form = FormState::new(&Settings::default().options);
        form.select_archive(PathBuf::from("/work/project.zip"));
        let content = render_to_string(&form);
        assert!(content.contains("⌂ project.zip"));
    }

    #[test]
    fn test_feedback_rendered_for_invalid_selection() {
        let mut form = FormState::new(&Settings::default().options);
        form.select_archive(PathBuf::from("photo.png"));
        let content = render_to_string(&form);
        assert!(content.contains("Please select a single ZIP file."));
    }
}
