//! Main render/view function (View in TEA pattern)

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use zipline_app::{AppState, ViewMode};
use zipline_client::download_url;

use crate::widgets::{ConsoleView, FileTreeView, FormView, HeaderBar, ReportView, StatusBar};

/// Render the complete UI.
///
/// Pure projection of the state snapshot: which screen appears is derived
/// from the session phase, so processing and results can never be shown
/// together.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .split(area);

    frame.render_widget(HeaderBar::new(state.credits), chunks[0]);

    match state.view_mode() {
        ViewMode::Form => {
            frame.render_widget(FormView::new(&state.form), chunks[1]);
        }
        ViewMode::Processing => {
            frame.render_widget(
                ConsoleView::new(&state.console)
                    .show_timestamps(state.settings.show_timestamps),
                chunks[1],
            );
        }
        ViewMode::Results => render_results(frame, chunks[1], state),
    }

    frame.render_widget(
        StatusBar::new(state.phase, state.show_restart(), state.form.is_submittable()),
        chunks[2],
    );
}

/// Results screen: file tree and report side by side, download line below
fn render_results(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(payload) = state.completion() else {
        return;
    };

    let rows = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);
    let cols =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).split(rows[0]);

    frame.render_widget(FileTreeView::new(&payload.file_tree), cols[0]);
    frame.render_widget(ReportView::new(&payload.report), cols[1]);

    let reference = download_url(&state.server, &payload.archive_name)
        .map(|url| url.to_string())
        .unwrap_or_else(|_| payload.archive_name.clone());
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" Download: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(reference),
        ])),
        rows[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use std::collections::BTreeMap;
    use std::path::PathBuf;
    use zipline_app::{update, Message, RunOutcome, Settings};
    use zipline_core::{
        Classification, CompletionPayload, FileNode, ReportEntry, SessionId,
    };

    fn make_state() -> AppState {
        AppState::new(
            Settings::default(),
            "http://127.0.0.1:5000".parse().unwrap(),
        )
    }

    fn render_to_string(state: &AppState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| view(frame, state)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    fn completed_state() -> AppState {
        let mut state = make_state();
        update(&mut state, Message::ArchiveSelected(PathBuf::from("project.zip")));
        update(&mut state, Message::Submit);
        update(
            &mut state,
            Message::UploadCompleted {
                session_id: SessionId::new("abc"),
            },
        );

        let mut report = BTreeMap::new();
        report.insert(
            "size".to_string(),
            ReportEntry {
                label: "Size Reduction".to_string(),
                value: "40%".to_string(),
                classification: Classification::Positive,
            },
        );
        let payload = CompletionPayload {
            archive_name: "optimized_abc.zip".to_string(),
            file_tree: vec![FileNode::directory("src", vec![FileNode::file("a.js")])],
            report,
        };
        state.phase = zipline_core::SessionPhase::Completed;
        state.session.as_mut().unwrap().outcome = Some(RunOutcome::Full(payload));
        state
    }

    #[test]
    fn test_idle_renders_form() {
        let state = make_state();
        let content = render_to_string(&state);
        assert!(content.contains("New Run"));
        assert!(content.contains("zipline"));
        assert!(!content.contains("Console"));
    }

    #[test]
    fn test_processing_renders_console_without_results() {
        let mut state = make_state();
        update(&mut state, Message::ArchiveSelected(PathBuf::from("project.zip")));
        update(&mut state, Message::Submit);

        let content = render_to_string(&state);
        assert!(content.contains("Console"));
        assert!(content.contains("Uploading project ZIP file..."));
        // Results and Processing are mutually exclusive
        assert!(!content.contains("Optimization Summary"));
    }

    #[test]
    fn test_results_renders_tree_report_and_download() {
        let state = completed_state();
        let content = render_to_string(&state);

        assert!(content.contains("Files"));
        assert!(content.contains("src/"));
        assert!(content.contains("a.js"));
        assert!(content.contains("Optimization Summary"));
        assert!(content.contains("Size Reduction"));
        assert!(content.contains("Download:"));
        assert!(content.contains("optimized_abc.zip"));
        // The console view is replaced, not stacked behind
        assert!(!content.contains("Console"));
    }

    #[test]
    fn test_header_shows_credit_balance() {
        let mut state = make_state();
        state.credits = Some(7);
        let content = render_to_string(&state);
        assert!(content.contains("7 credits"));
    }
}
