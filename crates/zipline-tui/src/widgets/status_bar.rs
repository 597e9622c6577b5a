//! Key-hint bar for the bottom row

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use zipline_core::SessionPhase;

use crate::theme;

/// Phase label plus the keys that do something right now
pub struct StatusBar {
    phase: SessionPhase,
    show_restart: bool,
    submittable: bool,
}

impl StatusBar {
    pub fn new(phase: SessionPhase, show_restart: bool, submittable: bool) -> Self {
        Self {
            phase,
            show_restart,
            submittable,
        }
    }

    fn hints(&self) -> String {
        match self.phase {
            SessionPhase::Idle => {
                let mut hints =
                    "↑/↓ focus · space toggle · enter select/submit".to_string();
                if self.submittable {
                    hints.push_str(" · s submit");
                }
                hints.push_str(" · q quit");
                hints
            }
            SessionPhase::Uploading | SessionPhase::Processing => "working… · q quit".to_string(),
            SessionPhase::Completed | SessionPhase::Failed => {
                if self.show_restart {
                    "r restart · q quit".to_string()
                } else {
                    "q quit".to_string()
                }
            }
        }
    }
}

impl Widget for StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", self.phase.label()),
                theme::severity_style(match self.phase {
                    SessionPhase::Failed => zipline_core::Severity::Error,
                    SessionPhase::Completed => zipline_core::Severity::Success,
                    _ => zipline_core::Severity::Info,
                }),
            ),
            Span::styled(self.hints(), theme::dim()),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_hints_include_submit_only_when_ready() {
        let bar = StatusBar::new(SessionPhase::Idle, false, false);
        assert!(!bar.hints().contains("s submit"));

        let bar = StatusBar::new(SessionPhase::Idle, false, true);
        assert!(bar.hints().contains("s submit"));
    }

    #[test]
    fn test_terminal_phases_offer_restart() {
        let bar = StatusBar::new(SessionPhase::Failed, true, false);
        assert!(bar.hints().contains("r restart"));

        let bar = StatusBar::new(SessionPhase::Processing, false, false);
        assert!(!bar.hints().contains("r restart"));
    }
}
