//! Styles and iconography

use ratatui::style::{Color, Modifier, Style};

use zipline_core::{Classification, Severity};

/// Icon column for a console line.
///
/// `Severity::Default` is the catch-all: any severity the wire sends that
/// this client does not know renders with the default chevron rather than
/// failing.
pub fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "ℹ",
        Severity::Success => "✔",
        Severity::Warning => "⚠",
        Severity::Error => "✖",
        Severity::Default => "›",
    }
}

pub fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::Info => Style::default().fg(Color::Cyan),
        Severity::Success => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Severity::Warning => Style::default().fg(Color::Yellow),
        Severity::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Severity::Default => Style::default().fg(Color::DarkGray),
    }
}

/// Message text style, a quieter companion to the icon style
pub fn message_style(severity: Severity) -> Style {
    match severity {
        Severity::Error => Style::default().fg(Color::LightRed),
        Severity::Warning => Style::default().fg(Color::LightYellow),
        _ => Style::default(),
    }
}

pub fn classification_style(classification: Classification) -> Style {
    match classification {
        Classification::Positive => Style::default().fg(Color::Green),
        Classification::Negative => Style::default().fg(Color::Red),
        Classification::Neutral => Style::default(),
    }
}

/// Accent color for titles and the focused form row
pub const ACCENT: Color = Color::Cyan;

/// Dim style for hints and timestamps
pub fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_severity_has_an_icon() {
        for severity in [
            Severity::Info,
            Severity::Success,
            Severity::Warning,
            Severity::Error,
            Severity::Default,
        ] {
            assert!(!severity_icon(severity).is_empty());
        }
    }

    #[test]
    fn test_unknown_severity_falls_back_to_default_icon() {
        // The wire-level fallback lands on Severity::Default
        let unknown = Severity::parse("critical");
        assert_eq!(severity_icon(unknown), "›");
    }
}
