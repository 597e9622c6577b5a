//! Core domain type definitions

use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::markup::strip_markup_tags;

/// Session lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// No session; the submission form is shown
    #[default]
    Idle,
    /// Archive upload request is in flight
    Uploading,
    /// Upload accepted; consuming push events
    Processing,
    /// Terminal: run finished (full or analysis-only)
    Completed,
    /// Terminal: upload or processing failed
    Failed,
}

impl SessionPhase {
    /// Terminal phases stay put until the user restarts
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionPhase::Completed | SessionPhase::Failed)
    }

    /// Short label for status display
    pub fn label(&self) -> &'static str {
        match self {
            SessionPhase::Idle => "idle",
            SessionPhase::Uploading => "uploading",
            SessionPhase::Processing => "processing",
            SessionPhase::Completed => "completed",
            SessionPhase::Failed => "failed",
        }
    }
}

/// Opaque server-assigned session identifier.
///
/// Immutable once assigned; compared to guard against events from a
/// session that has already been reset away.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Console line severity levels.
///
/// The wire sends free-form strings; anything unrecognized maps to
/// [`Severity::Default`] so a new server-side severity never breaks the
/// console render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
    Default,
}

impl Severity {
    /// Parse a wire severity string, falling back to `Default`
    pub fn parse(s: &str) -> Self {
        match s {
            "info" => Severity::Info,
            "success" => Severity::Success,
            "warning" => Severity::Warning,
            "error" => Severity::Error,
            _ => Severity::Default,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Default => "default",
        }
    }
}

impl Default for Severity {
    fn default() -> Self {
        Severity::Default
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Severity::parse(&raw))
    }
}

/// A single console line with timestamp
#[derive(Debug, Clone)]
pub struct ConsoleEntry {
    pub timestamp: DateTime<Local>,
    pub severity: Severity,
    pub message: String,
    /// The server flagged this line as markup; tags are stripped for display
    pub is_markup: bool,
}

impl ConsoleEntry {
    /// Create a new console entry with the current timestamp
    pub fn new(severity: Severity, message: impl Into<String>, is_markup: bool) -> Self {
        Self {
            timestamp: Local::now(),
            severity,
            message: message.into(),
            is_markup,
        }
    }

    /// Create an info entry
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message, false)
    }

    /// Create a success entry
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message, false)
    }

    /// Create an error entry
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message, false)
    }

    /// The message as it should appear on screen.
    ///
    /// Markup lines lose their tags; plain lines pass through untouched.
    pub fn display_message(&self) -> String {
        if self.is_markup {
            strip_markup_tags(&self.message)
        } else {
            self.message.clone()
        }
    }

    /// Format timestamp for display
    pub fn formatted_time(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_default_is_idle() {
        assert_eq!(SessionPhase::default(), SessionPhase::Idle);
    }

    #[test]
    fn test_phase_terminal_classification() {
        assert!(SessionPhase::Completed.is_terminal());
        assert!(SessionPhase::Failed.is_terminal());
        assert!(!SessionPhase::Idle.is_terminal());
        assert!(!SessionPhase::Uploading.is_terminal());
        assert!(!SessionPhase::Processing.is_terminal());
    }

    #[test]
    fn test_severity_parse_known_values() {
        assert_eq!(Severity::parse("info"), Severity::Info);
        assert_eq!(Severity::parse("success"), Severity::Success);
        assert_eq!(Severity::parse("warning"), Severity::Warning);
        assert_eq!(Severity::parse("error"), Severity::Error);
    }

    #[test]
    fn test_severity_parse_unknown_falls_back() {
        assert_eq!(Severity::parse("critical"), Severity::Default);
        assert_eq!(Severity::parse(""), Severity::Default);
        assert_eq!(Severity::parse("INFO"), Severity::Default);
    }

    #[test]
    fn test_severity_deserialize_from_json() {
        let sev: Severity = serde_json::from_str("\"success\"").unwrap();
        assert_eq!(sev, Severity::Success);
        let sev: Severity = serde_json::from_str("\"no-such-severity\"").unwrap();
        assert_eq!(sev, Severity::Default);
    }

    #[test]
    fn test_severity_serialize_round_trip() {
        let json = serde_json::to_string(&Severity::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
    }

    #[test]
    fn test_console_entry_constructors() {
        let entry = ConsoleEntry::info("Scanning files...");
        assert_eq!(entry.severity, Severity::Info);
        assert_eq!(entry.message, "Scanning files...");
        assert!(!entry.is_markup);
        assert!(!entry.is_error());

        let entry = ConsoleEntry::error("boom");
        assert!(entry.is_error());
    }

    #[test]
    fn test_console_entry_formatted_time() {
        let entry = ConsoleEntry::info("x");
        // HH:MM:SS
        assert_eq!(entry.formatted_time().len(), 8);
    }

    #[test]
    fn test_display_message_strips_markup_only_when_flagged() {
        let markup = ConsoleEntry::new(Severity::Info, "<b>3 files</b> optimized", true);
        assert_eq!(markup.display_message(), "3 files optimized");

        let plain = ConsoleEntry::new(Severity::Info, "<b>3 files</b> optimized", false);
        assert_eq!(plain.display_message(), "<b>3 files</b> optimized");
    }

    #[test]
    fn test_session_id_display() {
        let id = SessionId::new("abc-123");
        assert_eq!(id.to_string(), "abc-123");
        assert_eq!(id.as_str(), "abc-123");
    }
}
