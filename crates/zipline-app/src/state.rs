//! Application state (Model in TEA pattern)

use std::collections::VecDeque;

use serde_json::{Map, Value};
use url::Url;

use zipline_core::{CompletionPayload, ConsoleEntry, SessionId, SessionPhase};

use crate::config::Settings;
use crate::form::FormState;
use crate::session::RunSession;

/// Which of the mutually exclusive screens is shown.
///
/// Derived from [`SessionPhase`] on every render, never stored, so the
/// results and processing views can never be visible at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// The submission form (Idle)
    Form,
    /// The live console (Uploading, Processing, Failed, analysis-only end)
    Processing,
    /// File tree + report (full completion only)
    Results,
}

/// Maximum console entries kept; older lines roll off the front
const MAX_CONSOLE_ENTRIES: usize = 1000;

/// The complete application state
#[derive(Debug)]
pub struct AppState {
    /// Session lifecycle phase
    pub phase: SessionPhase,

    /// Append-only console log; cleared atomically when a new upload starts
    pub console: VecDeque<ConsoleEntry>,

    /// The live session, if an upload has been accepted
    pub session: Option<RunSession>,

    /// Process-wide credit balance; survives session resets
    pub credits: Option<u64>,

    /// Submission form
    pub form: FormState,

    /// Loaded settings
    pub settings: Settings,

    /// Base URL of the processing service
    pub server: Url,

    /// Options collected at submit time, consumed when the upload lands
    pub pending_options: Option<Map<String, Value>>,

    /// Set when the user asked to quit
    pub should_quit: bool,
}

impl AppState {
    pub fn new(settings: Settings, server: Url) -> Self {
        let form = FormState::new(&settings.options);
        Self {
            phase: SessionPhase::Idle,
            console: VecDeque::new(),
            session: None,
            credits: None,
            form,
            settings,
            server,
            pending_options: None,
            should_quit: false,
        }
    }

    /// Append a console entry, rolling old lines off past the cap
    pub fn push_console(&mut self, entry: ConsoleEntry) {
        self.console.push_back(entry);
        while self.console.len() > MAX_CONSOLE_ENTRIES {
            self.console.pop_front();
        }
    }

    pub fn clear_console(&mut self) {
        self.console.clear();
    }

    /// The screen to show for the current phase
    pub fn view_mode(&self) -> ViewMode {
        match self.phase {
            SessionPhase::Idle => ViewMode::Form,
            SessionPhase::Completed if self.completion().is_some() => ViewMode::Results,
            _ => ViewMode::Processing,
        }
    }

    /// Whether the restart control is offered
    pub fn show_restart(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Completion payload of the current session, if it finished fully
    pub fn completion(&self) -> Option<&CompletionPayload> {
        self.session.as_ref().and_then(RunSession::completion)
    }

    pub fn session_id(&self) -> Option<&SessionId> {
        self.session.as_ref().map(|s| &s.id)
    }
}
