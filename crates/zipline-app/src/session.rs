//! Per-run session state

use chrono::{DateTime, Local};
use serde_json::{Map, Value};

use zipline_core::{CompletionPayload, SessionId};

/// How a run ended
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Full completion: downloadable archive, file tree, and report
    Full(CompletionPayload),
    /// Analysis-only completion: console summary, nothing to download
    AnalysisOnly,
}

/// One tool session, created when the upload is accepted.
///
/// There is at most one live session per controller; the id never changes
/// once assigned, and the whole session is dropped on restart.
#[derive(Debug, Clone)]
pub struct RunSession {
    pub id: SessionId,
    /// The option set sent in the kickoff frame
    pub options: Map<String, Value>,
    /// Terminal outcome; replaced wholesale if the server resends it
    pub outcome: Option<RunOutcome>,
    pub started_at: DateTime<Local>,
}

impl RunSession {
    pub fn new(id: SessionId, options: Map<String, Value>) -> Self {
        Self {
            id,
            options,
            outcome: None,
            started_at: Local::now(),
        }
    }

    /// The completion payload, when the run finished fully
    pub fn completion(&self) -> Option<&CompletionPayload> {
        match &self.outcome {
            Some(RunOutcome::Full(payload)) => Some(payload),
            _ => None,
        }
    }
}
