//! Server push event definitions
//!
//! The processing service emits JSON envelopes of the form
//! `{"event": "<name>", "params": {...}}` over the push channel. Everything
//! the controller consumes is parsed here into a single typed union so the
//! state machine can be driven by scripted sequences in tests.

use serde::{Deserialize, Serialize};

use crate::results::CompletionPayload;
use crate::types::Severity;

/// Progress line for the console
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub message: String,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub is_markup: bool,
}

/// New process-wide credit balance
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditsUpdated {
    pub credits: u64,
}

/// Analysis-only completion; no downloadable output exists
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisComplete {
    #[serde(default)]
    pub message: Option<String>,
}

/// Fatal processing error
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FatalError {
    #[serde(default)]
    pub message: Option<String>,
}

/// Fully typed push event from the processing service
#[derive(Debug, Clone)]
pub enum ServerEvent {
    /// Progress line while processing
    Status(StatusUpdate),
    /// Credit balance changed; may arrive in any phase
    CreditsUpdated(CreditsUpdated),
    /// Full completion with downloadable archive, file tree, and report
    Completed(CompletionPayload),
    /// Analysis-only completion
    AnalysisComplete(AnalysisComplete),
    /// Fatal processing error
    Fatal(FatalError),
    /// Fallback for event names this client does not know
    Unknown {
        event: String,
        params: serde_json::Value,
    },
}

impl ServerEvent {
    /// Parse a raw frame into a typed event.
    ///
    /// Returns `None` for frames that are not event envelopes at all;
    /// well-formed envelopes with unparseable params degrade to `Unknown`.
    pub fn parse(json: &str) -> Option<Self> {
        let value: serde_json::Value = serde_json::from_str(json).ok()?;
        let event = value.get("event").and_then(|v| v.as_str())?;
        let params = value
            .get("params")
            .cloned()
            .unwrap_or(serde_json::Value::Null);
        Some(Self::parse_event(event, params))
    }

    /// Parse an event by name
    fn parse_event(event: &str, params: serde_json::Value) -> Self {
        match event {
            "run.status" => serde_json::from_value(params.clone())
                .map(ServerEvent::Status)
                .unwrap_or_else(|_| Self::unknown(event, params)),
            "run.credits" => serde_json::from_value(params.clone())
                .map(ServerEvent::CreditsUpdated)
                .unwrap_or_else(|_| Self::unknown(event, params)),
            "run.complete" => serde_json::from_value(params.clone())
                .map(ServerEvent::Completed)
                .unwrap_or_else(|_| Self::unknown(event, params)),
            "run.analysisComplete" => serde_json::from_value(params.clone())
                .map(ServerEvent::AnalysisComplete)
                .unwrap_or_else(|_| Self::unknown(event, params)),
            "run.error" => serde_json::from_value(params.clone())
                .map(ServerEvent::Fatal)
                .unwrap_or_else(|_| Self::unknown(event, params)),
            _ => Self::unknown(event, params),
        }
    }

    fn unknown(event: &str, params: serde_json::Value) -> Self {
        ServerEvent::Unknown {
            event: event.to_string(),
            params,
        }
    }

    /// Check if this event ends the processing phase
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ServerEvent::Completed(_) | ServerEvent::AnalysisComplete(_) | ServerEvent::Fatal(_)
        )
    }

    /// Get a human-readable summary for diagnostics
    pub fn summary(&self) -> String {
        match self {
            ServerEvent::Status(s) => s.message.clone(),
            ServerEvent::CreditsUpdated(c) => format!("Credits: {}", c.credits),
            ServerEvent::Completed(p) => format!("Run complete: {}", p.archive_name),
            ServerEvent::AnalysisComplete(a) => a
                .message
                .clone()
                .unwrap_or_else(|| "Analysis complete".to_string()),
            ServerEvent::Fatal(f) => {
                format!(
                    "Fatal: {}",
                    f.message.as_deref().unwrap_or("unknown error")
                )
            }
            ServerEvent::Unknown { event, .. } => format!("Event: {}", event),
        }
    }
}
