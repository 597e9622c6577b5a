//! Push-event handling: the Processing-phase transitions
//!
//! Events are applied strictly in arrival order; nothing is reordered or
//! coalesced. Credit updates are process-wide and bypass the session
//! guard; everything else belongs to the live session or is discarded.

use zipline_client::ChannelEvent;
use zipline_core::prelude::*;
use zipline_core::{ConsoleEntry, ServerEvent, SessionId, SessionPhase};

use crate::session::RunOutcome;
use crate::state::AppState;

use super::UpdateResult;

/// Default summary for an analysis-only completion without a message
const DEFAULT_ANALYSIS_MESSAGE: &str = "Analysis complete.";

/// Default message for a fatal event without one
const DEFAULT_FATAL_MESSAGE: &str = "Unknown processing error.";

pub(crate) fn handle_channel_event(
    state: &mut AppState,
    session_id: SessionId,
    event: ChannelEvent,
) -> UpdateResult {
    // Credits are not session-scoped; apply them even from a channel the
    // user has already reset away.
    if let ChannelEvent::Event(ServerEvent::CreditsUpdated(credits)) = &event {
        state.credits = Some(credits.credits);
        return UpdateResult::none();
    }

    if state.session_id() != Some(&session_id) {
        debug!("event for stale session {session_id} discarded");
        return UpdateResult::none();
    }

    match event {
        ChannelEvent::Closed { reason } => {
            // A drop means no further events; never a fabricated terminal.
            warn!(
                "push channel for {session_id} closed ({})",
                reason.as_deref().unwrap_or("no reason given")
            );
            UpdateResult::none()
        }
        ChannelEvent::Event(event) => handle_server_event(state, event),
    }
}

fn handle_server_event(state: &mut AppState, event: ServerEvent) -> UpdateResult {
    match event {
        ServerEvent::Status(status) => {
            if state.phase == SessionPhase::Processing {
                state.push_console(ConsoleEntry::new(
                    status.severity,
                    status.message,
                    status.is_markup,
                ));
            } else {
                debug!("status event outside Processing ignored: {}", status.message);
            }
        }

        ServerEvent::Completed(payload) => {
            // Re-delivery replaces the payload; the render projects the
            // stored value, so applying it twice cannot duplicate output.
            if matches!(
                state.phase,
                SessionPhase::Processing | SessionPhase::Completed
            ) {
                state.phase = SessionPhase::Completed;
                if let Some(session) = state.session.as_mut() {
                    session.outcome = Some(RunOutcome::Full(payload));
                }
            } else {
                debug!("completion event in phase {:?} ignored", state.phase);
            }
        }

        ServerEvent::AnalysisComplete(analysis) => {
            if state.phase == SessionPhase::Processing {
                state.phase = SessionPhase::Completed;
                if let Some(session) = state.session.as_mut() {
                    session.outcome = Some(RunOutcome::AnalysisOnly);
                }
                let message = analysis
                    .message
                    .unwrap_or_else(|| DEFAULT_ANALYSIS_MESSAGE.to_string());
                state.push_console(ConsoleEntry::success(message));
            } else {
                debug!("analysis completion in phase {:?} ignored", state.phase);
            }
        }

        ServerEvent::Fatal(fatal) => {
            if state.phase == SessionPhase::Processing {
                state.phase = SessionPhase::Failed;
                let message = fatal
                    .message
                    .unwrap_or_else(|| DEFAULT_FATAL_MESSAGE.to_string());
                state.push_console(ConsoleEntry::error(format!("Fatal error: {message}")));
            } else {
                debug!("fatal event in phase {:?} ignored", state.phase);
            }
        }

        ServerEvent::CreditsUpdated(credits) => {
            // Normally short-circuited above; kept for exhaustiveness
            state.credits = Some(credits.credits);
        }

        ServerEvent::Unknown { event, .. } => {
            debug!("unhandled event kind: {event}");
        }
    }

    UpdateResult::none()
}
