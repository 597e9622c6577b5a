//! Main update function - handles state transitions (TEA pattern)

use zipline_core::prelude::*;
use zipline_core::{ConsoleEntry, SessionId, SessionPhase};

use crate::message::Message;
use crate::session::RunSession;
use crate::state::AppState;

use super::{channel, keys, UpdateAction, UpdateResult};

/// Process a message and update state.
///
/// This is the single owner of every [`SessionPhase`] transition; the
/// runtime loop only spawns the background work the returned action names.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.should_quit = true;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = keys::handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        Message::ArchiveSelected(path) => {
            if state.phase == SessionPhase::Idle {
                state.form.select_archive(path);
            } else {
                debug!("archive selection ignored outside the form");
            }
            UpdateResult::none()
        }

        Message::Submit => handle_submit(state),

        Message::UploadCompleted { session_id } => handle_upload_completed(state, session_id),

        Message::UploadFailed { message } => handle_upload_failed(state, message),

        Message::Channel { session_id, event } => {
            channel::handle_channel_event(state, session_id, event)
        }

        Message::Restart => handle_restart(state),
    }
}

/// Idle → Uploading: clear the console, stash the collected options, and
/// hand the archive to the upload task.
fn handle_submit(state: &mut AppState) -> UpdateResult {
    if state.phase != SessionPhase::Idle {
        debug!("submit ignored in phase {:?}", state.phase);
        return UpdateResult::none();
    }
    let Some(archive) = state.form.archive.clone() else {
        debug!("submit ignored without a valid archive selection");
        return UpdateResult::none();
    };

    state.phase = SessionPhase::Uploading;
    state.session = None;
    state.clear_console();
    state.pending_options = Some(state.form.collect_options());
    state.push_console(ConsoleEntry::info("Uploading project ZIP file..."));

    UpdateResult::action(UpdateAction::SubmitUpload { archive })
}

/// Uploading → Processing: the session now exists; open the push channel.
fn handle_upload_completed(state: &mut AppState, session_id: SessionId) -> UpdateResult {
    if state.phase != SessionPhase::Uploading {
        debug!("stale upload completion for {session_id} ignored");
        return UpdateResult::none();
    }

    let options = state.pending_options.take().unwrap_or_default();
    state.phase = SessionPhase::Processing;
    state.session = Some(RunSession::new(session_id.clone(), options.clone()));
    state.push_console(ConsoleEntry::success("Upload complete. Starting process..."));

    UpdateResult::action(UpdateAction::OpenChannel {
        session_id,
        options,
    })
}

/// Uploading → Failed: surface the message verbatim and offer restart.
fn handle_upload_failed(state: &mut AppState, message: String) -> UpdateResult {
    if state.phase != SessionPhase::Uploading {
        debug!("stale upload failure ignored");
        return UpdateResult::none();
    }

    warn!("upload failed: {message}");
    state.phase = SessionPhase::Failed;
    state.pending_options = None;
    state.push_console(ConsoleEntry::error(format!("Error: {message}")));

    UpdateResult::none()
}

/// {Completed, Failed} → Idle: a pure view reset. The remote session is
/// never touched; a detached channel's late events are discarded by the
/// session-id guard.
fn handle_restart(state: &mut AppState) -> UpdateResult {
    if !state.phase.is_terminal() {
        debug!("restart ignored in phase {:?}", state.phase);
        return UpdateResult::none();
    }

    state.phase = SessionPhase::Idle;
    state.session = None;
    state.pending_options = None;
    state.clear_console();
    let defs = state.settings.options.clone();
    state.form.reset(&defs);

    UpdateResult::none()
}
