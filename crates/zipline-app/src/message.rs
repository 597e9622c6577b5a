//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use zipline_client::ChannelEvent;
use zipline_core::SessionId;

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic redraw
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Form Messages
    // ─────────────────────────────────────────────────────────
    /// An archive path was chosen (CLI preselection or form entry)
    ArchiveSelected(PathBuf),

    /// Submit the form with the current selection and options
    Submit,

    // ─────────────────────────────────────────────────────────
    // Upload Outcome
    // ─────────────────────────────────────────────────────────
    /// The service accepted the archive
    UploadCompleted { session_id: SessionId },

    /// The upload failed; `message` is surfaced verbatim
    UploadFailed { message: String },

    // ─────────────────────────────────────────────────────────
    // Push Channel
    // ─────────────────────────────────────────────────────────
    /// Event from the push channel, tagged with its session
    Channel {
        session_id: SessionId,
        event: ChannelEvent,
    },

    // ─────────────────────────────────────────────────────────
    // Reset
    // ─────────────────────────────────────────────────────────
    /// User-initiated restart back to the form; local-only
    Restart,
}
