//! Handler module - TEA update function
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `channel`: Push-event handling (the session state machine's core)
//! - `keys`: Key event handling per view mode

pub(crate) mod channel;
pub(crate) mod keys;
pub(crate) mod update;


use std::path::PathBuf;

use serde_json::{Map, Value};

use zipline_core::SessionId;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Upload the selected archive in the background
    SubmitUpload { archive: PathBuf },

    /// Open the push channel and send the kickoff frame
    OpenChannel {
        session_id: SessionId,
        options: Map<String, Value>,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
