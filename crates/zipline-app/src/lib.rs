//! # zipline-app - Application State and Orchestration
//!
//! The session coordinator: owns [`AppState`], the [`Message`] union, and
//! the TEA-style [`update()`] function that is the single source of truth
//! for session state transitions. All external asynchrony (terminal input,
//! the upload response, push events) enters as messages, so the entire
//! state machine is testable with scripted sequences and no live
//! connection.

pub mod config;
pub mod form;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod session;
pub mod state;

pub use config::{OptionDef, OptionKind, Settings};
pub use form::{FormState, OptionControl, OptionValue};
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use process::process_message;
pub use session::{RunOutcome, RunSession};
pub use state::{AppState, ViewMode};
