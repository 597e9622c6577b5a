//! # zipline-core - Core Domain Types
//!
//! Foundation crate for zipline. Provides session domain types, server event
//! definitions, error handling, and the logging bootstrap.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`SessionPhase`] - Session lifecycle phase (Idle, Uploading, Processing, ...)
//! - [`SessionId`] - Opaque server-assigned session identifier
//! - [`ConsoleEntry`] - A single console line with severity and timestamp
//! - [`Severity`] - Console line severity (Info, Success, Warning, Error, Default)
//!
//! ### Events (`events`)
//! - [`ServerEvent`] - Parsed push events from the processing service
//!
//! ### Results (`results`)
//! - [`CompletionPayload`] - Final run output (file tree + metric report)
//! - [`FileNode`], [`ReportEntry`], [`Classification`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`

pub mod error;
pub mod events;
pub mod logging;
pub mod markup;
pub mod results;
pub mod types;

/// Prelude for common imports used throughout all zipline crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use events::{AnalysisComplete, CreditsUpdated, FatalError, ServerEvent, StatusUpdate};
pub use markup::strip_markup_tags;
pub use results::{Classification, CompletionPayload, FileKind, FileNode, ReportEntry};
pub use types::{ConsoleEntry, SessionId, SessionPhase, Severity};
