//! # zipline-client - Network Edge
//!
//! The two collaborator-facing pieces of zipline:
//!
//! - [`UploadClient`] — one-shot archive submission over HTTP. Returns the
//!   server-assigned session identifier or a structured failure whose
//!   message is surfaced verbatim in the console.
//! - [`channel`] — the persistent push channel. One WebSocket subscription
//!   per session; events arrive strictly in server-emission order through
//!   an mpsc receiver. A dropped connection ends the stream with
//!   [`ChannelEvent::Closed`]; no reconnection is attempted and no terminal
//!   event is fabricated.

pub mod channel;
pub mod upload;

pub use channel::{open_channel, ws_url, ChannelEvent};
pub use upload::{download_url, UploadClient};
