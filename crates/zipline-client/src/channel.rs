//! Push channel: one WebSocket subscription per session
//!
//! After connecting, the client sends a single kickoff frame carrying the
//! session identifier and the collected option set, then forwards every
//! inbound event through a bounded mpsc channel in arrival order. A dropped
//! connection ends the stream with [`ChannelEvent::Closed`] — no
//! reconnection, no fabricated terminal event.

use futures_util::{SinkExt, StreamExt};
use serde_json::json;
use tokio::sync::mpsc;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::protocol::Message as WsMessage;
use url::Url;

use zipline_core::prelude::*;
use zipline_core::{ServerEvent, SessionId};

/// Capacity of the event forwarding channel
const EVENT_BUFFER: usize = 64;

/// What the subscriber receives from the push channel
#[derive(Debug, Clone)]
pub enum ChannelEvent {
    /// A typed server event, in server-emission order
    Event(ServerEvent),
    /// The connection ended; no further events will arrive
    Closed { reason: Option<String> },
}

/// Derive the push-channel endpoint from the HTTP base URL
pub fn ws_url(base: &Url) -> Result<Url> {
    let mut url = base
        .join("tools/stream")
        .map_err(|_| Error::invalid_url(base.as_str()))?;
    let scheme = match url.scheme() {
        "http" => "ws",
        "https" => "wss",
        other => return Err(Error::invalid_url(format!("{other}://"))),
    };
    url.set_scheme(scheme)
        .map_err(|_| Error::invalid_url(base.as_str()))?;
    Ok(url)
}

/// The kickoff frame sent immediately after connecting
fn kickoff_frame(session_id: &SessionId, options: &serde_json::Map<String, serde_json::Value>) -> String {
    json!({
        "event": "run.start",
        "params": {
            "session_id": session_id.as_str(),
            "options": options,
        },
    })
    .to_string()
}

/// Open the push channel for a session.
///
/// Connects, sends the kickoff frame, and spawns a background reader that
/// forwards typed events until the connection ends. The receiver is the
/// single subscriber; dropping it detaches the reader.
///
/// # Errors
///
/// Returns [`Error::WebSocket`] if the connect or kickoff send fails.
/// Failures after that point surface as [`ChannelEvent::Closed`] on the
/// stream instead.
pub async fn open_channel(
    base: &Url,
    session_id: &SessionId,
    options: &serde_json::Map<String, serde_json::Value>,
) -> Result<mpsc::Receiver<ChannelEvent>> {
    let url = ws_url(base)?;
    info!("opening push channel for session {session_id} at {url}");

    let (ws_stream, _) = connect_async(url.as_str())
        .await
        .map_err(|e| Error::web_socket(e.to_string()))?;
    let (mut writer, mut reader) = ws_stream.split();

    writer
        .send(WsMessage::Text(
            kickoff_frame(session_id, options).into(),
        ))
        .await
        .map_err(|e| Error::web_socket(e.to_string()))?;

    let (tx, rx) = mpsc::channel(EVENT_BUFFER);
    let id = session_id.clone();

    tokio::spawn(async move {
        while let Some(frame) = reader.next().await {
            match frame {
                Ok(WsMessage::Text(text)) => match ServerEvent::parse(text.as_str()) {
                    Some(event) => {
                        debug!("session {id}: {}", event.summary());
                        if tx.send(ChannelEvent::Event(event)).await.is_err() {
                            // Subscriber gone (session was reset); stop reading
                            return;
                        }
                    }
                    None => warn!("session {id}: unparseable frame: {text}"),
                },
                Ok(WsMessage::Close(frame)) => {
                    let reason = frame.map(|f| f.reason.to_string());
                    let _ = tx.send(ChannelEvent::Closed { reason }).await;
                    return;
                }
                Ok(_) => {}
                Err(err) => {
                    warn!("session {id}: websocket receive failed: {err}");
                    let _ = tx
                        .send(ChannelEvent::Closed {
                            reason: Some(err.to_string()),
                        })
                        .await;
                    return;
                }
            }
        }
        let _ = tx.send(ChannelEvent::Closed { reason: None }).await;
    });

    Ok(rx)
}
