//! Message processing and background task dispatch
//!
//! `process_message` drives the TEA loop: it feeds a message (and any
//! follow-ups) through `update()` and spawns the background work the
//! returned actions name. The runtime owns exactly one channel-reader task
//! at a time; opening a new session aborts the previous reader, and the
//! session-id tag on forwarded messages lets the handler discard anything
//! a dying reader still had in flight.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use zipline_client::{open_channel, ChannelEvent, UploadClient};
use zipline_core::prelude::*;

use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function, dispatching actions
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    channel_task: &mut Option<JoinHandle<()>>,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, state, msg_tx, channel_task);
        }

        msg = result.message;
    }
}

/// Execute an action by spawning a background task
fn handle_action(
    action: UpdateAction,
    state: &AppState,
    msg_tx: &mpsc::Sender<Message>,
    channel_task: &mut Option<JoinHandle<()>>,
) {
    match action {
        UpdateAction::SubmitUpload { archive } => {
            let client = UploadClient::new(state.server.clone());
            let tx = msg_tx.clone();
            tokio::spawn(async move {
                let message = match client.submit(&archive).await {
                    Ok(session_id) => Message::UploadCompleted { session_id },
                    Err(err) => {
                        warn!("upload failed: {err}");
                        Message::UploadFailed {
                            message: err.console_message(),
                        }
                    }
                };
                let _ = tx.send(message).await;
            });
        }

        UpdateAction::OpenChannel {
            session_id,
            options,
        } => {
            // One subscription at a time; a reader left over from a
            // previous session is detached here.
            if let Some(task) = channel_task.take() {
                task.abort();
            }

            let base = state.server.clone();
            let tx = msg_tx.clone();
            *channel_task = Some(tokio::spawn(async move {
                match open_channel(&base, &session_id, &options).await {
                    Ok(mut events) => {
                        while let Some(event) = events.recv().await {
                            let forwarded = Message::Channel {
                                session_id: session_id.clone(),
                                event,
                            };
                            if tx.send(forwarded).await.is_err() {
                                return;
                            }
                        }
                    }
                    Err(err) => {
                        warn!("failed to open push channel: {err}");
                        let _ = tx
                            .send(Message::Channel {
                                session_id: session_id.clone(),
                                event: ChannelEvent::Closed {
                                    reason: Some(err.to_string()),
                                },
                            })
                            .await;
                    }
                }
            }));
        }
    }
}
