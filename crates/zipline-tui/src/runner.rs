//! The main loop: terminal, input pump, and message processing

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use zipline_app::{process_message, AppState, Message};
use zipline_core::prelude::*;

use crate::{event, render, terminal};

/// Capacity of the message pump
const MESSAGE_BUFFER: usize = 256;

/// Run the UI until the user quits.
///
/// All external asynchrony funnels into one mpsc channel: the input thread
/// (key presses and ticks), the upload task, and the push-channel reader.
/// The state is owned here and only ever mutated between draws.
pub async fn run(mut state: AppState) -> Result<()> {
    terminal::install_panic_hook();
    let mut terminal = ratatui::init();

    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(MESSAGE_BUFFER);

    // Input pump: crossterm polling is blocking, so it gets its own thread
    let input_tx = msg_tx.clone();
    std::thread::spawn(move || loop {
        match event::poll() {
            Ok(Some(message)) => {
                if input_tx.blocking_send(message).is_err() {
                    break;
                }
            }
            Ok(None) => {}
            Err(err) => {
                error!("input polling failed: {err}");
                break;
            }
        }
    });

    // At most one push-channel reader at a time
    let mut channel_task: Option<JoinHandle<()>> = None;

    terminal.draw(|frame| render::view(frame, &state))?;

    while let Some(message) = msg_rx.recv().await {
        process_message(&mut state, message, &msg_tx, &mut channel_task);

        if state.should_quit {
            break;
        }

        terminal.draw(|frame| render::view(frame, &state))?;
    }

    if let Some(task) = channel_task {
        task.abort();
    }
    ratatui::restore();

    Ok(())
}
