//! Main TUI runner - entry point and event loop

use storefront_app::{process_message, spawn_signal_handler, AppState, Message};
use storefront_client::OrderSubmitter;
use storefront_core::prelude::*;
use tokio::sync::mpsc;

use crate::{event, render, terminal};

/// Run the storefront until the customer quits or a signal arrives
pub async fn run<S>(mut state: AppState, submitter: S) -> Result<()>
where
    S: OrderSubmitter + Clone + Send + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    debug!(destination = %submitter.destination(), "Entering TUI loop");

    let mut term = ratatui::init();

    // Unified channel for signal handler and order results
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Sends Message::Quit on SIGINT/SIGTERM
    spawn_signal_handler(msg_tx.clone());

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &submitter);

    ratatui::restore();

    if state.checkout.is_submitting() {
        warn!("Quit while an order submission was still in flight");
    }
    info!("GREEN storefront stopped");

    result
}

fn run_loop<S>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    submitter: &S,
) -> Result<()>
where
    S: OrderSubmitter + Clone + Send + Sync + 'static,
{
    while !state.should_quit() {
        // Signals and submission results
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, submitter);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, submitter);
        }
    }

    Ok(())
}
