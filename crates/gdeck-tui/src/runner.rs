//! Main TUI run loop.
//!
//! Wires the pieces together: terminal events and background messages both
//! feed `update()`; resulting actions are dispatched without ever blocking
//! the draw loop on a network request.

use tokio::sync::mpsc;

use gdeck_app::{handle_action, update, Message, PanelState, Poller};
use gdeck_client::DeviceClient;
use gdeck_core::prelude::*;

use crate::{event, render, terminal};

/// Run the panel until the user quits.
pub async fn run(client: DeviceClient) -> Result<()> {
    terminal::install_panic_hook();
    let mut term = ratatui::init();
    let result = run_loop(&mut term, client).await;
    ratatui::restore();
    result
}

async fn run_loop(term: &mut ratatui::DefaultTerminal, client: DeviceClient) -> Result<()> {
    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(256);

    let poller = Poller::spawn(client.clone(), msg_tx.clone());
    let refresh_tx = poller.refresh_handle();

    let resolver = client.resolver();
    let mut state = PanelState::new().with_endpoint(resolver.address(), resolver.token());

    if state.settings.address_input.is_empty() {
        info!("Panel started with no device address configured");
    } else {
        info!("Panel started");
    }

    while !state.is_quitting() {
        term.draw(|frame| render::view(frame, &state))
            .map_err(|e| Error::terminal(e.to_string()))?;

        // Terminal events first (blocks up to 50ms), then drain whatever the
        // background tasks have posted in the meantime.
        if let Some(message) = event::poll()? {
            process_message(&mut state, message, &client, &msg_tx, &refresh_tx);
        }
        while let Ok(message) = msg_rx.try_recv() {
            process_message(&mut state, message, &client, &msg_tx, &refresh_tx);
        }
    }

    // Cancel the poll timer; in-flight fetches finish into a closed channel.
    poller.shutdown();
    info!("Panel shut down");
    Ok(())
}

fn process_message(
    state: &mut PanelState,
    message: Message,
    client: &DeviceClient,
    msg_tx: &mpsc::Sender<Message>,
    refresh_tx: &mpsc::Sender<()>,
) {
    let mut next = Some(message);
    while let Some(message) = next.take() {
        let result = update(state, message);
        next = result.message;
        if let Some(action) = result.action {
            handle_action(action, client, msg_tx, refresh_tx);
        }
    }
}
