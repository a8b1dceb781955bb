//! The state synchronization task.
//!
//! Owns the poll cadence: a fixed 2-second interval plus a "refresh now"
//! channel that command dispatch posts into, both funneling into the same
//! fetch path. Each fetch runs as its own fire-and-forget task, so a manual
//! refresh can overlap an outstanding timer fetch; whichever result lands
//! last wins, which is fine because the device is the source of truth and
//! any race self-corrects on the next poll.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use gdeck_client::DeviceClient;
use gdeck_core::prelude::*;

use crate::message::Message;

/// Fixed poll interval between automatic refreshes.
pub const POLL_INTERVAL: Duration = Duration::from_millis(2000);

/// Handle to the running synchronization task.
pub struct Poller {
    refresh_tx: mpsc::Sender<()>,
    task: JoinHandle<()>,
}

impl Poller {
    /// Spawn the synchronization loop. The first fetch fires immediately.
    pub fn spawn(client: DeviceClient, msg_tx: mpsc::Sender<Message>) -> Self {
        let (refresh_tx, mut refresh_rx) = mpsc::channel::<()>(8);

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(POLL_INTERVAL);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {}
                    refresh = refresh_rx.recv() => {
                        if refresh.is_none() {
                            // All refresh senders dropped; the panel is gone.
                            break;
                        }
                    }
                }

                let client = client.clone();
                let tx = msg_tx.clone();
                tokio::spawn(async move {
                    let result = client.fetch_state().await.map_err(|e| {
                        debug!("Poll fetch failed: {}", e);
                        e.to_string()
                    });
                    // Ignored when the consuming loop has shut down; the
                    // result is simply dropped, never applied.
                    let _ = tx.send(Message::StateFetched { result }).await;
                });
            }
        });

        Self { refresh_tx, task }
    }

    /// A sender that triggers an immediate refresh when posted into.
    pub fn refresh_handle(&self) -> mpsc::Sender<()> {
        self.refresh_tx.clone()
    }

    /// Cancel the poll timer. In-flight fetches are not aborted; their
    /// results are disregarded once the message receiver is gone.
    pub fn shutdown(&self) {
        self.task.abort();
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.task.abort();
    }
}
