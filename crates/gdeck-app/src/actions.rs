//! Action handlers: UpdateAction dispatch and background task spawning

use tokio::sync::mpsc;

use gdeck_client::DeviceClient;
use gdeck_core::prelude::*;

use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action produced by `update()`.
///
/// Command dispatch runs as a background task posting a `CommandFinished`
/// message when done; a dispatch never waits for an in-flight poll and a
/// poll never waits for a dispatch. Configuration writes are small
/// synchronous file operations and complete inline.
pub fn handle_action(
    action: UpdateAction,
    client: &DeviceClient,
    msg_tx: &mpsc::Sender<Message>,
    refresh_tx: &mpsc::Sender<()>,
) {
    match action {
        UpdateAction::Dispatch { command, origin } => {
            let client = client.clone();
            let tx = msg_tx.clone();
            tokio::spawn(async move {
                let result = client
                    .send_command(&command)
                    .await
                    .map_err(|e| e.to_string());
                let _ = tx
                    .send(Message::CommandFinished {
                        command,
                        origin,
                        result,
                    })
                    .await;
            });
        }

        UpdateAction::RefreshNow => {
            // Full queue means a refresh is already pending; that one will
            // observe at least as fresh a state as this one would.
            if let Err(e) = refresh_tx.try_send(()) {
                debug!("Refresh request dropped: {}", e);
            }
        }

        UpdateAction::SaveAddress { address } => {
            let result = client.resolver().set_address(&address);
            post_config_result(msg_tx, "Address saved", result);
        }

        UpdateAction::ClearAddress => {
            let result = client.resolver().clear_address();
            post_config_result(msg_tx, "Address cleared", result);
        }

        UpdateAction::SaveToken { token } => {
            let result = client.resolver().set_token(&token);
            post_config_result(msg_tx, "Token saved", result);
        }

        UpdateAction::ClearToken => {
            let result = client.resolver().clear_token();
            post_config_result(msg_tx, "Token cleared", result);
        }
    }
}

fn post_config_result(msg_tx: &mpsc::Sender<Message>, label: &'static str, result: Result<()>) {
    if let Err(ref e) = result {
        warn!("{} failed: {}", label, e);
    }
    let message = Message::ConfigSaved {
        label,
        result: result.map_err(|e| e.to_string()),
    };
    if msg_tx.try_send(message).is_err() {
        debug!("Config result dropped; panel is shutting down");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::message::CommandOrigin;
    use gdeck_client::{EndpointResolver, MemoryStore};

    fn unconfigured_client() -> DeviceClient {
        DeviceClient::new(EndpointResolver::new(Arc::new(MemoryStore::new())))
    }

    async fn recv(rx: &mut mpsc::Receiver<Message>) -> Message {
        tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("message expected")
            .expect("channel open")
    }

    #[tokio::test]
    async fn test_dispatch_posts_command_finished() {
        let (msg_tx, mut msg_rx) = mpsc::channel(16);
        let (refresh_tx, _refresh_rx) = mpsc::channel(8);

        handle_action(
            UpdateAction::Dispatch {
                command: "power on".to_string(),
                origin: CommandOrigin::Ui,
            },
            &unconfigured_client(),
            &msg_tx,
            &refresh_tx,
        );

        match recv(&mut msg_rx).await {
            Message::CommandFinished {
                command,
                origin,
                result,
            } => {
                assert_eq!(command, "power on");
                assert_eq!(origin, CommandOrigin::Ui);
                // No address configured: dispatch fails, and that failure is
                // reported rather than swallowed.
                assert!(result.is_err());
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_two_dispatches_finish_independently() {
        let (msg_tx, mut msg_rx) = mpsc::channel(16);
        let (refresh_tx, _refresh_rx) = mpsc::channel(8);
        let client = unconfigured_client();

        for command in ["power on", "power off"] {
            handle_action(
                UpdateAction::Dispatch {
                    command: command.to_string(),
                    origin: CommandOrigin::Ui,
                },
                &client,
                &msg_tx,
                &refresh_tx,
            );
        }

        let mut finished = Vec::new();
        for _ in 0..2 {
            if let Message::CommandFinished { command, .. } = recv(&mut msg_rx).await {
                finished.push(command);
            }
        }
        finished.sort();
        assert_eq!(finished, vec!["power off", "power on"]);
    }

    #[tokio::test]
    async fn test_refresh_now_posts_into_refresh_channel() {
        let (msg_tx, _msg_rx) = mpsc::channel(16);
        let (refresh_tx, mut refresh_rx) = mpsc::channel(8);

        handle_action(
            UpdateAction::RefreshNow,
            &unconfigured_client(),
            &msg_tx,
            &refresh_tx,
        );
        assert!(refresh_rx.try_recv().is_ok());
    }

    #[tokio::test]
    async fn test_save_address_roundtrips_through_store() {
        let (msg_tx, mut msg_rx) = mpsc::channel(16);
        let (refresh_tx, _refresh_rx) = mpsc::channel(8);
        let client = unconfigured_client();

        handle_action(
            UpdateAction::SaveAddress {
                address: "192.168.1.42".to_string(),
            },
            &client,
            &msg_tx,
            &refresh_tx,
        );

        assert_eq!(
            client.resolver().address().as_deref(),
            Some("192.168.1.42")
        );
        match recv(&mut msg_rx).await {
            Message::ConfigSaved { label, result } => {
                assert_eq!(label, "Address saved");
                assert!(result.is_ok());
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_save_empty_address_reports_validation_error() {
        let (msg_tx, mut msg_rx) = mpsc::channel(16);
        let (refresh_tx, _refresh_rx) = mpsc::channel(8);
        let client = unconfigured_client();

        handle_action(
            UpdateAction::SaveAddress {
                address: "   ".to_string(),
            },
            &client,
            &msg_tx,
            &refresh_tx,
        );

        assert!(client.resolver().address().is_none());
        match recv(&mut msg_rx).await {
            Message::ConfigSaved { result, .. } => {
                assert!(result.unwrap_err().contains("must not be empty"));
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_clear_address_removes_stored_value() {
        let (msg_tx, mut msg_rx) = mpsc::channel(16);
        let (refresh_tx, _refresh_rx) = mpsc::channel(8);
        let client = unconfigured_client();
        client.resolver().set_address("10.0.0.9").unwrap();

        handle_action(
            UpdateAction::ClearAddress,
            &client,
            &msg_tx,
            &refresh_tx,
        );

        assert!(client.resolver().address().is_none());
        assert!(client.resolver().base_url().is_none());
        match recv(&mut msg_rx).await {
            Message::ConfigSaved { label, result } => {
                assert_eq!(label, "Address cleared");
                assert!(result.is_ok());
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }
}
