//! Integration tests for `DeviceClient` against a mock device.
//!
//! The mock is a minimal HTTP/1.1 responder on a loopback `TcpListener`:
//! it records each request (head + body) and answers with a canned
//! response, which is all the single-request-per-connection client needs.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use gdeck_client::{DeviceClient, EndpointConfig, EndpointResolver, MemoryStore};
use gdeck_core::{Error, Rgb};

// ─────────────────────────────────────────────────────────────────────────────
// Mock device
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
struct RecordedRequest {
    head: String,
    body: String,
}

impl RecordedRequest {
    fn request_line(&self) -> &str {
        self.head.lines().next().unwrap_or_default()
    }

    fn has_header(&self, needle: &str) -> bool {
        self.head
            .lines()
            .any(|line| line.to_ascii_lowercase().contains(&needle.to_ascii_lowercase()))
    }
}

struct MockDevice {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockDevice {
    /// Start a mock device answering every request with `response`.
    async fn spawn(response: String) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests: Arc<Mutex<Vec<RecordedRequest>>> = Arc::default();

        let log = Arc::clone(&requests);
        tokio::spawn(async move {
            loop {
                let Ok((socket, _)) = listener.accept().await else {
                    break;
                };
                tokio::spawn(handle_connection(socket, response.clone(), Arc::clone(&log)));
            }
        });

        Self { addr, requests }
    }

    fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn handle_connection(
    mut socket: TcpStream,
    response: String,
    log: Arc<Mutex<Vec<RecordedRequest>>>,
) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    // Read head, then the Content-Length-delimited body.
    let head_end = loop {
        let n = socket.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find(&buf, b"\r\n\r\n") {
            break pos;
        }
    };

    let head = String::from_utf8_lossy(&buf[..head_end]).to_string();
    let content_length = head
        .lines()
        .find_map(|line| {
            line.to_ascii_lowercase()
                .strip_prefix("content-length:")
                .map(|v| v.trim().parse::<usize>().unwrap())
        })
        .unwrap_or(0);

    let body_start = head_end + 4;
    while buf.len() < body_start + content_length {
        let n = socket.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let body = String::from_utf8_lossy(buf.get(body_start..).unwrap_or_default()).to_string();
    log.lock().unwrap().push(RecordedRequest { head, body });

    socket.write_all(response.as_bytes()).await.unwrap();
    let _ = socket.shutdown().await;
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn http_response(status: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    )
}

fn state_body() -> String {
    r#"{
        "success": true,
        "state": {
            "power": true,
            "rgb": { "r": 10, "g": 20, "b": 30 },
            "brightness": 180,
            "effect": 6,
            "effectName": "Fire",
            "wifiConnected": true,
            "deviceName": "ESP8266-RGB",
            "uptime": 90000,
            "freeMemory": 31744
        }
    }"#
    .to_string()
}

fn client_for(addr: SocketAddr, token: Option<&str>) -> DeviceClient {
    let store = MemoryStore::with_config(EndpointConfig {
        address: Some(addr.to_string()),
        token: token.map(String::from),
    });
    DeviceClient::new(EndpointResolver::new(Arc::new(store)))
}

// ─────────────────────────────────────────────────────────────────────────────
// fetch_state
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_fetch_state_returns_snapshot_unchanged() {
    let device = MockDevice::spawn(http_response("200 OK", &state_body())).await;
    let client = client_for(device.addr, None);

    let snapshot = client.fetch_state().await.unwrap();
    assert!(snapshot.power);
    assert_eq!(snapshot.rgb, Rgb::new(10, 20, 30));
    assert_eq!(snapshot.brightness, 180);
    assert_eq!(snapshot.effect_name, "Fire");
    assert_eq!(snapshot.uptime, 90_000);

    let requests = device.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].request_line(), "GET /state HTTP/1.1");
}

#[tokio::test]
async fn test_bearer_header_only_when_token_configured() {
    let device = MockDevice::spawn(http_response("200 OK", &state_body())).await;

    let without_token = client_for(device.addr, None);
    without_token.fetch_state().await.unwrap();

    let with_token = client_for(device.addr, Some("s3cret"));
    with_token.fetch_state().await.unwrap();

    let requests = device.requests();
    assert_eq!(requests.len(), 2);
    assert!(!requests[0].has_header("authorization"));
    assert!(requests[1].has_header("authorization: Bearer s3cret"));
}

#[tokio::test]
async fn test_non_2xx_maps_to_http_status() {
    let device = MockDevice::spawn(http_response("503 Service Unavailable", "{}")).await;
    let client = client_for(device.addr, None);

    let err = client.fetch_state().await.unwrap_err();
    assert!(matches!(err, Error::HttpStatus { code: 503 }));
}

#[tokio::test]
async fn test_success_false_maps_to_protocol_error() {
    let body = state_body().replace(r#""success": true"#, r#""success": false"#);
    let device = MockDevice::spawn(http_response("200 OK", &body)).await;
    let client = client_for(device.addr, None);

    let err = client.fetch_state().await.unwrap_err();
    assert!(matches!(err, Error::Protocol { .. }));
}

#[tokio::test]
async fn test_malformed_body_maps_to_decode_error() {
    let device = MockDevice::spawn(http_response("200 OK", r#"{"success": true}"#)).await;
    let client = client_for(device.addr, None);

    let err = client.fetch_state().await.unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

#[tokio::test]
async fn test_unreachable_device_maps_to_transport_error() {
    // Bind then drop a listener so the port is (very likely) unoccupied.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(addr, None);
    let err = client.fetch_state().await.unwrap_err();
    assert!(matches!(err, Error::Transport { .. }));
}

// ─────────────────────────────────────────────────────────────────────────────
// send_command
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_send_command_posts_cmd_body() {
    let device = MockDevice::spawn(http_response(
        "200 OK",
        r#"{"success":true,"message":"Command executed: power on"}"#,
    ))
    .await;
    let client = client_for(device.addr, None);

    let outcome = client.send_command("power on").await.unwrap();
    assert!(outcome.success);
    assert_eq!(outcome.message, "Command executed: power on");

    let requests = device.requests();
    assert_eq!(requests[0].request_line(), "POST /command HTTP/1.1");
    assert_eq!(requests[0].body, r#"{"cmd":"power on"}"#);
}

#[tokio::test]
async fn test_leading_slash_produces_identical_body() {
    let device = MockDevice::spawn(http_response(
        "200 OK",
        r#"{"success":true,"message":"ok"}"#,
    ))
    .await;
    let client = client_for(device.addr, None);

    client.send_command("/power on").await.unwrap();
    client.send_command("power on").await.unwrap();

    let requests = device.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].body, requests[1].body);
}

#[tokio::test]
async fn test_command_failure_verdict_is_not_an_error() {
    // The interpreter saying "no" is a valid outcome, not a protocol failure.
    let device = MockDevice::spawn(http_response(
        "200 OK",
        r#"{"success":false,"message":"Unknown command: blarg"}"#,
    ))
    .await;
    let client = client_for(device.addr, None);

    let outcome = client.send_command("blarg").await.unwrap();
    assert!(!outcome.success);
    assert_eq!(outcome.message, "Unknown command: blarg");
}

#[tokio::test]
async fn test_typed_encoders_hit_the_command_endpoint() {
    let device = MockDevice::spawn(http_response(
        "200 OK",
        r#"{"success":true,"message":"ok"}"#,
    ))
    .await;
    let client = client_for(device.addr, None);

    client.set_power(true).await.unwrap();
    client.set_rgb(Rgb::new(1, 2, 3)).await.unwrap();
    client.set_brightness(42).await.unwrap();
    client.set_effect(7).await.unwrap();
    client.set_scene("Night").await.unwrap();
    client.restart().await.unwrap();

    let bodies: Vec<String> = device.requests().iter().map(|r| r.body.clone()).collect();
    assert_eq!(
        bodies,
        vec![
            r#"{"cmd":"power on"}"#,
            r#"{"cmd":"rgb 1 2 3"}"#,
            r#"{"cmd":"brightness 42"}"#,
            r#"{"cmd":"effect 7"}"#,
            r#"{"cmd":"scene night"}"#,
            r#"{"cmd":"restart"}"#,
        ]
    );
}
