//! End-to-end checks of the reqwest transport against a throwaway local server

use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

use seeker_tui::{HttpTransport, NetworkResponse, SearchClient, SearchError};

/// What the server saw
struct Captured {
    head: String,
    body: String,
}

/// Serve exactly one request with a canned status and body.
async fn serve_once(status: u16, body: &'static str) -> (String, oneshot::Receiver<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/search", listener.local_addr().unwrap());
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let captured = read_request(&mut stream).await;
        let response = format!(
            "HTTP/1.1 {} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.ok();
        let _ = tx.send(captured);
    });

    (url, rx)
}

async fn read_request(stream: &mut TcpStream) -> Captured {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let n = stream.read(&mut chunk).await.unwrap();
        assert!(n > 0, "client closed before sending headers");
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    Captured {
        head,
        body: String::from_utf8_lossy(&buf[header_end..]).to_string(),
    }
}

fn client(url: &str, timeout: Option<Duration>) -> SearchClient {
    SearchClient::new(Arc::new(HttpTransport::new(timeout)), url)
}

#[tokio::test]
async fn test_post_json_and_read_results() {
    let (url, captured) = serve_once(200, r#"{"results":["https://a.com","https://b.com"]}"#).await;

    let results = client(&url, None).search("cats & dogs").await.unwrap();
    assert_eq!(results, vec!["https://a.com", "https://b.com"]);

    let captured = captured.await.unwrap();
    assert!(captured.head.starts_with("POST /search HTTP/1.1"));
    assert!(captured
        .head
        .to_ascii_lowercase()
        .contains("content-type: application/json"));
    assert_eq!(captured.body, r#"{"query":"cats & dogs"}"#);
}

#[tokio::test]
async fn test_empty_query_reaches_server() {
    let (url, captured) = serve_once(200, r#"{"results":[]}"#).await;
    let results = client(&url, None).search("").await.unwrap();
    assert!(results.is_empty());
    assert_eq!(captured.await.unwrap().body, r#"{"query":""}"#);
}

#[tokio::test]
async fn test_server_error_status() {
    let (url, _captured) = serve_once(500, r#"{"results":["https://ignored.com"]}"#).await;
    let err = client(&url, None).search("x").await.unwrap_err();
    assert_eq!(err, SearchError::Status(500));
}

#[tokio::test]
async fn test_bad_json_body() {
    let (url, _captured) = serve_once(200, "<html>not json</html>").await;
    let err = client(&url, None).search("x").await.unwrap_err();
    assert!(matches!(err, SearchError::Decode(_)));
}

#[tokio::test]
async fn test_backend_nested_results_shape() {
    let (url, _captured) =
        serve_once(200, r#"{"query":"x","results":{"google_results":[],"wikipedia_results":[]}}"#).await;
    let err = client(&url, None).search("x").await.unwrap_err();
    assert!(matches!(err, SearchError::Shape(_)));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/search", listener.local_addr().unwrap());
    drop(listener);

    let response = seeker_tui::network::client::run_search(&client(&url, None), 1, String::from("x")).await;
    assert!(matches!(
        response,
        NetworkResponse::Failed { id: 1, error: SearchError::Transport(_), .. }
    ));
}

#[tokio::test]
async fn test_configured_timeout_applies() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/search", listener.local_addr().unwrap());
    // Accept and then never answer
    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(10)).await;
        drop(stream);
    });

    let err = client(&url, Some(Duration::from_millis(300)))
        .search("x")
        .await
        .unwrap_err();
    assert!(matches!(err, SearchError::Transport(msg) if msg.contains("timed out")));
}
