//! Shared utilities for integration testing.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use r3ach_api::{AppConfig, DataGateway, HttpServer};

/// Spawn the API server on an ephemeral port and return its address.
pub async fn spawn_app(config: AppConfig) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let gateway = DataGateway::new(&config).unwrap();
    let server = HttpServer::new(config, gateway);

    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}

/// Config pointing the data store at a mock upstream.
#[allow(dead_code)]
pub fn config_with_store(upstream: SocketAddr) -> AppConfig {
    let mut config = AppConfig::default();
    config.supabase.url = Some(format!("http://{upstream}"));
    config.supabase.service_role_key = Some("test-service-key".into());
    config
}

/// Config pointing the generation webhook at a mock upstream.
#[allow(dead_code)]
pub fn config_with_webhook(upstream: SocketAddr) -> AppConfig {
    let mut config = AppConfig::default();
    config.webhook.url = Some(format!("http://{upstream}/hook"));
    config
}

/// Start a programmable mock upstream.
///
/// The closure receives the raw request (head and body) and returns a
/// status code plus JSON body.
#[allow(dead_code)]
pub async fn start_mock_upstream<F, Fut>(f: F) -> SocketAddr
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let request = read_request(&mut socket).await;
                        let (status, body) = f(request).await;
                        let status_text = match status {
                            200 => "200 OK",
                            201 => "201 Created",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            502 => "502 Bad Gateway",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };
                        let response = format!(
                            "HTTP/1.1 {status_text}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                            body.len(),
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Read one HTTP request: headers, then Content-Length worth of body.
async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let headers_end = loop {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => break None,
            Ok(n) => {
                buf.extend_from_slice(&chunk[..n]);
                if let Some(pos) = find_headers_end(&buf) {
                    break Some(pos);
                }
            }
        }
    };

    if let Some(pos) = headers_end {
        let head = String::from_utf8_lossy(&buf[..pos]).to_string();
        let content_length = parse_content_length(&head);
        while buf.len() < pos + content_length {
            match socket.read(&mut chunk).await {
                Ok(0) | Err(_) => break,
                Ok(n) => buf.extend_from_slice(&chunk[..n]),
            }
        }
    }

    String::from_utf8_lossy(&buf).to_string()
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n").map(|p| p + 4)
}

fn parse_content_length(head: &str) -> usize {
    head.lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse().ok()
            } else {
                None
            }
        })
        .unwrap_or(0)
}
