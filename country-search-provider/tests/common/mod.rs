//! 共享测试工具：本地 HTTP 桩服务

#![allow(dead_code)]

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use country_search_provider::{ClientConfig, CountryClient};

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// A canned HTTP response served once.
pub struct StubResponse {
    pub status: u16,
    pub reason: &'static str,
    pub body: String,
}

impl StubResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            reason: "OK",
            body: body.to_string(),
        }
    }

    pub fn status(status: u16, reason: &'static str) -> Self {
        Self {
            status,
            reason,
            body: format!(r#"{{"status":{status},"message":"{reason}"}}"#),
        }
    }
}

/// Serve `response` to the first connection and hand back its request line.
///
/// Returns the base URL to point the client at.
pub async fn serve_once(response: StubResponse) -> std::io::Result<(String, JoinHandle<String>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let base_url = format!("http://{}", listener.local_addr()?);

    let handle = tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return String::new();
        };

        let mut request = Vec::new();
        let mut buf = [0_u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            match socket.read(&mut buf).await {
                Ok(0) | Err(_) => break,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }

        let reply = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            response.status,
            response.reason,
            response.body.len(),
            response.body
        );
        let _ = socket.write_all(reply.as_bytes()).await;
        let _ = socket.shutdown().await;

        String::from_utf8_lossy(&request)
            .lines()
            .next()
            .unwrap_or_default()
            .to_string()
    });

    Ok((base_url, handle))
}

/// Accept one connection, read the request and never answer it.
///
/// The socket stays open for `hold` so the client sees a stalled server
/// rather than a closed connection.
pub async fn serve_silently(hold: Duration) -> std::io::Result<(String, JoinHandle<()>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let base_url = format!("http://{}", listener.local_addr()?);

    let handle = tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };
        let mut buf = [0_u8; 1024];
        let _ = socket.read(&mut buf).await;
        tokio::time::sleep(hold).await;
    });

    Ok((base_url, handle))
}

/// A base URL nothing listens on.
pub async fn unreachable_base_url() -> std::io::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}"))
}

pub fn client_for(base_url: &str) -> CountryClient {
    client_with_timeout(base_url, None)
}

pub fn client_with_timeout(base_url: &str, timeout: Option<Duration>) -> CountryClient {
    let config = ClientConfig {
        base_url: base_url.to_string(),
        timeout,
    };
    match CountryClient::new(&config) {
        Ok(client) => client,
        Err(e) => panic!("failed to build client: {e}"),
    }
}
