//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;

use hello_echo::{Clock, EchoConfig, HttpServer, Shutdown};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A server running on an ephemeral local port.
pub struct RunningServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub task: JoinHandle<Result<(), std::io::Error>>,
}

impl RunningServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start a plain HTTP server reading time from `clock`.
pub async fn start_server(config: EchoConfig, clock: Arc<dyn Clock>) -> RunningServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::with_clock(config, clock).unwrap();

    let task = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    RunningServer {
        addr,
        shutdown,
        task,
    }
}

/// Client without connection pooling or proxy detection.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
