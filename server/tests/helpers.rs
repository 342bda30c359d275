//! Test helper utilities for server integration tests

use std::net::SocketAddr;

use server::services::{GeminiReportGenerator, MemoryStore, NoOpAuthenticator};
use server::traits::{Authenticator, ReportGenerator, Store};
use server::Server;

/// Spawn the given server on an ephemeral local port and return its address
pub async fn spawn_server<S, A, R>(server: Server<S, A, R>) -> SocketAddr
where
    S: Store + 'static,
    A: Authenticator + 'static,
    R: ReportGenerator + 'static,
{
    let router = server.build_router();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    addr
}

/// Spawn a server with the production wiring: seeded store, pass-through gate
pub async fn spawn_default_server() -> SocketAddr {
    let bind_addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
    let server = Server::new(
        bind_addr,
        MemoryStore::new(),
        NoOpAuthenticator,
        GeminiReportGenerator::new(),
    );
    spawn_server(server).await
}
