//! Health check endpoint

use axum::extract::State;
use axum::response::Json;
use chrono::Utc;
use serde_json::{json, Value};

use crate::server_impl::Server;
use crate::traits::{Authenticator, ReportGenerator, Store};

/// `GET /health`: unauthenticated liveness probe
pub async fn health_check<S, A, R>(State(server): State<Server<S, A, R>>) -> Json<Value>
where
    S: Store + 'static,
    A: Authenticator + 'static,
    R: ReportGenerator + 'static,
{
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().timestamp(),
        "uptime_seconds": server.state().uptime_seconds(),
    }))
}
