//! Main server implementation
//!
//! Wires the injected services into an axum router. Handlers stay unaware
//! of which authenticator or report backend is plugged in.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use crate::traits::{Authenticator, ReportGenerator, Store};
use crate::web::handlers::{admin, auth, business, health, reports};

/// Main server struct with dependency injection
pub struct Server<S, A, R>
where
    S: Store + 'static,
    A: Authenticator + 'static,
    R: ReportGenerator + 'static,
{
    state: Arc<ServerState>,
    store: Arc<S>,
    authenticator: Arc<A>,
    report_generator: Arc<R>,
}

impl<S, A, R> Clone for Server<S, A, R>
where
    S: Store + 'static,
    A: Authenticator + 'static,
    R: ReportGenerator + 'static,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            store: Arc::clone(&self.store),
            authenticator: Arc::clone(&self.authenticator),
            report_generator: Arc::clone(&self.report_generator),
        }
    }
}

impl<S, A, R> Server<S, A, R>
where
    S: Store + 'static,
    A: Authenticator + 'static,
    R: ReportGenerator + 'static,
{
    /// Create a new server with injected services
    pub fn new(bind_address: SocketAddr, store: S, authenticator: A, report_generator: R) -> Self {
        Self {
            state: Arc::new(ServerState::new(bind_address)),
            store: Arc::new(store),
            authenticator: Arc::new(authenticator),
            report_generator: Arc::new(report_generator),
        }
    }

    /// Build the axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            // Authentication
            .route("/api/auth/login", post(auth::login::<S, A, R>))
            // Admin routes
            .route(
                "/api/admin/users",
                get(admin::list_accountants::<S, A, R>).post(admin::create_accountant::<S, A, R>),
            )
            // Accountant routes
            .route(
                "/api/businesses",
                get(business::list_businesses::<S, A, R>).post(business::create_business::<S, A, R>),
            )
            // Report generation
            .route("/api/reports/generate", post(reports::generate_report::<S, A, R>))
            // Health check
            .route("/health", get(health::health_check::<S, A, R>))
            .layer(ServiceBuilder::new().layer(CorsLayer::permissive()).into_inner())
            .with_state(self.clone())
    }

    /// Start the server and block until shutdown
    pub async fn run(&self) -> ServerResult<()> {
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(self.state.bind_address)
            .await
            .map_err(|e| {
                ServerError::ServerStartup(format!(
                    "Failed to bind to {}: {e}",
                    self.state.bind_address
                ))
            })?;

        tracing::info!("payroll backend listening on http://{}", self.state.bind_address);

        let server_task = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                tracing::error!("server error: {e}");
            }
        });

        tokio::select! {
            _ = server_task => {
                tracing::info!("HTTP server task completed");
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("received shutdown signal");
                self.state.set_running(false);
            }
        }

        Ok(())
    }

    pub fn state(&self) -> &ServerState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn authenticator(&self) -> &A {
        &self.authenticator
    }

    pub fn report_generator(&self) -> &R {
        &self.report_generator
    }
}
