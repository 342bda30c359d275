//! Business endpoints
//!
//! The collection is not scoped to the authenticated account; every caller
//! sees every business. Employee and payment mutation endpoints are
//! anticipated extension points and do not exist yet.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::Json;

use crate::error::ServerResult;
use crate::server_impl::Server;
use crate::traits::{Authenticator, ReportGenerator, Store};
use crate::types::CreateBusinessRequest;
use shared::Business;

/// `GET /api/businesses`: the full unscoped collection
pub async fn list_businesses<S, A, R>(
    State(server): State<Server<S, A, R>>,
    headers: HeaderMap,
) -> ServerResult<Json<Vec<Business>>>
where
    S: Store + 'static,
    A: Authenticator + 'static,
    R: ReportGenerator + 'static,
{
    server.authenticator().authenticate(&headers).await?;

    let businesses = server.store().list_businesses().await;
    Ok(Json(businesses))
}

/// `POST /api/businesses`: create a business with an empty employee list
pub async fn create_business<S, A, R>(
    State(server): State<Server<S, A, R>>,
    headers: HeaderMap,
    Json(request): Json<CreateBusinessRequest>,
) -> ServerResult<(StatusCode, Json<Business>)>
where
    S: Store + 'static,
    A: Authenticator + 'static,
    R: ReportGenerator + 'static,
{
    server.authenticator().authenticate(&headers).await?;

    let business = server
        .store()
        .append_business(&request.name, &request.industry)
        .await;

    tracing::info!(business_id = %business.id, "business created");

    Ok((StatusCode::CREATED, Json(business)))
}
