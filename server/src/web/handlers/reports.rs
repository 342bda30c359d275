//! Report generation endpoint

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Json;

use crate::error::ServerResult;
use crate::server_impl::Server;
use crate::traits::{Authenticator, ReportGenerator, Store};
use crate::types::{ReportRequest, ReportResponse};

/// `POST /api/reports/generate`
///
/// Relays the generated text verbatim. A missing API key and a provider
/// failure both surface as 500 with a `message` body; only the former names
/// the configuration problem.
pub async fn generate_report<S, A, R>(
    State(server): State<Server<S, A, R>>,
    headers: HeaderMap,
    Json(request): Json<ReportRequest>,
) -> ServerResult<Json<ReportResponse>>
where
    S: Store + 'static,
    A: Authenticator + 'static,
    R: ReportGenerator + 'static,
{
    server.authenticator().authenticate(&headers).await?;

    let summary = server
        .report_generator()
        .generate_summary(&request.business_name, &request.employees, &request.month_year)
        .await?;

    Ok(Json(ReportResponse { summary }))
}
