//! Login endpoint

use axum::extract::State;
use axum::response::Json;

use crate::error::{ServerError, ServerResult};
use crate::server_impl::Server;
use crate::services::session_token;
use crate::traits::{Authenticator, ReportGenerator, Store};
use crate::types::{LoginRequest, LoginResponse};
use shared::AccountView;

/// `POST /api/auth/login`
///
/// The login route itself is unprotected. On a match the response carries a
/// fabricated session token and the sanitized account view; on no match the
/// 401 body is identical for unknown emails and wrong passwords.
pub async fn login<S, A, R>(
    State(server): State<Server<S, A, R>>,
    Json(request): Json<LoginRequest>,
) -> ServerResult<Json<LoginResponse>>
where
    S: Store + 'static,
    A: Authenticator + 'static,
    R: ReportGenerator + 'static,
{
    let account = server
        .store()
        .find_account_by_credentials(&request.email, &request.password)
        .await
        .ok_or(ServerError::InvalidCredentials)?;

    tracing::info!(account_id = %account.id, "login succeeded");

    Ok(Json(LoginResponse {
        token: session_token(&account.id),
        user: AccountView::from(&account),
    }))
}
