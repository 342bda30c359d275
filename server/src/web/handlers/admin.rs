//! Account administration endpoints
//!
//! Admin-only in intent; the pass-through gate does not enforce the role.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::Json;

use crate::error::ServerResult;
use crate::server_impl::Server;
use crate::traits::{Authenticator, ReportGenerator, Store};
use crate::types::CreateAccountRequest;
use shared::{Account, AccountView, Role};

/// `GET /api/admin/users`: all accountant accounts, sanitized
///
/// The seeded admin never appears here.
pub async fn list_accountants<S, A, R>(
    State(server): State<Server<S, A, R>>,
    headers: HeaderMap,
) -> ServerResult<Json<Vec<AccountView>>>
where
    S: Store + 'static,
    A: Authenticator + 'static,
    R: ReportGenerator + 'static,
{
    server.authenticator().authenticate(&headers).await?;

    let accounts = server.store().list_accounts_by_role(Role::Accountant).await;
    Ok(Json(accounts.iter().map(AccountView::from).collect()))
}

/// `POST /api/admin/users`: create an accountant
///
/// The created role is always accountant regardless of the request body.
/// The 201 body is the full record, plaintext password included (existing
/// API contract).
pub async fn create_accountant<S, A, R>(
    State(server): State<Server<S, A, R>>,
    headers: HeaderMap,
    Json(request): Json<CreateAccountRequest>,
) -> ServerResult<(StatusCode, Json<Account>)>
where
    S: Store + 'static,
    A: Authenticator + 'static,
    R: ReportGenerator + 'static,
{
    server.authenticator().authenticate(&headers).await?;

    let account = server
        .store()
        .append_account(&request.name, &request.email, &request.password)
        .await;

    tracing::info!(account_id = %account.id, "accountant created");

    Ok((StatusCode::CREATED, Json(account)))
}
