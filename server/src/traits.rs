//! Service trait definitions for dependency injection
//!
//! All I/O seams are abstracted through these traits for testability

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::HeaderMap;

use crate::error::ServerResult;
use shared::{Account, Business, Employee, Role};

/// Read/append access to the account and business collections
///
/// Both collections are append-only: no update or delete operations exist
/// on the current surface.
#[mockall::automock]
#[async_trait]
pub trait Store: Send + Sync {
    /// Exact-match linear scan on email and password; first match wins
    async fn find_account_by_credentials(&self, email: &str, password: &str) -> Option<Account>;

    /// All accounts carrying the given role
    async fn list_accounts_by_role(&self, role: Role) -> Vec<Account>;

    /// Append a new account and return the created record; the role is
    /// always `Accountant` regardless of the caller
    async fn append_account(&self, name: &str, email: &str, password: &str) -> Account;

    /// All businesses, unscoped by account
    async fn list_businesses(&self) -> Vec<Business>;

    /// Append a new business with an empty employee list
    async fn append_business(&self, name: &str, industry: &str) -> Business;
}

/// Request authentication gate consulted before every protected handler
///
/// Injected into the server so implementations can be swapped without
/// touching handler logic.
#[mockall::automock]
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Admit or reject the request carrying the given headers
    async fn authenticate(&self, headers: &HeaderMap) -> ServerResult<()>;
}

/// Remote payroll-summary generation service
#[mockall::automock]
#[async_trait]
pub trait ReportGenerator: Send + Sync {
    /// Produce a natural-language payroll summary for one business/period
    async fn generate_summary(
        &self,
        business_name: &str,
        employees: &[Employee],
        month_year: &str,
    ) -> ServerResult<String>;
}

// A shared store handle can be injected directly; the token-verifying
// authenticator and the server then observe the same collections.
#[async_trait]
impl<T: Store> Store for Arc<T> {
    async fn find_account_by_credentials(&self, email: &str, password: &str) -> Option<Account> {
        (**self).find_account_by_credentials(email, password).await
    }

    async fn list_accounts_by_role(&self, role: Role) -> Vec<Account> {
        (**self).list_accounts_by_role(role).await
    }

    async fn append_account(&self, name: &str, email: &str, password: &str) -> Account {
        (**self).append_account(name, email, password).await
    }

    async fn list_businesses(&self) -> Vec<Business> {
        (**self).list_businesses().await
    }

    async fn append_business(&self, name: &str, industry: &str) -> Business {
        (**self).append_business(name, industry).await
    }
}
