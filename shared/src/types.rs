//! Core domain types and identifiers

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Role attached to every account
///
/// Serialized with the wire names the frontend stores (`ADMIN`,
/// `ACCOUNTANT`). Role determines which endpoints are semantically intended
/// for an account; enforcement lives behind the authenticator seam.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ADMIN")]
    Admin,
    #[serde(rename = "ACCOUNTANT")]
    Accountant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "ADMIN"),
            Role::Accountant => write!(f, "ACCOUNTANT"),
        }
    }
}

/// A login principal
///
/// Serializing the full record includes the plaintext password, which the
/// account-creation response deliberately exposes. Use [`AccountView`]
/// anywhere the credential must not leak.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Sanitized account projection returned by login and listing endpoints
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccountView {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<&Account> for AccountView {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.clone(),
            name: account.name.clone(),
            email: account.email.clone(),
            role: account.role,
        }
    }
}

/// A single employee line inside a business or a report request
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub salary: f64,
}

/// A payroll-subject organizational unit owning employee records
///
/// Businesses carry no link to the account that created them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Business {
    pub id: String,
    pub name: String,
    pub industry: String,
    pub employees: Vec<Employee>,
}

/// Generates unique entity identifiers
///
/// Ids combine a prefix, the creation time in milliseconds and a monotonic
/// counter, so two creations inside the same millisecond still get distinct
/// ids.
#[derive(Debug)]
pub struct IdGenerator {
    prefix: &'static str,
    counter: AtomicU64,
}

impl IdGenerator {
    pub fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            counter: AtomicU64::new(0),
        }
    }

    /// Produce the next identifier
    pub fn next_id(&self) -> String {
        let seq = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{}{}-{}", self.prefix, Utc::now().timestamp_millis(), seq)
    }
}
