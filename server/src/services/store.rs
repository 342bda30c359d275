//! In-memory data store
//!
//! Simulates the database with two ordered collections seeded at startup.
//! All mutations are lost on restart.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::traits::Store;
use shared::{Account, Business, IdGenerator, Role};

/// Append-only process-local store holding accounts and businesses
///
/// Constructed explicitly and injected into the server, so tests can
/// instantiate isolated stores per case.
#[derive(Debug)]
pub struct MemoryStore {
    accounts: RwLock<Vec<Account>>,
    businesses: RwLock<Vec<Business>>,
    account_ids: IdGenerator,
    business_ids: IdGenerator,
}

impl MemoryStore {
    /// Create a store holding the two seed accounts and no businesses
    pub fn new() -> Self {
        let seed_accounts = vec![
            Account {
                id: "admin1".to_string(),
                name: "Admin".to_string(),
                email: "admin@nomina.pro".to_string(),
                password: "adminpass123".to_string(),
                role: Role::Admin,
            },
            Account {
                id: "user1".to_string(),
                name: "Test Accountant".to_string(),
                email: "test@contador.com".to_string(),
                password: "password123".to_string(),
                role: Role::Accountant,
            },
        ];

        Self {
            accounts: RwLock::new(seed_accounts),
            businesses: RwLock::new(Vec::new()),
            account_ids: IdGenerator::new("user"),
            business_ids: IdGenerator::new("b"),
        }
    }

    /// Whether an account with the given id exists
    ///
    /// Used by the token-verifying authenticator; not part of the `Store`
    /// trait surface.
    pub async fn account_exists(&self, account_id: &str) -> bool {
        let accounts = self.accounts.read().await;
        accounts.iter().any(|a| a.id == account_id)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn find_account_by_credentials(&self, email: &str, password: &str) -> Option<Account> {
        let accounts = self.accounts.read().await;
        accounts
            .iter()
            .find(|a| a.email == email && a.password == password)
            .cloned()
    }

    async fn list_accounts_by_role(&self, role: Role) -> Vec<Account> {
        let accounts = self.accounts.read().await;
        accounts.iter().filter(|a| a.role == role).cloned().collect()
    }

    async fn append_account(&self, name: &str, email: &str, password: &str) -> Account {
        let account = Account {
            id: self.account_ids.next_id(),
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role: Role::Accountant,
        };

        let mut accounts = self.accounts.write().await;
        accounts.push(account.clone());
        account
    }

    async fn list_businesses(&self) -> Vec<Business> {
        let businesses = self.businesses.read().await;
        businesses.clone()
    }

    async fn append_business(&self, name: &str, industry: &str) -> Business {
        let business = Business {
            id: self.business_ids.next_id(),
            name: name.to_string(),
            industry: industry.to_string(),
            employees: Vec::new(),
        };

        let mut businesses = self.businesses.write().await;
        businesses.push(business.clone());
        business
    }
}
