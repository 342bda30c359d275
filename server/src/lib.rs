//! Payroll management backend
//!
//! A thin REST layer over an in-memory store, plus AI-generated payroll
//! report summaries relayed from a remote text-generation provider.

pub mod error;
pub mod server_impl;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;
pub mod web;

// Re-export main types
pub use error::{ServerError, ServerResult};
pub use server_impl::Server;
pub use state::ServerState;
pub use types::*;

// Re-export trait definitions
pub use traits::{Authenticator, ReportGenerator, Store};

// Re-export service implementations
pub use services::{
    session_token, GeminiReportGenerator, MemoryStore, NoOpAuthenticator,
    TokenVerifyingAuthenticator,
};
