//! Service implementations
//!
//! Real implementations of all service traits for production use

pub mod auth;
pub mod report_generator;
pub mod store;

// Re-export service implementations
pub use auth::{session_token, NoOpAuthenticator, TokenVerifyingAuthenticator};
pub use report_generator::GeminiReportGenerator;
pub use store::MemoryStore;
