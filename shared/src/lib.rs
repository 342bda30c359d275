//! Shared types for the nomina payroll backend
//!
//! Contains the domain model, identifier generation and logging helpers
//! used by the server crate.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::ApiFailure;
pub use types::{Account, AccountView, Business, Employee, IdGenerator, Role};
