//! REST API handlers
//!
//! Every protected handler consults the injected authenticator before
//! touching the store or the report generator.

pub mod admin;
pub mod auth;
pub mod business;
pub mod health;
pub mod reports;
