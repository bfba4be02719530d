//! # Auth Module
//!
//! Schemas for the login and registration payloads. Both require an
//! institutional email address.

pub mod models;
pub mod validators;


pub use models::{LoginRequest, RegisterRequest};
pub use validators::AuthValidator;
