// Common module - shared types and utilities across all record schemas

pub mod config;
pub mod error;
pub mod helpers;
pub mod rules;
pub mod validation;

// Re-export commonly used types for convenience
pub use config::{ConfigError, ValidationConfig};
pub use error::ApiError;
pub use helpers::{safe_email_log, safe_rut_log};
pub use validation::{validate_payload, ValidationError, ValidationResult, Validator};
