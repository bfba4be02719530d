//! # Contacts Module
//!
//! Schema for the emergency contacts a user registers. Contacts need a
//! local phone number but may use any email provider.

pub mod models;
pub mod validators;


pub use models::EmergencyContactRequest;
pub use validators::EmergencyContactValidator;
