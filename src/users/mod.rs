//! # Users Module
//!
//! Schemas for user lookups and profile updates, including the payment
//! cards a user can attach to their profile.

pub mod models;
pub mod validators;

#[cfg(test)]
mod tests;

pub use models::*;
pub use validators::{CardValidator, UserValidator};
