//! Request payload validation for the carpooling platform.
//!
//! Each record family has its own module with the wire models and a
//! [`Validator`](common::Validator) implementation. The web layer hands an
//! untyped JSON body to [`validate_payload`](common::validate_payload) and
//! gets back either the typed record or an [`ApiError`](common::ApiError)
//! that renders as a 400 response.

pub mod auth;
pub mod common;
pub mod contacts;
pub mod rut;
pub mod trips;
pub mod users;
pub mod vehicles;

pub use common::{validate_payload, ApiError, ValidationConfig, ValidationResult, Validator};
pub use rut::{is_valid_rut, Rut, RutError};
