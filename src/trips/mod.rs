//! # Trips Module
//!
//! Schema for publishing a trip: the two locations, the departure and
//! optional return time, seats and price.

pub mod models;
pub mod validators;


pub use models::{TripRequest, Ubicacion};
pub use validators::TripValidator;
