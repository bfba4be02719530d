//! # Vehicles Module
//!
//! Schema for the vehicles a driver offers trips with.

pub mod models;
pub mod validators;


pub use models::VehicleRequest;
pub use validators::VehicleValidator;
