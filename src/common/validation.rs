// Common validation types and traits

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::error::ApiError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

/// Outcome of running one schema over one record.
///
/// Every violated rule is kept, in the order the schema checks them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    pub fn add_error(&mut self, field: &str, message: &str) {
        self.is_valid = false;
        self.errors.push(ValidationError {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    pub fn merge(&mut self, other: ValidationResult) {
        if !other.is_valid {
            self.is_valid = false;
            self.errors.extend(other.errors);
        }
    }

    /// Merges a nested result, prefixing each field with `prefix`
    /// (`tarjetas[0]` + `cvv` -> `tarjetas[0].cvv`).
    pub fn merge_nested(&mut self, prefix: &str, other: ValidationResult) {
        if !other.is_valid {
            self.is_valid = false;
            self.errors
                .extend(other.errors.into_iter().map(|e| ValidationError {
                    field: format!("{}.{}", prefix, e.field),
                    message: e.message,
                }));
        }
    }

    pub fn first_error(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    pub fn into_result(self) -> Result<(), ApiError> {
        if self.is_valid {
            Ok(())
        } else {
            Err(ApiError::from(self))
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

pub trait Validator<T> {
    fn validate(&self, data: &T) -> ValidationResult;
}

/// Deserializes an untyped request payload into `T` and runs `validator` on it.
///
/// Shape problems (wrong JSON type, unknown or missing fields) are reported
/// the same way as rule violations, on the `payload` field.
pub fn validate_payload<T, V>(validator: &V, payload: serde_json::Value) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    V: Validator<T>,
{
    let data: T = match serde_json::from_value(payload) {
        Ok(data) => data,
        Err(e) => {
            debug!(error = %e, "Rejected payload with invalid shape");
            let mut result = ValidationResult::new();
            result.add_error("payload", &e.to_string());
            return Err(result.into());
        }
    };

    let result = validator.validate(&data);
    if !result.is_valid {
        let fields: Vec<&str> = result.errors.iter().map(|e| e.field.as_str()).collect();
        debug!(?fields, "Payload failed validation");
    }
    result.into_result()?;

    Ok(data)
}
