// src/contacts/validators.rs

use super::models::EmergencyContactRequest;
use crate::common::rules::{check_person_name, is_valid_email, is_valid_phone};
use crate::common::{ValidationConfig, ValidationResult, Validator};

#[derive(Debug, Clone, Default)]
pub struct EmergencyContactValidator {
    config: ValidationConfig,
}

impl EmergencyContactValidator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }
}

impl Validator<EmergencyContactRequest> for EmergencyContactValidator {
    fn validate(&self, data: &EmergencyContactRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        check_person_name(&mut result, "nombre", &data.nombre, 2, 100);

        if data.telefono.trim().is_empty() {
            result.add_error("telefono", "El teléfono es obligatorio");
        } else if !is_valid_phone(&data.telefono, &self.config) {
            result.add_error(
                "telefono",
                &format!(
                    "El teléfono debe tener el formato {}XXXXXXXXX",
                    self.config.phone_country_code
                ),
            );
        }

        // Contacts may be outside the institution
        if let Some(email) = &data.email {
            if !is_valid_email(email) {
                result.add_error("email", "El correo electrónico no es válido");
            }
        }

        result
    }
}
