// src/auth/validators.rs

use super::models::*;
use crate::common::rules::{
    check_birth_date, check_institutional_email, check_one_of, check_password,
    check_person_name, check_rut, is_valid_person_name,
};
use crate::common::{safe_email_log, ValidationConfig, ValidationResult, Validator};
use crate::users::validators::{GENEROS, NOMBRE_COMPLETO_MAX, NOMBRE_COMPLETO_MIN};
use tracing::debug;

pub const ROLES: [&str; 2] = ["estudiante", "administrador"];

// ============================================================================
// Authentication Validators
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct AuthValidator {
    config: ValidationConfig,
}

impl AuthValidator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }
}

impl Validator<LoginRequest> for AuthValidator {
    fn validate(&self, data: &LoginRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        check_institutional_email(&mut result, "email", &data.email, &self.config);
        check_password(&mut result, "password", &data.password);

        if !result.is_valid {
            debug!(email = %safe_email_log(&data.email), "Login payload rejected");
        }

        result
    }
}

impl Validator<RegisterRequest> for AuthValidator {
    fn validate(&self, data: &RegisterRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        check_person_name(
            &mut result,
            "nombreCompleto",
            &data.nombre_completo,
            NOMBRE_COMPLETO_MIN,
            NOMBRE_COMPLETO_MAX,
        );
        check_rut(&mut result, "rut", &data.rut, &self.config);
        check_institutional_email(&mut result, "email", &data.email, &self.config);
        check_password(&mut result, "password", &data.password);

        if let Some(rol) = &data.rol {
            check_one_of(&mut result, "rol", rol, &ROLES);
        }

        // Validate carrera if provided
        if let Some(carrera) = &data.carrera {
            let len = carrera.trim().chars().count();
            if !(3..=100).contains(&len) {
                result.add_error("carrera", "La carrera debe tener entre 3 y 100 caracteres");
            } else if !is_valid_person_name(carrera) {
                result.add_error("carrera", "La carrera solo puede contener letras y espacios");
            }
        }

        if let Some(fecha) = &data.fecha_nacimiento {
            check_birth_date(&mut result, "fechaNacimiento", fecha);
        }

        if let Some(genero) = &data.genero {
            check_one_of(&mut result, "genero", genero, &GENEROS);
        }

        if !result.is_valid {
            debug!(email = %safe_email_log(&data.email), "Registration payload rejected");
        }

        result
    }
}
