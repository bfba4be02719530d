// src/users/validators.rs

use super::models::*;
use crate::common::rules::{
    check_birth_date, check_institutional_email, check_one_of, check_password,
    check_person_name, check_required_text, check_rut,
};
use crate::common::{ValidationConfig, ValidationResult, Validator};
use chrono::{Datelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

pub const GENEROS: [&str; 4] = ["masculino", "femenino", "no_binario", "prefiero_no_decir"];
pub const TIPOS_TARJETA: [&str; 4] = ["VISA", "MASTERCARD", "AMERICAN_EXPRESS", "REDCOMPRA"];
pub const MAX_TARJETAS: usize = 10;
pub const NOMBRE_COMPLETO_MIN: usize = 3;
pub const NOMBRE_COMPLETO_MAX: usize = 80;

static EXPIRY_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(0[1-9]|1[0-2])/([0-9]{4})$").unwrap());

// ============================================================================
// User Validators
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct UserValidator {
    config: ValidationConfig,
}

impl UserValidator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }
}

impl Validator<UserQuery> for UserValidator {
    fn validate(&self, data: &UserQuery) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.email.is_none() && data.rut.is_none() {
            result.add_error("general", "Debe proporcionar al menos un email o un RUT");
            return result;
        }

        if let Some(email) = &data.email {
            check_institutional_email(&mut result, "email", email, &self.config);
        }

        if let Some(rut) = &data.rut {
            check_rut(&mut result, "rut", rut, &self.config);
        }

        result
    }
}

impl Validator<UserBody> for UserValidator {
    fn validate(&self, data: &UserBody) -> ValidationResult {
        let mut result = ValidationResult::new();

        // Check if at least one field is provided
        if data.nombre_completo.is_none()
            && data.email.is_none()
            && data.password.is_none()
            && data.new_password.is_none()
            && data.rut.is_none()
            && data.fecha_nacimiento.is_none()
            && data.genero.is_none()
            && data.tarjetas.is_none()
        {
            result.add_error("general", "Debe proporcionar al menos un campo");
            return result;
        }

        if let Some(nombre) = &data.nombre_completo {
            check_person_name(
                &mut result,
                "nombreCompleto",
                nombre,
                NOMBRE_COMPLETO_MIN,
                NOMBRE_COMPLETO_MAX,
            );
        }

        if let Some(email) = &data.email {
            check_institutional_email(&mut result, "email", email, &self.config);
        }

        if let Some(password) = &data.password {
            check_password(&mut result, "password", password);
        }

        if let Some(new_password) = &data.new_password {
            check_password(&mut result, "newPassword", new_password);
        }

        if let Some(rut) = &data.rut {
            check_rut(&mut result, "rut", rut, &self.config);
        }

        if let Some(fecha) = &data.fecha_nacimiento {
            check_birth_date(&mut result, "fechaNacimiento", fecha);
        }

        if let Some(genero) = &data.genero {
            check_one_of(&mut result, "genero", genero, &GENEROS);
        }

        if let Some(tarjetas) = &data.tarjetas {
            if tarjetas.len() > MAX_TARJETAS {
                result.add_error("tarjetas", "No puede registrar más de 10 tarjetas");
            }
            for (index, tarjeta) in tarjetas.iter().enumerate() {
                result.merge_nested(
                    &format!("tarjetas[{}]", index),
                    CardValidator.validate(tarjeta),
                );
            }
        }

        result
    }
}

// ============================================================================
// Payment Card Validators
// ============================================================================

pub struct CardValidator;

impl Validator<Tarjeta> for CardValidator {
    fn validate(&self, data: &Tarjeta) -> ValidationResult {
        let mut result = ValidationResult::new();

        // Digits plus '-' or ' ' group separators
        if !data
            .numero
            .chars()
            .all(|c| c.is_ascii_digit() || c == '-' || c == ' ')
        {
            result.add_error("numero", "El número de tarjeta solo puede contener dígitos");
        } else {
            let digits = data.numero.chars().filter(|c| c.is_ascii_digit()).count();
            if !(13..=19).contains(&digits) {
                result.add_error("numero", "El número de tarjeta debe tener entre 13 y 19 dígitos");
            }
        }

        if !(3..=4).contains(&data.cvv.len()) || !data.cvv.chars().all(|c| c.is_ascii_digit()) {
            result.add_error("cvv", "El CVV debe tener 3 o 4 dígitos");
        }

        match parse_expiry(&data.fecha_vencimiento) {
            Some((month, year)) => {
                let now = Utc::now();
                if (year, month) < (now.year(), now.month()) {
                    result.add_error("fechaVencimiento", "La tarjeta está vencida");
                }
            }
            None => result.add_error(
                "fechaVencimiento",
                "La fecha de vencimiento debe tener el formato MM/YYYY",
            ),
        }

        check_person_name(&mut result, "nombreTitular", &data.nombre_titular, 3, 80);
        check_one_of(&mut result, "tipo", &data.tipo, &TIPOS_TARJETA);
        check_required_text(&mut result, "banco", &data.banco, 50);

        if !data.limite_credito.is_finite() || data.limite_credito < 0.0 {
            result.add_error("limiteCredito", "El límite de crédito no puede ser negativo");
        }

        result
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// `MM/YYYY` -> (month, year)
fn parse_expiry(value: &str) -> Option<(u32, i32)> {
    let caps = EXPIRY_REGEX.captures(value)?;
    let month = caps.get(1)?.as_str().parse().ok()?;
    let year = caps.get(2)?.as_str().parse().ok()?;
    Some((month, year))
}

#[cfg(test)]
mod tests {
    use super::parse_expiry;

    #[test]
    fn test_parse_expiry() {
        assert_eq!(parse_expiry("12/2027"), Some((12, 2027)));
        assert_eq!(parse_expiry("01/2030"), Some((1, 2030)));
        assert_eq!(parse_expiry("13/2027"), None);
        assert_eq!(parse_expiry("1/2027"), None);
        assert_eq!(parse_expiry("12-2027"), None);
    }
}
