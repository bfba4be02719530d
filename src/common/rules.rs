// src/common/rules.rs
//! Field predicates shared by several record schemas.

use chrono::{Datelike, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::config::ValidationConfig;
use super::helpers::{safe_email_log, safe_rut_log};
use super::validation::ValidationResult;
use crate::rut::Rut;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

// Letters from any script (accents, ñ), combining marks and spaces.
static NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\p{L}\p{M} ]+$").unwrap());

// Old format `AB1234`, current format `BCDF12`.
static PLATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[A-Z]{2}[0-9]{4}|[A-Z]{4}[0-9]{2})$").unwrap());

pub const INSTITUTIONAL_EMAIL_MAX_LEN: usize = 50;
pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 26;
pub const PHONE_DIGITS: usize = 9;
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// Predicates
// ============================================================================

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn is_institutional_email(email: &str, config: &ValidationConfig) -> bool {
    if !is_valid_email(email) {
        return false;
    }
    email
        .rsplit_once('@')
        .map(|(_, domain)| config.is_institutional_domain(domain))
        .unwrap_or(false)
}

/// Letters (including accented ones) and spaces, with at least one letter.
pub fn is_valid_person_name(name: &str) -> bool {
    NAME_REGEX.is_match(name) && name.chars().any(|c| c.is_alphabetic())
}

pub fn is_valid_plate(plate: &str) -> bool {
    PLATE_REGEX.is_match(plate)
}

/// Country code followed by exactly nine digits, e.g. `+56912345678`.
pub fn is_valid_phone(phone: &str, config: &ValidationConfig) -> bool {
    match phone.strip_prefix(config.phone_country_code.as_str()) {
        Some(rest) => rest.len() == PHONE_DIGITS && rest.chars().all(|c| c.is_ascii_digit()),
        None => false,
    }
}

pub fn is_valid_password(password: &str) -> bool {
    let len = password.chars().count();
    (PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len)
        && password.chars().all(|c| c.is_ascii_alphanumeric())
}

pub fn validate_date_format(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT)
}

pub fn current_year() -> i32 {
    Utc::now().year()
}

// ============================================================================
// Rule helpers
// ============================================================================

pub fn check_institutional_email(
    result: &mut ValidationResult,
    field: &str,
    email: &str,
    config: &ValidationConfig,
) {
    if email.trim().is_empty() {
        result.add_error(field, "El correo electrónico es obligatorio");
    } else if email.chars().count() > INSTITUTIONAL_EMAIL_MAX_LEN {
        result.add_error(
            field,
            "El correo electrónico no puede superar los 50 caracteres",
        );
    } else if !is_institutional_email(email, config) {
        debug!(email = %safe_email_log(email), "Rejected non-institutional email");
        result.add_error(
            field,
            "El correo electrónico debe pertenecer a un dominio institucional",
        );
    }
}

/// Applies the RUT rule. Only syntax is checked unless the config asks for
/// check-digit verification.
pub fn check_rut(result: &mut ValidationResult, field: &str, rut: &str, config: &ValidationConfig) {
    let outcome = Rut::parse(rut).and_then(|parsed| {
        if config.verify_rut_check_digit {
            parsed.verify()
        } else {
            Ok(())
        }
    });

    if let Err(e) = outcome {
        debug!(rut = %safe_rut_log(rut), reason = %e, "Rejected RUT");
        result.add_error(
            field,
            "El RUT debe tener el formato xx.xxx.xxx-x y un dígito verificador válido",
        );
    }
}

pub fn check_person_name(
    result: &mut ValidationResult,
    field: &str,
    name: &str,
    min: usize,
    max: usize,
) {
    let len = name.trim().chars().count();
    if len == 0 {
        result.add_error(field, "El nombre es obligatorio");
    } else if len < min || len > max {
        result.add_error(
            field,
            &format!("El nombre debe tener entre {} y {} caracteres", min, max),
        );
    } else if !is_valid_person_name(name) {
        result.add_error(field, "El nombre solo puede contener letras y espacios");
    }
}

pub fn check_birth_date(result: &mut ValidationResult, field: &str, date: &str) {
    match validate_date_format(date) {
        Ok(parsed) => {
            if parsed > Utc::now().date_naive() {
                result.add_error(field, "La fecha de nacimiento no puede ser futura");
            }
        }
        Err(_) => result.add_error(field, "La fecha debe tener el formato YYYY-MM-DD"),
    }
}

pub fn check_password(result: &mut ValidationResult, field: &str, password: &str) {
    if password.is_empty() {
        result.add_error(field, "La contraseña es obligatoria");
    } else if !is_valid_password(password) {
        result.add_error(
            field,
            "La contraseña debe tener entre 8 y 26 caracteres y solo letras y números",
        );
    }
}

pub fn check_plate(result: &mut ValidationResult, field: &str, plate: &str) {
    if !is_valid_plate(plate) {
        result.add_error(
            field,
            "La patente debe tener el formato AB1234 o ABCD12 en mayúsculas",
        );
    }
}

pub fn check_one_of(result: &mut ValidationResult, field: &str, value: &str, allowed: &[&str]) {
    if !allowed.contains(&value) {
        result.add_error(
            field,
            &format!("Valor no permitido, debe ser uno de: {}", allowed.join(", ")),
        );
    }
}

pub fn check_text_length(result: &mut ValidationResult, field: &str, value: &str, max: usize) {
    if value.chars().count() > max {
        result.add_error(field, &format!("No puede superar los {} caracteres", max));
    }
}

pub fn check_required_text(result: &mut ValidationResult, field: &str, value: &str, max: usize) {
    if value.trim().is_empty() {
        result.add_error(field, "Este campo es obligatorio");
    } else {
        check_text_length(result, field, value, max);
    }
}
