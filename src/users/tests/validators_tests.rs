// src/users/tests/validators_tests.rs

#[cfg(test)]
mod tests {
    use crate::common::{validate_payload, ApiError, ValidationConfig, Validator};
    use crate::users::models::*;
    use crate::users::validators::*;
    use chrono::{Datelike, Duration, Utc};
    use serde_json::json;

    fn query(email: &str, rut: &str) -> UserQuery {
        UserQuery {
            email: Some(email.to_string()),
            rut: Some(rut.to_string()),
        }
    }

    fn body(rut: &str) -> UserBody {
        UserBody {
            email: Some("usuario@alumnos.ubiobio.cl".to_string()),
            rut: Some(rut.to_string()),
            ..UserBody::default()
        }
    }

    fn future_expiry() -> String {
        format!("12/{}", Utc::now().year() + 2)
    }

    fn card() -> Tarjeta {
        Tarjeta {
            numero: "1234-5678-1222-1234".to_string(),
            cvv: "123".to_string(),
            fecha_vencimiento: future_expiry(),
            nombre_titular: "Juan Pérez".to_string(),
            tipo: "VISA".to_string(),
            banco: "Banco Ejemplo".to_string(),
            limite_credito: 100000.0,
        }
    }

    #[test]
    fn test_query_rejects_non_institutional_email() {
        let result = UserValidator::default().validate(&query("usuario@gmail.com", "12.345.678-9"));
        assert!(!result.is_valid);
        assert!(result.has_error("email"));
    }

    #[test]
    fn test_query_accepts_institutional_email() {
        let result =
            UserValidator::default().validate(&query("usuario@alumnos.ubiobio.cl", "12.345.678-9"));
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_query_accepts_short_institutional_email() {
        let query = UserQuery {
            email: Some("ana@ubiobio.cl".to_string()),
            rut: None,
        };

        let result = UserValidator::default().validate(&query);
        assert!(result.is_valid, "{:?}", result.errors);
    }

    #[test]
    fn test_body_accepts_decomposed_accents_in_name() {
        let request = UserBody {
            nombre_completo: Some("Jose\u{0301} Pe\u{0301}rez".to_string()),
            ..body("12.345.678-K")
        };

        assert!(UserValidator::default().validate(&request).is_valid);
    }

    #[test]
    fn test_query_accepts_rut_without_dots() {
        let result =
            UserValidator::default().validate(&query("usuario@alumnos.ubiobio.cl", "12345678-9"));
        assert!(result.is_valid);
    }

    #[test]
    fn test_query_accepts_k_check_symbol() {
        let result =
            UserValidator::default().validate(&query("usuario@alumnos.ubiobio.cl", "12.345.678-K"));
        assert!(result.is_valid);
    }

    #[test]
    fn test_query_rejects_rut_without_check_digit() {
        let result =
            UserValidator::default().validate(&query("usuario@alumnos.ubiobio.cl", "12.345.678-"));
        assert!(!result.is_valid);
        assert!(result.has_error("rut"));
    }

    #[test]
    fn test_query_rejects_rut_with_letters() {
        let result =
            UserValidator::default().validate(&query("usuario@alumnos.ubiobio.cl", "12.345.67A-9"));
        assert!(!result.is_valid);
        assert!(result.has_error("rut"));
    }

    #[test]
    fn test_query_requires_some_field() {
        let result = UserValidator::default().validate(&UserQuery::default());
        assert!(!result.is_valid);
        assert!(result.has_error("general"));
    }

    #[test]
    fn test_query_checks_digit_when_configured() {
        let validator = UserValidator::new(ValidationConfig {
            verify_rut_check_digit: true,
            ..ValidationConfig::default()
        });

        assert!(!validator
            .validate(&query("usuario@alumnos.ubiobio.cl", "12.345.678-9"))
            .is_valid);
        assert!(validator
            .validate(&query("usuario@alumnos.ubiobio.cl", "12.345.678-5"))
            .is_valid);
    }

    #[test]
    fn test_body_rejects_name_with_digits() {
        let request = UserBody {
            nombre_completo: Some("Usuario132".to_string()),
            ..body("12.345.678-K")
        };

        let result = UserValidator::default().validate(&request);
        assert!(!result.is_valid);
        assert!(result.has_error("nombreCompleto"));
    }

    #[test]
    fn test_body_accepts_valid_name() {
        let request = UserBody {
            nombre_completo: Some("Usuario Ejemplo".to_string()),
            ..body("12.345.678-K")
        };

        assert!(UserValidator::default().validate(&request).is_valid);
    }

    #[test]
    fn test_body_rejects_future_birth_date() {
        let request = UserBody {
            fecha_nacimiento: Some("3000-01-01".to_string()),
            ..body("12.345.678-K")
        };

        let result = UserValidator::default().validate(&request);
        assert!(!result.is_valid);
        assert!(result.has_error("fechaNacimiento"));
    }

    #[test]
    fn test_body_accepts_past_birth_date() {
        let request = UserBody {
            fecha_nacimiento: Some("2002-01-01".to_string()),
            ..body("12.345.678-K")
        };

        assert!(UserValidator::default().validate(&request).is_valid);
    }

    #[test]
    fn test_body_rejects_unknown_gender() {
        let request = UserBody {
            fecha_nacimiento: Some("3000-01-01".to_string()),
            genero: Some("anima".to_string()),
            ..body("12.345.678-K")
        };

        let result = UserValidator::default().validate(&request);
        assert!(!result.is_valid);
        assert!(result.has_error("genero"));
        assert!(result.has_error("fechaNacimiento"));
    }

    #[test]
    fn test_body_accepts_known_gender() {
        let request = UserBody {
            fecha_nacimiento: Some("2002-01-01".to_string()),
            genero: Some("masculino".to_string()),
            ..body("12.345.678-K")
        };

        assert!(UserValidator::default().validate(&request).is_valid);
    }

    #[test]
    fn test_body_accepts_numeric_card() {
        let request = UserBody {
            tarjetas: Some(vec![card()]),
            ..body("12.345.678-K")
        };

        let result = UserValidator::default().validate(&request);
        assert!(result.is_valid, "{:?}", result.errors);
    }

    #[test]
    fn test_body_rejects_card_number_with_letters() {
        let request = UserBody {
            tarjetas: Some(vec![Tarjeta {
                numero: "1234-5678-AAAA-5678".to_string(),
                ..card()
            }]),
            ..body("12.345.678-K")
        };

        let result = UserValidator::default().validate(&request);
        assert!(!result.is_valid);
        assert!(result.has_error("tarjetas[0].numero"));
    }

    #[test]
    fn test_body_rejects_cvv_with_letters() {
        let request = UserBody {
            tarjetas: Some(vec![card(), Tarjeta {
                cvv: "1AA".to_string(),
                ..card()
            }]),
            ..body("12.345.678-K")
        };

        let result = UserValidator::default().validate(&request);
        assert!(!result.is_valid);
        assert!(result.has_error("tarjetas[1].cvv"));
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn test_body_rejects_negative_credit_limit() {
        let request = UserBody {
            tarjetas: Some(vec![Tarjeta {
                limite_credito: -1000.0,
                ..card()
            }]),
            ..body("12.345.678-K")
        };

        let result = UserValidator::default().validate(&request);
        assert!(!result.is_valid);
        assert!(result.has_error("tarjetas[0].limiteCredito"));
    }

    #[test]
    fn test_card_rejects_expired_and_unknown_type() {
        let last_month = Utc::now() - Duration::days(40);
        let expired = Tarjeta {
            fecha_vencimiento: format!("{:02}/{}", last_month.month(), last_month.year()),
            tipo: "DINERS".to_string(),
            ..card()
        };

        let result = CardValidator.validate(&expired);
        assert!(result.has_error("fechaVencimiento"));
        assert!(result.has_error("tipo"));
    }

    #[test]
    fn test_body_rejects_too_many_cards() {
        let request = UserBody {
            tarjetas: Some(vec![card(); MAX_TARJETAS + 1]),
            ..body("12.345.678-K")
        };

        let result = UserValidator::default().validate(&request);
        assert!(result.has_error("tarjetas"));
    }

    #[test]
    fn test_payload_uses_wire_field_names() {
        let payload = json!({
            "email": "usuario@alumnos.ubiobio.cl",
            "rut": "12.345.678-K",
            "nombreCompleto": "Usuario Ejemplo",
            "tarjetas": [{
                "numero": "1234-5678-1222-1234", "cvv": "123", "fechaVencimiento": future_expiry(),
                "nombreTitular": "Juan Pérez", "tipo": "VISA", "banco": "Banco Ejemplo",
                "limiteCredito": 100000
            }]
        });

        let parsed: UserBody = validate_payload(&UserValidator::default(), payload).unwrap();
        assert_eq!(parsed.nombre_completo.as_deref(), Some("Usuario Ejemplo"));
        assert_eq!(parsed.tarjetas.unwrap()[0].limite_credito, 100000.0);
    }

    #[test]
    fn test_payload_rejects_unknown_field() {
        let payload = json!({ "email": "usuario@alumnos.ubiobio.cl", "apodo": "juanito" });

        let err = validate_payload::<UserQuery, _>(&UserValidator::default(), payload).unwrap_err();
        match err {
            ApiError::ValidationError(msg) => assert!(msg.starts_with("payload:")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_payload_reports_rule_violations() {
        let payload = json!({ "email": "usuario@gmail.com", "rut": "12.345.678-" });

        let err = validate_payload::<UserQuery, _>(&UserValidator::default(), payload).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("email:"));
        assert!(msg.contains("rut:"));
    }
}
