// Helper functions for safe logging

/// Masks email addresses for safe logging
/// Prevents sensitive data exposure while preserving debugging utility
///
/// # Example
/// ```
/// use carpool_validation::common::safe_email_log;
/// assert_eq!(safe_email_log("user@ubiobio.cl"), "u***@ubiobio.cl");
/// ```
pub fn safe_email_log(email: &str) -> String {
    if email.len() > 3 {
        let parts: Vec<&str> = email.split('@').collect();
        if parts.len() == 2 {
            let first: String = parts[0].chars().take(1).collect();
            format!("{}***@{}", first, parts[1])
        } else {
            "***@***.***".to_string()
        }
    } else {
        "***@***.***".to_string()
    }
}

/// Masks a RUT for safe logging, keeping only the check symbol
///
/// # Example
/// ```
/// use carpool_validation::common::safe_rut_log;
/// assert_eq!(safe_rut_log("12.345.678-5"), "**.***.***-5");
/// ```
pub fn safe_rut_log(rut: &str) -> String {
    match rut.rsplit_once('-') {
        Some((body, check)) => {
            let masked: String = body
                .chars()
                .map(|c| if c == '.' { '.' } else { '*' })
                .collect();
            format!("{}-{}", masked, check)
        }
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_email_log_masks_local_part() {
        assert_eq!(
            safe_email_log("josemanriquez@alumnos.ubiobio.cl"),
            "j***@alumnos.ubiobio.cl"
        );
        assert_eq!(safe_email_log("no-at-sign"), "***@***.***");
        assert_eq!(safe_email_log("a@b"), "***@***.***");
    }

    #[test]
    fn test_safe_email_log_handles_multibyte_first_char() {
        assert_eq!(safe_email_log("ñandu@ubiobio.cl"), "ñ***@ubiobio.cl");
    }

    #[test]
    fn test_safe_rut_log() {
        assert_eq!(safe_rut_log("12345678-K"), "********-K");
        assert_eq!(safe_rut_log("12.345.678"), "***");
    }
}
