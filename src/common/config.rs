// src/common/config.rs
//! Validation settings loaded from the environment

use dotenv::dotenv;
use std::env;
use thiserror::Error;
use tracing::info;

pub const DEFAULT_EMAIL_DOMAINS: [&str; 2] = ["ubiobio.cl", "alumnos.ubiobio.cl"];
pub const DEFAULT_PHONE_COUNTRY_CODE: &str = "+56";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be 'true' or 'false', got '{value}'")]
    InvalidBool { name: &'static str, value: String },
    #[error("PHONE_COUNTRY_CODE must look like '+56', got '{0}'")]
    InvalidCountryCode(String),
    #[error("INSTITUTIONAL_EMAIL_DOMAINS must list at least one domain")]
    NoEmailDomains,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Lower-cased email domains accepted as institutional.
    pub institutional_domains: Vec<String>,
    pub phone_country_code: String,
    /// When false, record schemas only check RUT syntax.
    pub verify_rut_check_digit: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            institutional_domains: DEFAULT_EMAIL_DOMAINS.iter().map(|d| d.to_string()).collect(),
            phone_country_code: DEFAULT_PHONE_COUNTRY_CODE.to_string(),
            verify_rut_check_digit: false,
        }
    }
}

impl ValidationConfig {
    /// Reads `.env` (if present) and then the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv().ok();
        let config = Self::from_env()?;
        info!(
            domains = ?config.institutional_domains,
            country_code = %config.phone_country_code,
            verify_rut_check_digit = config.verify_rut_check_digit,
            "Validation config loaded"
        );
        Ok(config)
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source; unset variables keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("INSTITUTIONAL_EMAIL_DOMAINS") {
            let domains: Vec<String> = raw
                .split(',')
                .map(|s| s.trim().trim_start_matches('@').to_lowercase())
                .filter(|s| !s.is_empty())
                .collect();
            if domains.is_empty() {
                return Err(ConfigError::NoEmailDomains);
            }
            config.institutional_domains = domains;
        }

        if let Some(raw) = lookup("PHONE_COUNTRY_CODE") {
            let code = raw.trim().to_string();
            let digits = code.strip_prefix('+').unwrap_or("");
            if digits.is_empty() || digits.len() > 3 || !digits.chars().all(|c| c.is_ascii_digit())
            {
                return Err(ConfigError::InvalidCountryCode(raw));
            }
            config.phone_country_code = code;
        }

        if let Some(raw) = lookup("RUT_VERIFY_CHECK_DIGIT") {
            config.verify_rut_check_digit = match raw.trim().to_lowercase().as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => {
                    return Err(ConfigError::InvalidBool {
                        name: "RUT_VERIFY_CHECK_DIGIT",
                        value: raw,
                    })
                }
            };
        }

        Ok(config)
    }

    pub fn is_institutional_domain(&self, domain: &str) -> bool {
        let domain = domain.to_lowercase();
        self.institutional_domains.iter().any(|d| *d == domain)
    }
}
