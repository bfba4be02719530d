//! Authentication request models

use serde::{Deserialize, Serialize};

/// Login credentials
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// New account registration
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RegisterRequest {
    pub nombre_completo: String,
    pub rut: String,
    pub email: String,
    pub password: String,
    pub rol: Option<String>,
    pub carrera: Option<String>,
    pub fecha_nacimiento: Option<String>,
    pub genero: Option<String>,
}
