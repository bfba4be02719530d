//! User request models

use serde::{Deserialize, Serialize};

/// Lookup of a single user, by email and/or RUT
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct UserQuery {
    pub email: Option<String>,
    pub rut: Option<String>,
}

/// Partial update of a user profile
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserBody {
    pub nombre_completo: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub new_password: Option<String>,
    pub rut: Option<String>,
    pub fecha_nacimiento: Option<String>,
    pub genero: Option<String>,
    pub tarjetas: Option<Vec<Tarjeta>>,
}

/// Payment card attached to a user
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Tarjeta {
    pub numero: String,
    pub cvv: String,
    /// `MM/YYYY`
    pub fecha_vencimiento: String,
    pub nombre_titular: String,
    pub tipo: String,
    pub banco: String,
    pub limite_credito: f64,
}
