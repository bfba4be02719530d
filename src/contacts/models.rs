use serde::{Deserialize, Serialize};

/// Emergency contact registered by a user
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct EmergencyContactRequest {
    pub nombre: String,
    pub telefono: String,
    pub email: Option<String>,
}
