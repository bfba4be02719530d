use serde::{Deserialize, Serialize};

/// Vehicle registration payload
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct VehicleRequest {
    pub patente: String,
    pub tipo: String,
    pub marca: String,
    pub modelo: String,
    #[serde(rename = "año")]
    pub anio: i32,
    pub color: String,
    pub nro_asientos: i64,
    #[serde(rename = "tipoCombustible")]
    pub tipo_combustible: String,
    pub documentacion: Option<String>,
}
