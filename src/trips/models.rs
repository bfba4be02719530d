use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One end of a trip
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Ubicacion {
    pub display_name: String,
    pub lat: f64,
    pub lon: f64,
    pub es_origen: bool,
}

/// Trip publication payload
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TripRequest {
    pub ubicaciones: Vec<Ubicacion>,
    pub fecha_hora_ida: DateTime<Utc>,
    pub fecha_hora_vuelta: Option<DateTime<Utc>>,
    #[serde(default)]
    pub viaje_ida_y_vuelta: bool,
    pub max_pasajeros: i64,
    pub solo_mujeres: Option<bool>,
    pub flexibilidad_salida: Option<String>,
    pub precio: f64,
    pub plazas_disponibles: i64,
    pub comentarios: Option<String>,
    pub vehiculo_patente: String,
}
