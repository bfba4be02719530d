// src/trips/validators.rs

use super::models::*;
use crate::common::rules::{check_one_of, check_plate, check_required_text, check_text_length};
use crate::common::{ValidationResult, Validator};
use chrono::Utc;

pub const UBICACIONES_POR_VIAJE: usize = 2;
pub const MIN_PASAJEROS: i64 = 1;
pub const MAX_PASAJEROS: i64 = 8;
pub const MAX_PRECIO: f64 = 100_000.0;
pub const FLEXIBILIDADES: [&str; 4] = ["Puntual", "± 5 minutos", "± 10 minutos", "± 15 minutos"];

// ============================================================================
// Trip Validators
// ============================================================================

pub struct TripValidator;

impl Validator<TripRequest> for TripValidator {
    fn validate(&self, data: &TripRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        // Validate locations
        if data.ubicaciones.len() != UBICACIONES_POR_VIAJE {
            result.add_error(
                "ubicaciones",
                "Debe proporcionar exactamente 2 ubicaciones (origen y destino)",
            );
        } else {
            let origenes = data.ubicaciones.iter().filter(|u| u.es_origen).count();
            if origenes != 1 {
                result.add_error(
                    "ubicaciones",
                    "Una ubicación debe ser el origen y la otra el destino",
                );
            }
        }
        for (index, ubicacion) in data.ubicaciones.iter().enumerate() {
            result.merge_nested(
                &format!("ubicaciones[{}]", index),
                LocationValidator.validate(ubicacion),
            );
        }

        // Validate schedule
        if data.fecha_hora_ida < Utc::now() {
            result.add_error(
                "fechaHoraIda",
                "La fecha y hora de ida no puede ser anterior al momento actual",
            );
        }

        match (data.viaje_ida_y_vuelta, &data.fecha_hora_vuelta) {
            (true, None) => result.add_error(
                "fechaHoraVuelta",
                "Para viajes de ida y vuelta debe especificar fecha y hora de vuelta",
            ),
            (_, Some(vuelta)) if *vuelta <= data.fecha_hora_ida => result.add_error(
                "fechaHoraVuelta",
                "La fecha y hora de vuelta debe ser posterior a la de ida",
            ),
            _ => {}
        }

        // Validate seats
        if !(MIN_PASAJEROS..=MAX_PASAJEROS).contains(&data.max_pasajeros) {
            result.add_error(
                "maxPasajeros",
                &format!(
                    "El máximo de pasajeros debe estar entre {} y {}",
                    MIN_PASAJEROS, MAX_PASAJEROS
                ),
            );
        }

        if data.plazas_disponibles < 0 {
            result.add_error(
                "plazasDisponibles",
                "Las plazas disponibles no pueden ser negativas",
            );
        } else if data.plazas_disponibles > data.max_pasajeros {
            result.add_error(
                "plazasDisponibles",
                "\"plazasDisponibles\" must be less than or equal to ref:maxPasajeros",
            );
        }

        if let Some(flexibilidad) = &data.flexibilidad_salida {
            check_one_of(&mut result, "flexibilidadSalida", flexibilidad, &FLEXIBILIDADES);
        }

        if !data.precio.is_finite() || data.precio < 0.0 || data.precio > MAX_PRECIO {
            result.add_error("precio", "El precio debe estar entre 0 y 100000");
        }

        if let Some(comentarios) = &data.comentarios {
            check_text_length(&mut result, "comentarios", comentarios, 500);
        }

        check_plate(&mut result, "vehiculoPatente", &data.vehiculo_patente);

        result
    }
}

pub struct LocationValidator;

impl Validator<Ubicacion> for LocationValidator {
    fn validate(&self, data: &Ubicacion) -> ValidationResult {
        let mut result = ValidationResult::new();

        check_required_text(&mut result, "displayName", &data.display_name, 255);

        if !(-90.0..=90.0).contains(&data.lat) {
            result.add_error("lat", "La latitud debe estar entre -90 y 90");
        }

        if !(-180.0..=180.0).contains(&data.lon) {
            result.add_error("lon", "La longitud debe estar entre -180 y 180");
        }

        result
    }
}
