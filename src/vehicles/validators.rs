// src/vehicles/validators.rs

use super::models::VehicleRequest;
use crate::common::rules::{
    check_one_of, check_plate, check_required_text, check_text_length, current_year,
};
use crate::common::{ValidationResult, Validator};

pub const TIPOS_VEHICULO: [&str; 7] = [
    "sedan",
    "hatchback",
    "suv",
    "camioneta",
    "furgon",
    "station_wagon",
    "coupe",
];
pub const TIPOS_COMBUSTIBLE: [&str; 5] = ["bencina", "diesel", "electrico", "hibrido", "gas"];
pub const MIN_ANIO: i32 = 1900;
pub const MIN_ASIENTOS: i64 = 2;
pub const MAX_ASIENTOS: i64 = 9;

// ============================================================================
// Vehicle Validators
// ============================================================================

pub struct VehicleValidator;

impl Validator<VehicleRequest> for VehicleValidator {
    fn validate(&self, data: &VehicleRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        check_plate(&mut result, "patente", &data.patente);
        check_one_of(&mut result, "tipo", &data.tipo, &TIPOS_VEHICULO);
        check_required_text(&mut result, "marca", &data.marca, 50);
        check_required_text(&mut result, "modelo", &data.modelo, 50);

        // Validate year
        let max_anio = current_year();
        if data.anio < MIN_ANIO || data.anio > max_anio {
            result.add_error(
                "año",
                &format!("El año debe estar entre {} y {}", MIN_ANIO, max_anio),
            );
        }

        check_required_text(&mut result, "color", &data.color, 50);

        // Validate seat count
        if !(MIN_ASIENTOS..=MAX_ASIENTOS).contains(&data.nro_asientos) {
            result.add_error(
                "nro_asientos",
                &format!(
                    "El número de asientos debe estar entre {} y {}",
                    MIN_ASIENTOS, MAX_ASIENTOS
                ),
            );
        }

        check_one_of(
            &mut result,
            "tipoCombustible",
            &data.tipo_combustible,
            &TIPOS_COMBUSTIBLE,
        );

        if let Some(documentacion) = &data.documentacion {
            check_text_length(&mut result, "documentacion", documentacion, 500);
        }

        result
    }
}
