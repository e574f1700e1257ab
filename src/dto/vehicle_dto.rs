use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, message = "Reg No is Required"))]
    pub reg_no: String,
    pub model: Option<String>,
    pub brand_id: Option<Uuid>,
    pub account_head_id: Option<Uuid>,
    pub vehicle_value: Option<Decimal>,
}

/// Request para actualizar un vehículo existente
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, message = "Reg No cannot be empty"))]
    pub reg_no: Option<String>,
    pub model: Option<String>,
    pub brand_id: Option<Uuid>,
    pub account_head_id: Option<Uuid>,
    pub vehicle_value: Option<Decimal>,
    pub is_active: Option<bool>,
}

/// Filtros del listado de vehículos
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleFilterQuery {
    pub search_term: Option<String>,
    pub is_active: Option<String>,
    pub brand_id: Option<String>,
}
