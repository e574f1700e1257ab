use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Request para registrar equipo
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEquipmentRequest {
    #[validate(length(min = 1, message = "Equipment is Required"))]
    pub label: String,
    pub uom_id: Option<Uuid>,
}

/// Request para actualizar equipo
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEquipmentRequest {
    #[validate(length(min = 1, message = "Equipment cannot be empty"))]
    pub label: Option<String>,
    pub uom_id: Option<Uuid>,
}

/// Filtros del listado de equipo
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentFilterQuery {
    pub search_term: Option<String>,
}
