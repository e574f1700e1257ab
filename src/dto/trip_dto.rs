use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Request para crear un viaje
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTripRequest {
    pub vehicle_id: Uuid,
    pub account_head_id: Option<Uuid>,
    #[validate(length(min = 1, message = "From is Required"))]
    pub from_location: String,
    #[validate(length(min = 1, message = "To is Required"))]
    pub to_location: String,
    pub status: Option<String>,
    pub amount: Decimal,
    pub start_date: DateTime<Utc>,
}

/// Request para actualizar un viaje
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTripRequest {
    pub vehicle_id: Option<Uuid>,
    pub account_head_id: Option<Uuid>,
    #[validate(length(min = 1, message = "From cannot be empty"))]
    pub from_location: Option<String>,
    #[validate(length(min = 1, message = "To cannot be empty"))]
    pub to_location: Option<String>,
    pub status: Option<String>,
    pub amount: Option<Decimal>,
    pub start_date: Option<DateTime<Utc>>,
}

/// Filtros del listado de viajes
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripFilterQuery {
    pub search_term: Option<String>,
    pub vehicle_id: Option<String>,
    pub status: Option<String>,
}
