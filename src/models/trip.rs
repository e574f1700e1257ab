//! Modelo de Trip
//!
//! Solo los viajes con status `Completed` cuentan para los totales del
//! trip summary.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Status con el que un viaje entra a los totales
pub const TRIP_STATUS_COMPLETED: &str = "Completed";

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub account_head_id: Option<Uuid>,
    pub from_location: String,
    pub to_location: String,
    pub status: String,
    pub amount: Decimal,
    pub start_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}
