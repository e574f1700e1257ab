//! Modelo de Vehicle
//!
//! Mapea a la tabla `vehicles`. Los vehículos nunca se borran físicamente:
//! `inactive` marca `is_active = false` (soft delete).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: Uuid,
    pub reg_no: String,
    pub model: Option<String>,
    pub brand_id: Option<Uuid>,
    pub account_head_id: Option<Uuid>,
    pub vehicle_value: Decimal,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
