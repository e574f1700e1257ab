//! Modelo de Equipment

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: Uuid,
    pub label: String,
    pub uom_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}
