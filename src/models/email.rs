//! Modelo de notificación por email

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct EmailNotification {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub details: String,
    pub created_at: DateTime<Utc>,
}
