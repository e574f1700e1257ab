use chrono::Utc;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::dto::equipment_dto::{CreateEquipmentRequest, UpdateEquipmentRequest};
use crate::models::equipment::Equipment;
use crate::utils::errors::AppError;
use crate::utils::filters::FilterSet;
use crate::utils::pagination::Pagination;

pub const EQUIPMENT_SEARCHABLE_COLUMNS: &[&str] = &["label"];

pub const EQUIPMENT_SORTABLE_COLUMNS: &[&str] = &["created_at", "label"];

pub struct EquipmentRepository {
    pool: PgPool,
}

impl EquipmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: CreateEquipmentRequest) -> Result<Equipment, AppError> {
        let equipment = sqlx::query_as::<_, Equipment>(
            r#"
            INSERT INTO equipment (id, label, uom_id, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.label)
        .bind(request.uom_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("error creating equipment: {}", e);
            AppError::BadRequest("Failed to Create".to_string())
        })?;

        Ok(equipment)
    }

    pub async fn find_many(
        &self,
        filter: &FilterSet,
        pagination: &Pagination,
    ) -> Result<Vec<Equipment>, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT * FROM equipment");
        filter.apply(&mut builder);
        builder.push(" ORDER BY ");
        builder.push(pagination.sort_column(EQUIPMENT_SORTABLE_COLUMNS));
        builder.push(" ");
        builder.push(pagination.sort_order.as_sql());
        builder.push(" LIMIT ");
        builder.push_bind(pagination.limit);
        builder.push(" OFFSET ");
        builder.push_bind(pagination.skip);

        let equipment = builder
            .build_query_as::<Equipment>()
            .fetch_all(&self.pool)
            .await?;

        Ok(equipment)
    }

    pub async fn count(&self, filter: &FilterSet) -> Result<i64, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM equipment");
        filter.apply(&mut builder);

        let total = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Equipment>, AppError> {
        let equipment = sqlx::query_as::<_, Equipment>("SELECT * FROM equipment WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(equipment)
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateEquipmentRequest,
    ) -> Result<Equipment, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Equipment Not Found".to_string()))?;

        let equipment = sqlx::query_as::<_, Equipment>(
            r#"
            UPDATE equipment
            SET label = $2, uom_id = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.label.unwrap_or(current.label))
        .bind(request.uom_id.or(current.uom_id))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("error updating equipment {}: {}", id, e);
            AppError::BadRequest("Failed to Update Equipment".to_string())
        })?;

        Ok(equipment)
    }
}
