use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest};
use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;
use crate::utils::filters::FilterSet;
use crate::utils::pagination::Pagination;

/// Columnas buscables con searchTerm
pub const VEHICLE_SEARCHABLE_COLUMNS: &[&str] = &["reg_no", "model"];

/// Columnas permitidas para sortBy
pub const VEHICLE_SORTABLE_COLUMNS: &[&str] = &["created_at", "reg_no", "model", "vehicle_value"];

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (id, reg_no, model, brand_id, account_head_id, vehicle_value, is_active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, TRUE, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.reg_no)
        .bind(request.model)
        .bind(request.brand_id)
        .bind(request.account_head_id)
        .bind(request.vehicle_value.unwrap_or(Decimal::ZERO))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("error creating vehicle: {}", e);
            AppError::BadRequest("Failed to Create".to_string())
        })?;

        Ok(vehicle)
    }

    pub async fn find_many(
        &self,
        filter: &FilterSet,
        pagination: &Pagination,
    ) -> Result<Vec<Vehicle>, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT * FROM vehicles");
        filter.apply(&mut builder);
        builder.push(" ORDER BY ");
        builder.push(pagination.sort_column(VEHICLE_SORTABLE_COLUMNS));
        builder.push(" ");
        builder.push(pagination.sort_order.as_sql());
        builder.push(" LIMIT ");
        builder.push_bind(pagination.limit);
        builder.push(" OFFSET ");
        builder.push_bind(pagination.skip);

        let vehicles = builder
            .build_query_as::<Vehicle>()
            .fetch_all(&self.pool)
            .await?;

        Ok(vehicles)
    }

    pub async fn count(&self, filter: &FilterSet) -> Result<i64, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM vehicles");
        filter.apply(&mut builder);

        let total = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    /// La ausencia no es error: el caller decide si es fatal
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    /// Chequeo de existencia y luego el patch: dos round trips, last-write-wins
    pub async fn update(&self, id: Uuid, request: UpdateVehicleRequest) -> Result<Vehicle, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle Not Found".to_string()))?;

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET reg_no = $2, model = $3, brand_id = $4, account_head_id = $5, vehicle_value = $6, is_active = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.reg_no.unwrap_or(current.reg_no))
        .bind(request.model.or(current.model))
        .bind(request.brand_id.or(current.brand_id))
        .bind(request.account_head_id.or(current.account_head_id))
        .bind(request.vehicle_value.unwrap_or(current.vehicle_value))
        .bind(request.is_active.unwrap_or(current.is_active))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("error updating vehicle {}: {}", id, e);
            AppError::BadRequest("Failed to Update Vehicle".to_string())
        })?;

        Ok(vehicle)
    }

    /// Soft delete: marca is_active = false y no toca nada más
    pub async fn inactive(&self, id: Uuid) -> Result<Vehicle, AppError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle Not Found".to_string()))?;

        let vehicle = sqlx::query_as::<_, Vehicle>(
            "UPDATE vehicles SET is_active = FALSE WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }
}
