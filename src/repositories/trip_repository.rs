use chrono::Utc;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::dto::trip_dto::{CreateTripRequest, UpdateTripRequest};
use crate::models::trip::Trip;
use crate::utils::errors::AppError;
use crate::utils::filters::FilterSet;
use crate::utils::pagination::Pagination;

pub const TRIP_SEARCHABLE_COLUMNS: &[&str] = &["from_location", "to_location", "status"];

pub const TRIP_SORTABLE_COLUMNS: &[&str] = &["created_at", "start_date", "amount", "status"];

/// Status inicial de un viaje recién creado
const TRIP_STATUS_DEFAULT: &str = "Pending";

pub struct TripRepository {
    pool: PgPool,
}

impl TripRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: CreateTripRequest) -> Result<Trip, AppError> {
        let trip = sqlx::query_as::<_, Trip>(
            r#"
            INSERT INTO trips (id, vehicle_id, account_head_id, from_location, to_location, status, amount, start_date, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.vehicle_id)
        .bind(request.account_head_id)
        .bind(request.from_location)
        .bind(request.to_location)
        .bind(request.status.unwrap_or_else(|| TRIP_STATUS_DEFAULT.to_string()))
        .bind(request.amount)
        .bind(request.start_date)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("error creating trip: {}", e);
            AppError::BadRequest("Failed to Create".to_string())
        })?;

        Ok(trip)
    }

    pub async fn find_many(
        &self,
        filter: &FilterSet,
        pagination: &Pagination,
    ) -> Result<Vec<Trip>, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT * FROM trips");
        filter.apply(&mut builder);
        builder.push(" ORDER BY ");
        builder.push(pagination.sort_column(TRIP_SORTABLE_COLUMNS));
        builder.push(" ");
        builder.push(pagination.sort_order.as_sql());
        builder.push(" LIMIT ");
        builder.push_bind(pagination.limit);
        builder.push(" OFFSET ");
        builder.push_bind(pagination.skip);

        let trips = builder.build_query_as::<Trip>().fetch_all(&self.pool).await?;

        Ok(trips)
    }

    pub async fn count(&self, filter: &FilterSet) -> Result<i64, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM trips");
        filter.apply(&mut builder);

        let total = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Trip>, AppError> {
        let trip = sqlx::query_as::<_, Trip>("SELECT * FROM trips WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(trip)
    }

    pub async fn update(&self, id: Uuid, request: UpdateTripRequest) -> Result<Trip, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Trip Not Found".to_string()))?;

        let trip = sqlx::query_as::<_, Trip>(
            r#"
            UPDATE trips
            SET vehicle_id = $2, account_head_id = $3, from_location = $4, to_location = $5, status = $6, amount = $7, start_date = $8
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.vehicle_id.unwrap_or(current.vehicle_id))
        .bind(request.account_head_id.or(current.account_head_id))
        .bind(request.from_location.unwrap_or(current.from_location))
        .bind(request.to_location.unwrap_or(current.to_location))
        .bind(request.status.unwrap_or(current.status))
        .bind(request.amount.unwrap_or(current.amount))
        .bind(request.start_date.unwrap_or(current.start_date))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("error updating trip {}: {}", id, e);
            AppError::BadRequest("Failed to Update Trip".to_string())
        })?;

        Ok(trip)
    }

    /// Los viajes sí se borran físicamente
    pub async fn delete(&self, id: Uuid) -> Result<Trip, AppError> {
        let trip = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Trip Not Found".to_string()))?;

        sqlx::query("DELETE FROM trips WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(trip)
    }
}
