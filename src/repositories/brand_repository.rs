use chrono::Utc;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::dto::brand_dto::{CreateBrandRequest, UpdateBrandRequest};
use crate::models::brand::Brand;
use crate::utils::errors::AppError;
use crate::utils::filters::FilterSet;
use crate::utils::pagination::Pagination;

pub const BRAND_SEARCHABLE_COLUMNS: &[&str] = &["label"];

pub const BRAND_SORTABLE_COLUMNS: &[&str] = &["created_at", "label"];

pub struct BrandRepository {
    pool: PgPool,
}

impl BrandRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: CreateBrandRequest) -> Result<Brand, AppError> {
        let brand = sqlx::query_as::<_, Brand>(
            r#"
            INSERT INTO brands (id, label, created_at)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.label)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("error creating brand: {}", e);
            AppError::BadRequest("Failed to Create".to_string())
        })?;

        Ok(brand)
    }

    pub async fn find_many(
        &self,
        filter: &FilterSet,
        pagination: &Pagination,
    ) -> Result<Vec<Brand>, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT * FROM brands");
        filter.apply(&mut builder);
        builder.push(" ORDER BY ");
        builder.push(pagination.sort_column(BRAND_SORTABLE_COLUMNS));
        builder.push(" ");
        builder.push(pagination.sort_order.as_sql());
        builder.push(" LIMIT ");
        builder.push_bind(pagination.limit);
        builder.push(" OFFSET ");
        builder.push_bind(pagination.skip);

        let brands = builder.build_query_as::<Brand>().fetch_all(&self.pool).await?;

        Ok(brands)
    }

    pub async fn count(&self, filter: &FilterSet) -> Result<i64, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM brands");
        filter.apply(&mut builder);

        let total = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Brand>, AppError> {
        let brand = sqlx::query_as::<_, Brand>("SELECT * FROM brands WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(brand)
    }

    pub async fn update(&self, id: Uuid, request: UpdateBrandRequest) -> Result<Brand, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Brand Not Found".to_string()))?;

        let brand = sqlx::query_as::<_, Brand>(
            r#"
            UPDATE brands
            SET label = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.label.unwrap_or(current.label))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("error updating brand {}: {}", id, e);
            AppError::BadRequest("Failed to Update Brand".to_string())
        })?;

        Ok(brand)
    }
}
