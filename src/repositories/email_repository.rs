use chrono::Utc;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::dto::email_dto::CreateEmailRequest;
use crate::models::email::EmailNotification;
use crate::utils::errors::AppError;
use crate::utils::filters::FilterSet;
use crate::utils::pagination::Pagination;

pub const EMAIL_SEARCHABLE_COLUMNS: &[&str] = &["name", "email"];

pub const EMAIL_SORTABLE_COLUMNS: &[&str] = &["created_at", "name", "email"];

pub struct EmailRepository {
    pool: PgPool,
}

impl EmailRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: CreateEmailRequest) -> Result<EmailNotification, AppError> {
        let notification = sqlx::query_as::<_, EmailNotification>(
            r#"
            INSERT INTO email_notifications (id, name, email, details, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.name)
        .bind(request.email)
        .bind(request.details)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("error creating email notification: {}", e);
            AppError::BadRequest("Failed to Create".to_string())
        })?;

        Ok(notification)
    }

    pub async fn find_many(
        &self,
        filter: &FilterSet,
        pagination: &Pagination,
    ) -> Result<Vec<EmailNotification>, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT * FROM email_notifications");
        filter.apply(&mut builder);
        builder.push(" ORDER BY ");
        builder.push(pagination.sort_column(EMAIL_SORTABLE_COLUMNS));
        builder.push(" ");
        builder.push(pagination.sort_order.as_sql());
        builder.push(" LIMIT ");
        builder.push_bind(pagination.limit);
        builder.push(" OFFSET ");
        builder.push_bind(pagination.skip);

        let notifications = builder
            .build_query_as::<EmailNotification>()
            .fetch_all(&self.pool)
            .await?;

        Ok(notifications)
    }

    pub async fn count(&self, filter: &FilterSet) -> Result<i64, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM email_notifications");
        filter.apply(&mut builder);

        let total = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }
}
