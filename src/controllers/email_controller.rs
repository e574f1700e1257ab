use sqlx::PgPool;
use validator::Validate;

use crate::dto::common_dto::{ApiResponse, Meta};
use crate::dto::email_dto::{CreateEmailRequest, EmailFilterQuery};
use crate::models::email::EmailNotification;
use crate::repositories::email_repository::{EmailRepository, EMAIL_SEARCHABLE_COLUMNS};
use crate::utils::errors::AppResult;
use crate::utils::filters::FilterSet;
use crate::utils::pagination::{calculate_pagination, PaginationOptions};

pub struct EmailController {
    repository: EmailRepository,
}

impl EmailController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: EmailRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateEmailRequest,
    ) -> AppResult<ApiResponse<EmailNotification>> {
        request.validate()?;
        let notification = self.repository.create(request).await?;
        Ok(ApiResponse::ok("Email Sent Successfully", notification))
    }

    pub async fn get_all(
        &self,
        filters: EmailFilterQuery,
        options: PaginationOptions,
    ) -> AppResult<ApiResponse<Vec<EmailNotification>>> {
        let pagination = calculate_pagination(&options);

        let mut filter = FilterSet::new();
        filter.search(EMAIL_SEARCHABLE_COLUMNS, filters.search_term);

        let data = self.repository.find_many(&filter, &pagination).await?;
        let total = self.repository.count(&filter).await?;

        Ok(ApiResponse::ok_with_meta(
            "Emails retrieved successfully",
            Meta::new(pagination.page, pagination.limit, total),
            data,
        ))
    }
}
