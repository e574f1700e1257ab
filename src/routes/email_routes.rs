use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::email_controller::EmailController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::email_dto::{CreateEmailRequest, EmailFilterQuery};
use crate::models::email::EmailNotification;
use crate::state::AppState;
use crate::utils::errors::AppResult;
use crate::utils::pagination::PaginationOptions;

pub fn create_email_router() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_email))
        .route("/", get(get_emails))
}

async fn create_email(
    State(state): State<AppState>,
    Json(request): Json<CreateEmailRequest>,
) -> AppResult<Json<ApiResponse<EmailNotification>>> {
    let controller = EmailController::new(state.pool.clone());
    Ok(Json(controller.create(request).await?))
}

async fn get_emails(
    State(state): State<AppState>,
    Query(filters): Query<EmailFilterQuery>,
    Query(options): Query<PaginationOptions>,
) -> AppResult<Json<ApiResponse<Vec<EmailNotification>>>> {
    let controller = EmailController::new(state.pool.clone());
    Ok(Json(controller.get_all(filters, options).await?))
}
