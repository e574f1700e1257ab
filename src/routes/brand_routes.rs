use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::brand_controller::BrandController;
use crate::dto::brand_dto::{BrandFilterQuery, CreateBrandRequest, UpdateBrandRequest};
use crate::dto::common_dto::ApiResponse;
use crate::models::brand::Brand;
use crate::state::AppState;
use crate::utils::errors::AppResult;
use crate::utils::pagination::PaginationOptions;

pub fn create_brand_router() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_brand))
        .route("/", get(get_brands))
        .route("/:id", get(get_brand).patch(update_brand))
}

async fn create_brand(
    State(state): State<AppState>,
    Json(request): Json<CreateBrandRequest>,
) -> AppResult<Json<ApiResponse<Brand>>> {
    let controller = BrandController::new(state.pool.clone());
    Ok(Json(controller.create(request).await?))
}

async fn get_brands(
    State(state): State<AppState>,
    Query(filters): Query<BrandFilterQuery>,
    Query(options): Query<PaginationOptions>,
) -> AppResult<Json<ApiResponse<Vec<Brand>>>> {
    let controller = BrandController::new(state.pool.clone());
    Ok(Json(controller.get_all(filters, options).await?))
}

async fn get_brand(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Brand>>> {
    let controller = BrandController::new(state.pool.clone());
    Ok(Json(controller.get_single(id).await?))
}

async fn update_brand(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateBrandRequest>,
) -> AppResult<Json<ApiResponse<Brand>>> {
    let controller = BrandController::new(state.pool.clone());
    Ok(Json(controller.update_single(id, request).await?))
}
