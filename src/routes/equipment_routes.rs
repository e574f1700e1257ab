use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::equipment_controller::EquipmentController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::equipment_dto::{
    CreateEquipmentRequest, EquipmentFilterQuery, UpdateEquipmentRequest,
};
use crate::models::equipment::Equipment;
use crate::state::AppState;
use crate::utils::errors::AppResult;
use crate::utils::pagination::PaginationOptions;

pub fn create_equipment_router() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_equipment))
        .route("/", get(get_equipment_list))
        .route("/:id", get(get_equipment).patch(update_equipment))
}

async fn create_equipment(
    State(state): State<AppState>,
    Json(request): Json<CreateEquipmentRequest>,
) -> AppResult<Json<ApiResponse<Equipment>>> {
    let controller = EquipmentController::new(state.pool.clone());
    Ok(Json(controller.create(request).await?))
}

async fn get_equipment_list(
    State(state): State<AppState>,
    Query(filters): Query<EquipmentFilterQuery>,
    Query(options): Query<PaginationOptions>,
) -> AppResult<Json<ApiResponse<Vec<Equipment>>>> {
    let controller = EquipmentController::new(state.pool.clone());
    Ok(Json(controller.get_all(filters, options).await?))
}

async fn get_equipment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Equipment>>> {
    let controller = EquipmentController::new(state.pool.clone());
    Ok(Json(controller.get_single(id).await?))
}

async fn update_equipment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateEquipmentRequest>,
) -> AppResult<Json<ApiResponse<Equipment>>> {
    let controller = EquipmentController::new(state.pool.clone());
    Ok(Json(controller.update_single(id, request).await?))
}
