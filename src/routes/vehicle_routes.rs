use axum::{
    extract::{Path, Query, State},
    routing::{get, patch, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleFilterQuery};
use crate::models::vehicle::Vehicle;
use crate::state::AppState;
use crate::utils::errors::AppResult;
use crate::utils::pagination::PaginationOptions;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_vehicle))
        .route("/", get(get_vehicles))
        .route("/:id", get(get_vehicle).patch(update_vehicle))
        .route("/:id/inactive", patch(inactive_vehicle))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Json(request): Json<CreateVehicleRequest>,
) -> AppResult<Json<ApiResponse<Vehicle>>> {
    let controller = VehicleController::new(state.pool.clone());
    Ok(Json(controller.create(request).await?))
}

async fn get_vehicles(
    State(state): State<AppState>,
    Query(filters): Query<VehicleFilterQuery>,
    Query(options): Query<PaginationOptions>,
) -> AppResult<Json<ApiResponse<Vec<Vehicle>>>> {
    let controller = VehicleController::new(state.pool.clone());
    Ok(Json(controller.get_all(filters, options).await?))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Vehicle>>> {
    let controller = VehicleController::new(state.pool.clone());
    Ok(Json(controller.get_single(id).await?))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVehicleRequest>,
) -> AppResult<Json<ApiResponse<Vehicle>>> {
    let controller = VehicleController::new(state.pool.clone());
    Ok(Json(controller.update_single(id, request).await?))
}

async fn inactive_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Vehicle>>> {
    let controller = VehicleController::new(state.pool.clone());
    Ok(Json(controller.inactive(id).await?))
}
