use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::trip_controller::TripController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::trip_dto::{CreateTripRequest, TripFilterQuery, UpdateTripRequest};
use crate::models::trip::Trip;
use crate::state::AppState;
use crate::utils::errors::AppResult;
use crate::utils::pagination::PaginationOptions;

pub fn create_trip_router() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_trip))
        .route("/", get(get_trips))
        .route("/:id", get(get_trip).patch(update_trip).delete(delete_trip))
}

async fn create_trip(
    State(state): State<AppState>,
    Json(request): Json<CreateTripRequest>,
) -> AppResult<Json<ApiResponse<Trip>>> {
    let controller = TripController::new(state.pool.clone());
    Ok(Json(controller.create(request).await?))
}

async fn get_trips(
    State(state): State<AppState>,
    Query(filters): Query<TripFilterQuery>,
    Query(options): Query<PaginationOptions>,
) -> AppResult<Json<ApiResponse<Vec<Trip>>>> {
    let controller = TripController::new(state.pool.clone());
    Ok(Json(controller.get_all(filters, options).await?))
}

async fn get_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Trip>>> {
    let controller = TripController::new(state.pool.clone());
    Ok(Json(controller.get_single(id).await?))
}

async fn update_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTripRequest>,
) -> AppResult<Json<ApiResponse<Trip>>> {
    let controller = TripController::new(state.pool.clone());
    Ok(Json(controller.update_single(id, request).await?))
}

async fn delete_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Trip>>> {
    let controller = TripController::new(state.pool.clone());
    Ok(Json(controller.delete_single(id).await?))
}
