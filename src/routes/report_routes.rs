use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::report_controller::ReportController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::report_dto::{
    BalanceSheetHead, FuelStatusVehicle, MonthlyFuelSummary, MonthlyTripSummary, StockStatusQuery,
    StockStatusRow, SummaryReportQuery, TripSummary, VehicleSummaryRow,
};
use crate::state::AppState;
use crate::utils::errors::AppResult;
use crate::utils::pagination::PaginationOptions;

pub fn create_report_router() -> Router<AppState> {
    Router::new()
        .route("/balance-sheet", get(balance_sheet))
        .route("/fuel-status", get(fuel_status))
        .route("/stock-status", get(stock_status))
        .route("/vehicle-summary", get(vehicle_summary))
        .route("/trip-summary", get(trip_summary))
        .route("/trip-summary-monthly", get(trip_summary_monthly))
        .route("/fuel-summary-monthly", get(fuel_summary_monthly))
}

async fn balance_sheet(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<BalanceSheetHead>>>> {
    let controller = ReportController::new(state.pool.clone());
    Ok(Json(controller.balance_sheet().await?))
}

async fn fuel_status(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<FuelStatusVehicle>>>> {
    let controller = ReportController::new(state.pool.clone());
    Ok(Json(controller.fuel_status().await?))
}

async fn stock_status(
    State(state): State<AppState>,
    Query(query): Query<StockStatusQuery>,
    Query(options): Query<PaginationOptions>,
) -> AppResult<Json<ApiResponse<Vec<StockStatusRow>>>> {
    let controller = ReportController::new(state.pool.clone());
    Ok(Json(controller.stock_status(query, options).await?))
}

async fn vehicle_summary(
    State(state): State<AppState>,
    Query(query): Query<SummaryReportQuery>,
    Query(options): Query<PaginationOptions>,
) -> AppResult<Json<ApiResponse<Vec<VehicleSummaryRow>>>> {
    let controller = ReportController::new(state.pool.clone());
    Ok(Json(controller.vehicle_summary(query, options).await?))
}

async fn trip_summary(State(state): State<AppState>) -> AppResult<Json<ApiResponse<TripSummary>>> {
    let controller = ReportController::new(state.pool.clone());
    Ok(Json(controller.trip_summary().await?))
}

async fn trip_summary_monthly(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<MonthlyTripSummary>>>> {
    let controller = ReportController::new(state.pool.clone());
    Ok(Json(controller.trip_summary_monthly().await?))
}

async fn fuel_summary_monthly(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<MonthlyFuelSummary>>>> {
    let controller = ReportController::new(state.pool.clone());
    Ok(Json(controller.fuel_summary_monthly().await?))
}
