//! Orquestación de los reportes
//!
//! Siete operaciones read-only compuestas desde el facade de datos; acá solo
//! se normalizan filtros/paginación y se arma el envelope.

use sqlx::PgPool;

use crate::dto::common_dto::{ApiResponse, Meta};
use crate::dto::report_dto::{
    BalanceSheetHead, FuelStatusVehicle, MonthlyFuelSummary, MonthlyTripSummary, StockStatusQuery,
    StockStatusRow, SummaryReportQuery, TripSummary, VehicleSummaryRow,
};
use crate::repositories::report_repository::ReportRepository;
use crate::utils::datetime::{day_end, day_start, parse_date_param};
use crate::utils::errors::AppResult;
use crate::utils::filters::{parse_uuid_param, FilterSet};
use crate::utils::pagination::{calculate_pagination, PaginationOptions};

pub struct ReportController {
    repository: ReportRepository,
}

impl ReportController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ReportRepository::new(pool),
        }
    }

    pub async fn balance_sheet(&self) -> AppResult<ApiResponse<Vec<BalanceSheetHead>>> {
        let sheet = self.repository.balance_sheet().await?;
        Ok(ApiResponse::ok("Balance Sheet retrieved successfully", sheet))
    }

    pub async fn fuel_status(&self) -> AppResult<ApiResponse<Vec<FuelStatusVehicle>>> {
        let status = self.repository.fuel_status().await?;
        Ok(ApiResponse::ok("Fuel Status retrieved successfully", status))
    }

    pub async fn stock_status(
        &self,
        query: StockStatusQuery,
        options: PaginationOptions,
    ) -> AppResult<ApiResponse<Vec<StockStatusRow>>> {
        let pagination = calculate_pagination(&options);

        let mut filter = FilterSet::new();
        filter.eq_uuid("e.id", parse_uuid_param(query.id, "id")?);

        let data = self.repository.stock_status(&filter, &pagination).await?;
        let total = self.repository.count_equipment(&filter).await?;

        Ok(ApiResponse::ok_with_meta(
            "Stock Status retrieved successfully",
            Meta::new(pagination.page, pagination.limit, total),
            data,
        ))
    }

    pub async fn vehicle_summary(
        &self,
        query: SummaryReportQuery,
        options: PaginationOptions,
    ) -> AppResult<ApiResponse<Vec<VehicleSummaryRow>>> {
        let pagination = calculate_pagination(&options);

        let mut filter = FilterSet::new();
        filter.eq_uuid("id", parse_uuid_param(query.vehicle_id, "vehicleId")?);

        // Rango inclusivo de día completo
        let start = parse_date_param(query.start_date, "startDate")?.map(day_start);
        let end = parse_date_param(query.end_date, "endDate")?.map(day_end);

        let data = self
            .repository
            .vehicle_summary(&filter, &pagination, start, end)
            .await?;
        let total = self.repository.count_vehicles(&filter).await?;

        Ok(ApiResponse::ok_with_meta(
            "Summary Report retrieved successfully",
            Meta::new(pagination.page, pagination.limit, total),
            data,
        ))
    }

    pub async fn trip_summary(&self) -> AppResult<ApiResponse<TripSummary>> {
        let summary = self.repository.trip_summary().await?;
        Ok(ApiResponse::ok("Trip Summary retrieved successfully", summary))
    }

    pub async fn trip_summary_monthly(&self) -> AppResult<ApiResponse<Vec<MonthlyTripSummary>>> {
        let rows = self.repository.trip_summary_group_by_month_year().await?;
        Ok(ApiResponse::ok("Trip Summary retrieved successfully", rows))
    }

    pub async fn fuel_summary_monthly(&self) -> AppResult<ApiResponse<Vec<MonthlyFuelSummary>>> {
        let rows = self.repository.fuel_summary_group_by_month_year().await?;
        Ok(ApiResponse::ok("Fuel Summary retrieved successfully", rows))
    }
}
