use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common_dto::{ApiResponse, Meta};
use crate::dto::trip_dto::{CreateTripRequest, TripFilterQuery, UpdateTripRequest};
use crate::models::trip::Trip;
use crate::repositories::trip_repository::{TripRepository, TRIP_SEARCHABLE_COLUMNS};
use crate::utils::errors::AppResult;
use crate::utils::filters::{parse_uuid_param, FilterSet};
use crate::utils::pagination::{calculate_pagination, PaginationOptions};

pub struct TripController {
    repository: TripRepository,
}

impl TripController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TripRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateTripRequest) -> AppResult<ApiResponse<Trip>> {
        request.validate()?;
        let trip = self.repository.create(request).await?;
        Ok(ApiResponse::ok("Trip Created Successfully", trip))
    }

    pub async fn get_all(
        &self,
        filters: TripFilterQuery,
        options: PaginationOptions,
    ) -> AppResult<ApiResponse<Vec<Trip>>> {
        let pagination = calculate_pagination(&options);

        let mut filter = FilterSet::new();
        filter
            .search(TRIP_SEARCHABLE_COLUMNS, filters.search_term)
            .eq_uuid("vehicle_id", parse_uuid_param(filters.vehicle_id, "vehicleId")?)
            .eq_text("status", filters.status);

        let data = self.repository.find_many(&filter, &pagination).await?;
        let total = self.repository.count(&filter).await?;

        Ok(ApiResponse::ok_with_meta(
            "Trips retrieved successfully",
            Meta::new(pagination.page, pagination.limit, total),
            data,
        ))
    }

    pub async fn get_single(&self, id: Uuid) -> AppResult<ApiResponse<Trip>> {
        let trip = self.repository.find_by_id(id).await?;
        Ok(ApiResponse::ok_nullable("Trip retrieved successfully", trip))
    }

    pub async fn update_single(
        &self,
        id: Uuid,
        request: UpdateTripRequest,
    ) -> AppResult<ApiResponse<Trip>> {
        request.validate()?;
        let trip = self.repository.update(id, request).await?;
        Ok(ApiResponse::ok("Trip Updated Successfully", trip))
    }

    pub async fn delete_single(&self, id: Uuid) -> AppResult<ApiResponse<Trip>> {
        let trip = self.repository.delete(id).await?;
        Ok(ApiResponse::ok("Trip Deleted Successfully", trip))
    }
}
