use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common_dto::{ApiResponse, Meta};
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleFilterQuery};
use crate::models::vehicle::Vehicle;
use crate::repositories::vehicle_repository::{VehicleRepository, VEHICLE_SEARCHABLE_COLUMNS};
use crate::utils::errors::AppResult;
use crate::utils::filters::{parse_uuid_param, FilterSet};
use crate::utils::pagination::{calculate_pagination, PaginationOptions};

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> AppResult<ApiResponse<Vehicle>> {
        request.validate()?;
        let vehicle = self.repository.create(request).await?;
        Ok(ApiResponse::ok("Vehicle Created Successfully", vehicle))
    }

    pub async fn get_all(
        &self,
        filters: VehicleFilterQuery,
        options: PaginationOptions,
    ) -> AppResult<ApiResponse<Vec<Vehicle>>> {
        let pagination = calculate_pagination(&options);

        let mut filter = FilterSet::new();
        filter
            .search(VEHICLE_SEARCHABLE_COLUMNS, filters.search_term)
            .eq_text("is_active", filters.is_active)
            .eq_uuid("brand_id", parse_uuid_param(filters.brand_id, "brandId")?);

        let data = self.repository.find_many(&filter, &pagination).await?;
        let total = self.repository.count(&filter).await?;

        Ok(ApiResponse::ok_with_meta(
            "Vehicles retrieved successfully",
            Meta::new(pagination.page, pagination.limit, total),
            data,
        ))
    }

    /// La ausencia se devuelve como data: null, no como 404
    pub async fn get_single(&self, id: Uuid) -> AppResult<ApiResponse<Vehicle>> {
        let vehicle = self.repository.find_by_id(id).await?;
        Ok(ApiResponse::ok_nullable("Vehicle retrieved successfully", vehicle))
    }

    pub async fn update_single(
        &self,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> AppResult<ApiResponse<Vehicle>> {
        request.validate()?;
        let vehicle = self.repository.update(id, request).await?;
        Ok(ApiResponse::ok("Vehicle Updated Successfully", vehicle))
    }

    pub async fn inactive(&self, id: Uuid) -> AppResult<ApiResponse<Vehicle>> {
        let vehicle = self.repository.inactive(id).await?;
        Ok(ApiResponse::ok("Vehicle Inactive Successfully", vehicle))
    }
}
