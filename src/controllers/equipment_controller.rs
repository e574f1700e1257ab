use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common_dto::{ApiResponse, Meta};
use crate::dto::equipment_dto::{
    CreateEquipmentRequest, EquipmentFilterQuery, UpdateEquipmentRequest,
};
use crate::models::equipment::Equipment;
use crate::repositories::equipment_repository::{
    EquipmentRepository, EQUIPMENT_SEARCHABLE_COLUMNS,
};
use crate::utils::errors::AppResult;
use crate::utils::filters::FilterSet;
use crate::utils::pagination::{calculate_pagination, PaginationOptions};

pub struct EquipmentController {
    repository: EquipmentRepository,
}

impl EquipmentController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: EquipmentRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateEquipmentRequest) -> AppResult<ApiResponse<Equipment>> {
        request.validate()?;
        let equipment = self.repository.create(request).await?;
        Ok(ApiResponse::ok("Equipment Added Successfully", equipment))
    }

    pub async fn get_all(
        &self,
        filters: EquipmentFilterQuery,
        options: PaginationOptions,
    ) -> AppResult<ApiResponse<Vec<Equipment>>> {
        let pagination = calculate_pagination(&options);

        let mut filter = FilterSet::new();
        filter.search(EQUIPMENT_SEARCHABLE_COLUMNS, filters.search_term);

        let data = self.repository.find_many(&filter, &pagination).await?;
        let total = self.repository.count(&filter).await?;

        Ok(ApiResponse::ok_with_meta(
            "Equipment retrieved successfully",
            Meta::new(pagination.page, pagination.limit, total),
            data,
        ))
    }

    pub async fn get_single(&self, id: Uuid) -> AppResult<ApiResponse<Equipment>> {
        let equipment = self.repository.find_by_id(id).await?;
        Ok(ApiResponse::ok_nullable(
            "Equipment retrieved successfully",
            equipment,
        ))
    }

    pub async fn update_single(
        &self,
        id: Uuid,
        request: UpdateEquipmentRequest,
    ) -> AppResult<ApiResponse<Equipment>> {
        request.validate()?;
        let equipment = self.repository.update(id, request).await?;
        Ok(ApiResponse::ok("Equipment Updated Successfully", equipment))
    }
}
