use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::brand_dto::{BrandFilterQuery, CreateBrandRequest, UpdateBrandRequest};
use crate::dto::common_dto::{ApiResponse, Meta};
use crate::models::brand::Brand;
use crate::repositories::brand_repository::{BrandRepository, BRAND_SEARCHABLE_COLUMNS};
use crate::utils::errors::AppResult;
use crate::utils::filters::FilterSet;
use crate::utils::pagination::{calculate_pagination, PaginationOptions};

pub struct BrandController {
    repository: BrandRepository,
}

impl BrandController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: BrandRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateBrandRequest) -> AppResult<ApiResponse<Brand>> {
        request.validate()?;
        let brand = self.repository.create(request).await?;
        Ok(ApiResponse::ok("Brand Added Successfully", brand))
    }

    pub async fn get_all(
        &self,
        filters: BrandFilterQuery,
        options: PaginationOptions,
    ) -> AppResult<ApiResponse<Vec<Brand>>> {
        let pagination = calculate_pagination(&options);

        let mut filter = FilterSet::new();
        filter.search(BRAND_SEARCHABLE_COLUMNS, filters.search_term);

        let data = self.repository.find_many(&filter, &pagination).await?;
        let total = self.repository.count(&filter).await?;

        Ok(ApiResponse::ok_with_meta(
            "Brands retrieved successfully",
            Meta::new(pagination.page, pagination.limit, total),
            data,
        ))
    }

    pub async fn get_single(&self, id: Uuid) -> AppResult<ApiResponse<Brand>> {
        let brand = self.repository.find_by_id(id).await?;
        Ok(ApiResponse::ok_nullable("Brand retrieved successfully", brand))
    }

    pub async fn update_single(
        &self,
        id: Uuid,
        request: UpdateBrandRequest,
    ) -> AppResult<ApiResponse<Brand>> {
        request.validate()?;
        let brand = self.repository.update(id, request).await?;
        Ok(ApiResponse::ok("Brand Updated Successfully", brand))
    }
}
