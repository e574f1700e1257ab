use serde::Deserialize;
use validator::Validate;

/// Request para crear una marca
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBrandRequest {
    #[validate(length(min = 1, message = "Brand is Required"))]
    pub label: String,
}

/// Request para actualizar una marca
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBrandRequest {
    #[validate(length(min = 1, message = "Brand cannot be empty"))]
    pub label: Option<String>,
}

/// Filtros del listado de marcas
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandFilterQuery {
    pub search_term: Option<String>,
}
