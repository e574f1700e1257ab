use serde::Deserialize;
use validator::Validate;

/// Request para registrar una notificación por email
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmailRequest {
    #[validate(length(min = 1, message = "Name is Required"))]
    pub name: String,
    #[validate(email(message = "Email is Required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Details is Required"))]
    pub details: String,
}

/// Filtros del listado de notificaciones
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailFilterQuery {
    pub search_term: Option<String>,
}
