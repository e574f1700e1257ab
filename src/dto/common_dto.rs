//! Envelope genérico de respuesta
//!
//! Todas las respuestas exitosas comparten la misma forma:
//! `{ success, statusCode, message, meta?, data }`.

use http::StatusCode;
use serde::Serialize;

/// Metadata de paginación de los listados
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_page: i64,
}

impl Meta {
    pub fn new(page: i64, limit: i64, total: i64) -> Self {
        Self {
            page,
            limit,
            total,
            total_page: (total + limit - 1) / limit,
        }
    }
}

/// Respuesta genérica de la API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub status_code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(message: &str, data: T) -> Self {
        Self {
            success: true,
            status_code: StatusCode::OK.as_u16(),
            message: message.to_string(),
            meta: None,
            data: Some(data),
        }
    }

    pub fn ok_with_meta(message: &str, meta: Meta, data: T) -> Self {
        Self {
            success: true,
            status_code: StatusCode::OK.as_u16(),
            message: message.to_string(),
            meta: Some(meta),
            data: Some(data),
        }
    }

    /// Para getSingle: la ausencia se pasa como `data: null`, no es error
    pub fn ok_nullable(message: &str, data: Option<T>) -> Self {
        Self {
            success: true,
            status_code: StatusCode::OK.as_u16(),
            message: message.to_string(),
            meta: None,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_page_is_ceil_of_total_over_limit() {
        assert_eq!(Meta::new(1, 10, 0).total_page, 0);
        assert_eq!(Meta::new(1, 10, 10).total_page, 1);
        assert_eq!(Meta::new(1, 10, 11).total_page, 2);
        assert_eq!(Meta::new(1, 3, 7).total_page, 3);
    }

    #[test]
    fn meta_is_omitted_when_absent() {
        let body = serde_json::to_value(ApiResponse::ok("ok", 1)).unwrap();
        assert!(body.get("meta").is_none());
        assert_eq!(body["success"], true);
        assert_eq!(body["statusCode"], 200);
    }

    #[test]
    fn nullable_data_serializes_as_null() {
        let body = serde_json::to_value(ApiResponse::<i32>::ok_nullable("ok", None)).unwrap();
        assert!(body["data"].is_null());
    }

    #[test]
    fn meta_serializes_camel_case() {
        let response = ApiResponse::ok_with_meta("ok", Meta::new(2, 10, 35), vec![1, 2]);
        let body = serde_json::to_value(response).unwrap();
        assert_eq!(body["meta"]["totalPage"], 4);
        assert_eq!(body["meta"]["total"], 35);
        assert_eq!(body["meta"]["page"], 2);
    }
}
