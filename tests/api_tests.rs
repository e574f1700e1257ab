use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::get,
    Json, Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

// App de test con la misma forma de respuesta que el servidor real;
// los endpoints con base de datos se prueban contra un Postgres vivo
async fn create_test_app() -> Router {
    Router::new()
        .route(
            "/health",
            get(|| async {
                Json(json!({
                    "service": "fleet-management",
                    "status": "healthy",
                }))
            }),
        )
        .route(
            "/api/v1/vehicle",
            get(|| async {
                Json(json!({
                    "success": true,
                    "statusCode": 200,
                    "message": "Vehicles retrieved successfully",
                    "meta": { "page": 1, "limit": 10, "total": 0, "totalPage": 0 },
                    "data": [],
                }))
            }),
        )
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app().await;

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["service"], "fleet-management");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_list_envelope_shape() {
    let app = create_test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/vehicle")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["statusCode"], 200);
    assert!(body["meta"]["totalPage"].is_number());
    assert!(body["data"].is_array());
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = create_test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/nope")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
