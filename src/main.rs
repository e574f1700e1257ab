mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod state;
mod utils;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use database::create_pool;
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚚 Fleet Management Back Office");
    info!("===============================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let pool = match create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(e);
        }
    };

    // CORS: permisivo en desarrollo, orígenes explícitos en producción
    let cors = if config.is_production() {
        cors_middleware_with_origins(&config.cors_origins)
    } else {
        cors_middleware()
    };

    let addr: SocketAddr = config.server_url().parse()?;
    let app_state = AppState::new(pool, config);

    let app = Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1/vehicle", routes::vehicle_routes::create_vehicle_router())
        .nest("/api/v1/trip", routes::trip_routes::create_trip_router())
        .nest("/api/v1/equipment", routes::equipment_routes::create_equipment_router())
        .nest("/api/v1/brand", routes::brand_routes::create_brand_router())
        .nest("/api/v1/email", routes::email_routes::create_email_router())
        .nest("/api/v1/report", routes::report_routes::create_report_router())
        .layer(cors)
        .with_state(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET   /health - Health check");
    info!("🚗 Vehicle:");
    info!("   POST  /api/v1/vehicle/create - Crear vehículo");
    info!("   GET   /api/v1/vehicle - Listar vehículos");
    info!("   GET   /api/v1/vehicle/:id - Obtener vehículo");
    info!("   PATCH /api/v1/vehicle/:id - Actualizar vehículo");
    info!("   PATCH /api/v1/vehicle/:id/inactive - Soft delete");
    info!("🛣  Trip:");
    info!("   POST  /api/v1/trip/create - Crear viaje");
    info!("   GET   /api/v1/trip - Listar viajes");
    info!("   GET   /api/v1/trip/:id - Obtener viaje");
    info!("   PATCH /api/v1/trip/:id - Actualizar viaje");
    info!("   DELETE /api/v1/trip/:id - Borrar viaje");
    info!("🔧 Equipment / Brand / Email: create, list, get, update");
    info!("📊 Report:");
    info!("   GET   /api/v1/report/balance-sheet");
    info!("   GET   /api/v1/report/fuel-status");
    info!("   GET   /api/v1/report/stock-status");
    info!("   GET   /api/v1/report/vehicle-summary");
    info!("   GET   /api/v1/report/trip-summary");
    info!("   GET   /api/v1/report/trip-summary-monthly");
    info!("   GET   /api/v1/report/fuel-summary-monthly");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check simple
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "service": "fleet-management",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
