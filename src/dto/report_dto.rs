//! Formas de los reportes
//!
//! Los reportes devuelven la selección anidada cruda; la sumatoria final es
//! trabajo de la capa de presentación.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Query params

/// Filtro del stock status: a lo sumo un equipo puntual
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockStatusQuery {
    pub id: Option<String>,
}

/// Filtros del vehicle summary report
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryReportQuery {
    pub vehicle_id: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

// ---------------------------------------------------------------------------
// Selecciones anidadas

/// Registro del que solo interesa el monto
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountRecord {
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseAmount {
    pub amount: Decimal,
    pub is_misc: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleValue {
    pub vehicle_value: Decimal,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceCharge {
    pub service_charge: Decimal,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentUsePrice {
    pub total_price: Decimal,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccidentAmount {
    pub payment_status: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperWorkAmount {
    pub total_amount: Decimal,
}

// ---------------------------------------------------------------------------
// Balance sheet

/// Un account head con todas sus sub-colecciones financieras
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheetHead {
    pub id: Uuid,
    pub label: String,
    pub account_type: Option<String>,
    pub trips: Vec<AmountRecord>,
    pub expenses: Vec<ExpenseAmount>,
    pub vehicles: Vec<VehicleValue>,
    pub maintenances: Vec<MaintenanceCharge>,
    pub equipment_uses: Vec<EquipmentUsePrice>,
    pub accident_histories: Vec<AccidentAmount>,
    pub paper_works: Vec<PaperWorkAmount>,
}

// ---------------------------------------------------------------------------
// Fuel status

/// Vehículo con sus cargas de combustible y los gastos de la categoría
/// Fuel Expense
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelStatusVehicle {
    pub id: Uuid,
    pub reg_no: String,
    pub model: Option<String>,
    pub is_active: bool,
    pub fuels: Vec<AmountRecord>,
    pub expenses: Vec<AmountRecord>,
}

// ---------------------------------------------------------------------------
// Stock status

/// Equipo anotado con el total entrante y el consumo in-house
#[derive(Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct StockStatusRow {
    pub id: Uuid,
    pub label: String,
    pub uom: Option<String>,
    pub total_in: Decimal,
    pub total_used: Decimal,
}

// ---------------------------------------------------------------------------
// Vehicle summary report

/// Vehículo con sus sub-colecciones filtradas por rango de fechas
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSummaryRow {
    pub id: Uuid,
    pub reg_no: String,
    pub model: Option<String>,
    pub is_active: bool,
    pub trips: Vec<AmountRecord>,
    pub expenses: Vec<ExpenseAmount>,
    pub maintenances: Vec<MaintenanceCharge>,
    pub paper_works: Vec<PaperWorkAmount>,
    pub equipment_uses: Vec<EquipmentUsePrice>,
}

// ---------------------------------------------------------------------------
// Summaries

/// Totales planos de viajes completados y gastos no-misc; cada campo se
/// omite cuando no hubo filas que lo respalden
#[derive(Debug, Default, Serialize)]
pub struct TripSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense: Option<Decimal>,
}

/// Un grupo año/mes de viajes (los nombres siguen los alias SQL)
#[derive(Debug, Serialize, FromRow)]
pub struct MonthlyTripSummary {
    pub year: i32,
    pub month: i32,
    pub total_amount: Decimal,
}

/// Un grupo año/mes de combustible
#[derive(Debug, Serialize, FromRow)]
pub struct MonthlyFuelSummary {
    pub year: i32,
    pub month: i32,
    pub total_quantity: Decimal,
    pub total_amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trip_summary_omits_absent_fields() {
        let body = serde_json::to_value(TripSummary::default()).unwrap();
        assert_eq!(body, serde_json::json!({}));

        let body = serde_json::to_value(TripSummary {
            count: Some(2),
            amount: Some(Decimal::new(150, 0)),
            expense: None,
        })
        .unwrap();
        assert_eq!(body["count"], 2);
        assert!(body.get("expense").is_none());
    }
}
