//! Categorías de gasto
//!
//! Los gastos de combustible son los que cuelgan del expense head con
//! label `"Fuel Expense"`; esa fila de referencia debe existir antes de
//! poder correr el reporte de fuel status.

use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Label del expense head que identifica los gastos de combustible
pub const FUEL_EXPENSE_LABEL: &str = "Fuel Expense";

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseHead {
    pub id: Uuid,
    pub label: String,
}
