//! Data access de los reportes
//!
//! Las siete operaciones de reporte son lecturas puras compuestas sobre el
//! store. Las selecciones anidadas se arman con una consulta por
//! sub-colección, agrupada por el id del padre; los agregados año/mes que la
//! capa estructurada no puede expresar viven acá como SQL crudo
//! parametrizado y no salen de este módulo.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::dto::report_dto::{
    AccidentAmount, AmountRecord, BalanceSheetHead, EquipmentUsePrice, ExpenseAmount,
    FuelStatusVehicle, MaintenanceCharge, MonthlyFuelSummary, MonthlyTripSummary, PaperWorkAmount,
    StockStatusRow, TripSummary, VehicleSummaryRow, VehicleValue,
};
use crate::models::expense::{ExpenseHead, FUEL_EXPENSE_LABEL};
use crate::models::trip::TRIP_STATUS_COMPLETED;
use crate::models::vehicle::Vehicle;
use crate::repositories::vehicle_repository::VEHICLE_SORTABLE_COLUMNS;
use crate::utils::errors::AppError;
use crate::utils::filters::FilterSet;
use crate::utils::pagination::Pagination;

/// Columnas permitidas para sortBy en los listados de reporte
pub const REPORT_SORTABLE_COLUMNS: &[&str] = &["created_at", "label"];

// Filas crudas de las sub-colecciones, agrupadas por el padre

#[derive(Debug, FromRow)]
struct HeadAmountRow {
    account_head_id: Uuid,
    amount: Decimal,
}

#[derive(Debug, FromRow)]
struct HeadExpenseRow {
    account_head_id: Uuid,
    amount: Decimal,
    is_misc: bool,
}

#[derive(Debug, FromRow)]
struct HeadValueRow {
    account_head_id: Uuid,
    vehicle_value: Decimal,
}

#[derive(Debug, FromRow)]
struct HeadChargeRow {
    account_head_id: Uuid,
    service_charge: Decimal,
}

#[derive(Debug, FromRow)]
struct HeadPriceRow {
    account_head_id: Uuid,
    total_price: Decimal,
}

#[derive(Debug, FromRow)]
struct HeadAccidentRow {
    account_head_id: Uuid,
    payment_status: String,
    amount: Decimal,
}

#[derive(Debug, FromRow)]
struct HeadTotalRow {
    account_head_id: Uuid,
    total_amount: Decimal,
}

#[derive(Debug, FromRow)]
struct AccountHeadRow {
    id: Uuid,
    label: String,
    account_type: Option<String>,
}

#[derive(Debug, FromRow)]
struct VehicleAmountRow {
    vehicle_id: Uuid,
    amount: Decimal,
}

#[derive(Debug, FromRow)]
struct VehicleExpenseRow {
    vehicle_id: Uuid,
    amount: Decimal,
    is_misc: bool,
}

#[derive(Debug, FromRow)]
struct VehicleChargeRow {
    vehicle_id: Uuid,
    service_charge: Decimal,
}

#[derive(Debug, FromRow)]
struct VehicleTotalRow {
    vehicle_id: Uuid,
    total_amount: Decimal,
}

#[derive(Debug, FromRow)]
struct VehiclePriceRow {
    vehicle_id: Uuid,
    total_price: Decimal,
}

/// Agrupa filas por el id del padre
fn bucket<R, V>(
    rows: Vec<R>,
    key: impl Fn(&R) -> Uuid,
    value: impl Fn(R) -> V,
) -> HashMap<Uuid, Vec<V>> {
    let mut groups: HashMap<Uuid, Vec<V>> = HashMap::new();
    for row in rows {
        groups.entry(key(&row)).or_default().push(value(row));
    }
    groups
}

fn take<V>(groups: &mut HashMap<Uuid, Vec<V>>, id: Uuid) -> Vec<V> {
    groups.remove(&id).unwrap_or_default()
}

/// Filtro de sub-colección: vehículos de la página + rango de fechas
/// inclusivo sobre la columna propia de cada tabla
fn vehicle_range_filter(
    ids: &[Uuid],
    date_column: &'static str,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> FilterSet {
    let mut filter = FilterSet::new();
    filter.any_uuid("vehicle_id", ids.to_vec());
    if let Some(start) = start {
        filter.date_gte(date_column, start);
    }
    if let Some(end) = end {
        filter.date_lte(date_column, end);
    }
    filter
}

pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Balance sheet: cada account head con sus sub-colecciones financieras
    /// crudas. La sumatoria queda para la capa de presentación.
    pub async fn balance_sheet(&self) -> Result<Vec<BalanceSheetHead>, AppError> {
        let heads = sqlx::query_as::<_, AccountHeadRow>(
            r#"
            SELECT ah.id, ah.label, t.label AS account_type
            FROM account_heads ah
            LEFT JOIN account_types t ON t.id = ah.account_type_id
            ORDER BY ah.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut trips = bucket(
            sqlx::query_as::<_, HeadAmountRow>(
                "SELECT account_head_id, amount FROM trips WHERE account_head_id IS NOT NULL",
            )
            .fetch_all(&self.pool)
            .await?,
            |r| r.account_head_id,
            |r| AmountRecord { amount: r.amount },
        );

        let mut expenses = bucket(
            sqlx::query_as::<_, HeadExpenseRow>(
                "SELECT account_head_id, amount, is_misc FROM expenses WHERE account_head_id IS NOT NULL",
            )
            .fetch_all(&self.pool)
            .await?,
            |r| r.account_head_id,
            |r| ExpenseAmount { amount: r.amount, is_misc: r.is_misc },
        );

        let mut vehicles = bucket(
            sqlx::query_as::<_, HeadValueRow>(
                "SELECT account_head_id, vehicle_value FROM vehicles WHERE account_head_id IS NOT NULL",
            )
            .fetch_all(&self.pool)
            .await?,
            |r| r.account_head_id,
            |r| VehicleValue { vehicle_value: r.vehicle_value },
        );

        let mut maintenances = bucket(
            sqlx::query_as::<_, HeadChargeRow>(
                "SELECT account_head_id, service_charge FROM maintenances WHERE account_head_id IS NOT NULL",
            )
            .fetch_all(&self.pool)
            .await?,
            |r| r.account_head_id,
            |r| MaintenanceCharge { service_charge: r.service_charge },
        );

        let mut equipment_uses = bucket(
            sqlx::query_as::<_, HeadPriceRow>(
                "SELECT account_head_id, total_price FROM equipment_uses WHERE account_head_id IS NOT NULL",
            )
            .fetch_all(&self.pool)
            .await?,
            |r| r.account_head_id,
            |r| EquipmentUsePrice { total_price: r.total_price },
        );

        let mut accident_histories = bucket(
            sqlx::query_as::<_, HeadAccidentRow>(
                "SELECT account_head_id, payment_status, amount FROM accident_histories WHERE account_head_id IS NOT NULL",
            )
            .fetch_all(&self.pool)
            .await?,
            |r| r.account_head_id,
            |r| AccidentAmount { payment_status: r.payment_status, amount: r.amount },
        );

        let mut paper_works = bucket(
            sqlx::query_as::<_, HeadTotalRow>(
                "SELECT account_head_id, total_amount FROM paper_works WHERE account_head_id IS NOT NULL",
            )
            .fetch_all(&self.pool)
            .await?,
            |r| r.account_head_id,
            |r| PaperWorkAmount { total_amount: r.total_amount },
        );

        let sheet = heads
            .into_iter()
            .map(|head| BalanceSheetHead {
                trips: take(&mut trips, head.id),
                expenses: take(&mut expenses, head.id),
                vehicles: take(&mut vehicles, head.id),
                maintenances: take(&mut maintenances, head.id),
                equipment_uses: take(&mut equipment_uses, head.id),
                accident_histories: take(&mut accident_histories, head.id),
                paper_works: take(&mut paper_works, head.id),
                id: head.id,
                label: head.label,
                account_type: head.account_type,
            })
            .collect();

        Ok(sheet)
    }

    /// Fuel status: exige que exista el expense head "Fuel Expense" antes de
    /// tocar los vehículos
    pub async fn fuel_status(&self) -> Result<Vec<FuelStatusVehicle>, AppError> {
        let fuel_head =
            sqlx::query_as::<_, ExpenseHead>("SELECT id, label FROM expense_heads WHERE label = $1")
                .bind(FUEL_EXPENSE_LABEL)
                .fetch_optional(&self.pool)
                .await?
                .ok_or_else(|| AppError::Configuration("First Setup Your Account".to_string()))?;

        let vehicles =
            sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        let mut fuels = bucket(
            sqlx::query_as::<_, VehicleAmountRow>("SELECT vehicle_id, amount FROM fuels")
                .fetch_all(&self.pool)
                .await?,
            |r| r.vehicle_id,
            |r| AmountRecord { amount: r.amount },
        );

        let mut fuel_expenses = bucket(
            sqlx::query_as::<_, VehicleAmountRow>(
                "SELECT vehicle_id, amount FROM expenses WHERE expense_head_id = $1 AND vehicle_id IS NOT NULL",
            )
            .bind(fuel_head.id)
            .fetch_all(&self.pool)
            .await?,
            |r| r.vehicle_id,
            |r| AmountRecord { amount: r.amount },
        );

        let status = vehicles
            .into_iter()
            .map(|vehicle| FuelStatusVehicle {
                fuels: take(&mut fuels, vehicle.id),
                expenses: take(&mut fuel_expenses, vehicle.id),
                id: vehicle.id,
                reg_no: vehicle.reg_no,
                model: vehicle.model,
                is_active: vehicle.is_active,
            })
            .collect();

        Ok(status)
    }

    /// Stock status: cada equipo anotado con el total entrante y el consumo
    /// in-house
    pub async fn stock_status(
        &self,
        filter: &FilterSet,
        pagination: &Pagination,
    ) -> Result<Vec<StockStatusRow>, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new(
            r#"
            SELECT e.id, e.label, u.label AS uom,
                   COALESCE(i.total_in, 0) AS total_in,
                   COALESCE(s.total_used, 0) AS total_used
            FROM equipment e
            LEFT JOIN uoms u ON u.id = e.uom_id
            LEFT JOIN (
                SELECT equipment_id, SUM(quantity) AS total_in
                FROM equipment_ins GROUP BY equipment_id
            ) i ON i.equipment_id = e.id
            LEFT JOIN (
                SELECT equipment_id, SUM(quantity) AS total_used
                FROM equipment_uses WHERE in_house = TRUE GROUP BY equipment_id
            ) s ON s.equipment_id = e.id
            "#,
        );
        filter.apply(&mut builder);
        builder.push(" ORDER BY e.");
        builder.push(pagination.sort_column(REPORT_SORTABLE_COLUMNS));
        builder.push(" ");
        builder.push(pagination.sort_order.as_sql());
        builder.push(" LIMIT ");
        builder.push_bind(pagination.limit);
        builder.push(" OFFSET ");
        builder.push_bind(pagination.skip);

        let rows = builder
            .build_query_as::<StockStatusRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    /// Total de equipos que matchean el filtro del stock status
    pub async fn count_equipment(&self, filter: &FilterSet) -> Result<i64, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM equipment e");
        filter.apply(&mut builder);

        let total = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    /// Summary report: página de vehículos con sus sub-colecciones filtradas
    /// por el rango de fechas. Los viajes filtran por su start_date; el
    /// resto por su columna date.
    pub async fn vehicle_summary(
        &self,
        filter: &FilterSet,
        pagination: &Pagination,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Vec<VehicleSummaryRow>, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT * FROM vehicles");
        filter.apply(&mut builder);
        builder.push(" ORDER BY ");
        builder.push(pagination.sort_column(VEHICLE_SORTABLE_COLUMNS));
        builder.push(" ");
        builder.push(pagination.sort_order.as_sql());
        builder.push(" LIMIT ");
        builder.push_bind(pagination.limit);
        builder.push(" OFFSET ");
        builder.push_bind(pagination.skip);

        let vehicles = builder
            .build_query_as::<Vehicle>()
            .fetch_all(&self.pool)
            .await?;

        if vehicles.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = vehicles.iter().map(|v| v.id).collect();

        let mut builder =
            QueryBuilder::<Postgres>::new("SELECT vehicle_id, amount FROM trips");
        vehicle_range_filter(&ids, "start_date", start, end).apply(&mut builder);
        let mut trips = bucket(
            builder
                .build_query_as::<VehicleAmountRow>()
                .fetch_all(&self.pool)
                .await?,
            |r| r.vehicle_id,
            |r| AmountRecord { amount: r.amount },
        );

        let mut builder =
            QueryBuilder::<Postgres>::new("SELECT vehicle_id, amount, is_misc FROM expenses");
        vehicle_range_filter(&ids, "date", start, end).apply(&mut builder);
        let mut expenses = bucket(
            builder
                .build_query_as::<VehicleExpenseRow>()
                .fetch_all(&self.pool)
                .await?,
            |r| r.vehicle_id,
            |r| ExpenseAmount { amount: r.amount, is_misc: r.is_misc },
        );

        let mut builder =
            QueryBuilder::<Postgres>::new("SELECT vehicle_id, service_charge FROM maintenances");
        vehicle_range_filter(&ids, "date", start, end).apply(&mut builder);
        let mut maintenances = bucket(
            builder
                .build_query_as::<VehicleChargeRow>()
                .fetch_all(&self.pool)
                .await?,
            |r| r.vehicle_id,
            |r| MaintenanceCharge { service_charge: r.service_charge },
        );

        let mut builder =
            QueryBuilder::<Postgres>::new("SELECT vehicle_id, total_amount FROM paper_works");
        vehicle_range_filter(&ids, "date", start, end).apply(&mut builder);
        let mut paper_works = bucket(
            builder
                .build_query_as::<VehicleTotalRow>()
                .fetch_all(&self.pool)
                .await?,
            |r| r.vehicle_id,
            |r| PaperWorkAmount { total_amount: r.total_amount },
        );

        let mut builder =
            QueryBuilder::<Postgres>::new("SELECT vehicle_id, total_price FROM equipment_uses");
        vehicle_range_filter(&ids, "date", start, end).apply(&mut builder);
        let mut equipment_uses = bucket(
            builder
                .build_query_as::<VehiclePriceRow>()
                .fetch_all(&self.pool)
                .await?,
            |r| r.vehicle_id,
            |r| EquipmentUsePrice { total_price: r.total_price },
        );

        let summary = vehicles
            .into_iter()
            .map(|vehicle| VehicleSummaryRow {
                trips: take(&mut trips, vehicle.id),
                expenses: take(&mut expenses, vehicle.id),
                maintenances: take(&mut maintenances, vehicle.id),
                paper_works: take(&mut paper_works, vehicle.id),
                equipment_uses: take(&mut equipment_uses, vehicle.id),
                id: vehicle.id,
                reg_no: vehicle.reg_no,
                model: vehicle.model,
                is_active: vehicle.is_active,
            })
            .collect();

        Ok(summary)
    }

    /// Total de vehículos que matchean el filtro del summary report
    pub async fn count_vehicles(&self, filter: &FilterSet) -> Result<i64, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM vehicles");
        filter.apply(&mut builder);

        let total = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    /// Totales planos: viajes completados y gastos no-misc. Cada campo se
    /// popula solo si hubo filas que lo respalden.
    pub async fn trip_summary(&self) -> Result<TripSummary, AppError> {
        let (count, amount): (i64, Option<Decimal>) =
            sqlx::query_as("SELECT COUNT(*), SUM(amount) FROM trips WHERE status = $1")
                .bind(TRIP_STATUS_COMPLETED)
                .fetch_one(&self.pool)
                .await?;

        let (expense,): (Option<Decimal>,) =
            sqlx::query_as("SELECT SUM(amount) FROM expenses WHERE is_misc = FALSE")
                .fetch_one(&self.pool)
                .await?;

        let mut summary = TripSummary::default();
        if count > 0 {
            summary.count = Some(count);
            summary.amount = Some(amount.unwrap_or_default());
        }
        summary.expense = expense;

        Ok(summary)
    }

    /// Viajes agrupados por año/mes de start_date, en orden cronológico
    pub async fn trip_summary_group_by_month_year(
        &self,
    ) -> Result<Vec<MonthlyTripSummary>, AppError> {
        let rows = sqlx::query_as::<_, MonthlyTripSummary>(
            r#"
            SELECT EXTRACT(YEAR FROM start_date)::INT AS year,
                   EXTRACT(MONTH FROM start_date)::INT AS month,
                   SUM(amount) AS total_amount
            FROM trips
            GROUP BY year, month
            ORDER BY year, month
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Combustible agrupado por año/mes de la carga
    pub async fn fuel_summary_group_by_month_year(
        &self,
    ) -> Result<Vec<MonthlyFuelSummary>, AppError> {
        let rows = sqlx::query_as::<_, MonthlyFuelSummary>(
            r#"
            SELECT EXTRACT(YEAR FROM date)::INT AS year,
                   EXTRACT(MONTH FROM date)::INT AS month,
                   SUM(quantity) AS total_quantity,
                   SUM(amount) AS total_amount
            FROM fuels
            GROUP BY year, month
            ORDER BY year, month
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
