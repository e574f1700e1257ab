//! Typed filter builder
//!
//! Compiles the optional filter fields of a list request into an
//! AND-of-conditions predicate. Column names only ever come from the
//! per-entity `&'static str` allowlists declared next to each repository,
//! and every value is bound as a query parameter, so no request data is
//! interpolated into SQL text.

use chrono::{DateTime, Utc};
use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;

use crate::utils::errors::AppError;

#[derive(Debug, Clone)]
enum Condition {
    /// OR de coincidencias parciales (case-insensitive) sobre las columnas
    /// buscables de la entidad
    Search {
        columns: &'static [&'static str],
        term: String,
    },
    TextEq {
        column: &'static str,
        value: String,
    },
    BoolEq {
        column: &'static str,
        value: bool,
    },
    UuidEq {
        column: &'static str,
        value: Uuid,
    },
    UuidAny {
        column: &'static str,
        values: Vec<Uuid>,
    },
    DateGte {
        column: &'static str,
        value: DateTime<Utc>,
    },
    DateLte {
        column: &'static str,
        value: DateTime<Utc>,
    },
}

/// Conjunto componible de condiciones AND
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    conditions: Vec<Condition>,
}

fn present(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// searchTerm: OR sobre las columnas buscables. Ausente o vacío se omite.
    pub fn search(&mut self, columns: &'static [&'static str], term: Option<String>) -> &mut Self {
        if let Some(term) = present(term) {
            if !columns.is_empty() {
                self.conditions.push(Condition::Search { columns, term });
            }
        }
        self
    }

    /// Igualdad exacta de texto; `"true"`/`"false"` se coercen a boolean
    pub fn eq_text(&mut self, column: &'static str, value: Option<String>) -> &mut Self {
        if let Some(value) = present(value) {
            match value.as_str() {
                "true" => self.conditions.push(Condition::BoolEq { column, value: true }),
                "false" => self.conditions.push(Condition::BoolEq { column, value: false }),
                _ => self.conditions.push(Condition::TextEq { column, value }),
            }
        }
        self
    }

    pub fn eq_bool(&mut self, column: &'static str, value: Option<bool>) -> &mut Self {
        if let Some(value) = value {
            self.conditions.push(Condition::BoolEq { column, value });
        }
        self
    }

    pub fn eq_uuid(&mut self, column: &'static str, value: Option<Uuid>) -> &mut Self {
        if let Some(value) = value {
            self.conditions.push(Condition::UuidEq { column, value });
        }
        self
    }

    /// Pertenencia a un conjunto de ids (las sub-colecciones de los reportes
    /// se filtran por los padres de la página)
    pub fn any_uuid(&mut self, column: &'static str, values: Vec<Uuid>) -> &mut Self {
        self.conditions.push(Condition::UuidAny { column, values });
        self
    }

    pub fn date_gte(&mut self, column: &'static str, value: DateTime<Utc>) -> &mut Self {
        self.conditions.push(Condition::DateGte { column, value });
        self
    }

    pub fn date_lte(&mut self, column: &'static str, value: DateTime<Utc>) -> &mut Self {
        self.conditions.push(Condition::DateLte { column, value });
        self
    }

    /// Agrega el `WHERE c1 AND c2 AND ...` al builder; sin condiciones no
    /// agrega nada
    pub fn apply(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        if self.conditions.is_empty() {
            return;
        }

        builder.push(" WHERE ");

        for (i, condition) in self.conditions.iter().enumerate() {
            if i > 0 {
                builder.push(" AND ");
            }

            match condition {
                Condition::Search { columns, term } => {
                    builder.push("(");
                    for (j, column) in columns.iter().enumerate() {
                        if j > 0 {
                            builder.push(" OR ");
                        }
                        builder.push(*column);
                        builder.push(" ILIKE ");
                        builder.push_bind(format!("%{}%", term));
                    }
                    builder.push(")");
                }
                Condition::TextEq { column, value } => {
                    builder.push(*column);
                    builder.push(" = ");
                    builder.push_bind(value.clone());
                }
                Condition::BoolEq { column, value } => {
                    builder.push(*column);
                    builder.push(" = ");
                    builder.push_bind(*value);
                }
                Condition::UuidEq { column, value } => {
                    builder.push(*column);
                    builder.push(" = ");
                    builder.push_bind(*value);
                }
                Condition::UuidAny { column, values } => {
                    builder.push(*column);
                    builder.push(" = ANY(");
                    builder.push_bind(values.clone());
                    builder.push(")");
                }
                Condition::DateGte { column, value } => {
                    builder.push(*column);
                    builder.push(" >= ");
                    builder.push_bind(*value);
                }
                Condition::DateLte { column, value } => {
                    builder.push(*column);
                    builder.push(" <= ");
                    builder.push_bind(*value);
                }
            }
        }
    }
}

/// Parsea un id opcional del query string; vacío cuenta como ausente
pub fn parse_uuid_param(value: Option<String>, field: &str) -> Result<Option<Uuid>, AppError> {
    match present(value) {
        None => Ok(None),
        Some(raw) => Uuid::parse_str(&raw)
            .map(Some)
            .map_err(|_| AppError::Validation(format!("Invalid {}", field))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(filter: &FilterSet) -> String {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT * FROM vehicles");
        filter.apply(&mut builder);
        builder.sql().to_string()
    }

    #[test]
    fn empty_filter_renders_no_where_clause() {
        let filter = FilterSet::new();
        assert!(filter.is_empty());
        assert_eq!(render(&filter), "SELECT * FROM vehicles");
    }

    #[test]
    fn search_and_coerced_boolean_compile_together() {
        let mut filter = FilterSet::new();
        filter
            .search(&["reg_no", "model"], Some("ab".to_string()))
            .eq_text("is_active", Some("true".to_string()));

        assert_eq!(
            render(&filter),
            "SELECT * FROM vehicles WHERE (reg_no ILIKE $1 OR model ILIKE $2) AND is_active = $3"
        );
    }

    #[test]
    fn false_string_coerces_to_boolean() {
        let mut filter = FilterSet::new();
        filter.eq_text("is_active", Some("false".to_string()));
        assert_eq!(
            render(&filter),
            "SELECT * FROM vehicles WHERE is_active = $1"
        );
    }

    #[test]
    fn empty_values_are_excluded_not_matched_literally() {
        let mut filter = FilterSet::new();
        filter
            .search(&["reg_no"], Some("   ".to_string()))
            .eq_text("status", Some(String::new()))
            .eq_text("status", None);

        assert!(filter.is_empty());
    }

    #[test]
    fn plain_text_equality_stays_text() {
        let mut filter = FilterSet::new();
        filter.eq_text("status", Some("Completed".to_string()));
        assert_eq!(render(&filter), "SELECT * FROM vehicles WHERE status = $1");
    }

    #[test]
    fn date_range_conditions_compile_in_order() {
        let mut filter = FilterSet::new();
        filter.date_gte("start_date", Utc::now());
        filter.date_lte("start_date", Utc::now());

        assert_eq!(
            render(&filter),
            "SELECT * FROM vehicles WHERE start_date >= $1 AND start_date <= $2"
        );
    }

    #[test]
    fn id_set_membership_with_date_range() {
        let mut filter = FilterSet::new();
        filter.any_uuid("vehicle_id", vec![Uuid::new_v4(), Uuid::new_v4()]);
        filter.date_gte("date", Utc::now());
        filter.date_lte("date", Utc::now());

        assert_eq!(
            render(&filter),
            "SELECT * FROM vehicles WHERE vehicle_id = ANY($1) AND date >= $2 AND date <= $3"
        );
    }

    #[test]
    fn uuid_param_parsing() {
        assert_eq!(parse_uuid_param(None, "vehicleId").unwrap(), None);
        assert_eq!(parse_uuid_param(Some("  ".to_string()), "vehicleId").unwrap(), None);

        let id = Uuid::new_v4();
        assert_eq!(
            parse_uuid_param(Some(id.to_string()), "vehicleId").unwrap(),
            Some(id)
        );

        assert!(parse_uuid_param(Some("nope".to_string()), "vehicleId").is_err());
    }
}
