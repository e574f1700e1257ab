//! Normalización de parámetros de paginación
//!
//! Convierte los parámetros sueltos del query string (page, limit, sortBy,
//! sortOrder) en una especificación canónica con defaults. Nunca falla:
//! cualquier valor ausente o inválido cae al default.

use serde::Deserialize;

/// Límite de página por default
pub const DEFAULT_LIMIT: i64 = 10;

/// Columna de ordenamiento por default
pub const DEFAULT_SORT_BY: &str = "created_at";

/// Parámetros crudos del query string
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationOptions {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Especificación canónica de paginación
#[derive(Debug, Clone)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub skip: i64,
    pub sort_by: String,
    pub sort_order: SortOrder,
}

impl Pagination {
    /// Resuelve la columna de ordenamiento contra la lista permitida de la
    /// entidad; un sortBy desconocido cae a `created_at`.
    pub fn sort_column(&self, allowed: &[&'static str]) -> &'static str {
        allowed
            .iter()
            .find(|col| **col == self.sort_by)
            .copied()
            .unwrap_or(DEFAULT_SORT_BY)
    }
}

fn parse_positive(value: Option<&String>, default: i64) -> i64 {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(default)
}

/// Calcula la paginación canónica a partir de las opciones crudas
pub fn calculate_pagination(options: &PaginationOptions) -> Pagination {
    let page = parse_positive(options.page.as_ref(), 1);
    let limit = parse_positive(options.limit.as_ref(), DEFAULT_LIMIT);

    let sort_by = options
        .sort_by
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SORT_BY)
        .to_string();

    let sort_order = match options.sort_order.as_deref().map(str::trim) {
        Some("asc") | Some("ASC") => SortOrder::Asc,
        _ => SortOrder::Desc,
    };

    Pagination {
        page,
        limit,
        skip: (page - 1) * limit,
        sort_by,
        sort_order,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_empty() {
        let pagination = calculate_pagination(&PaginationOptions::default());

        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.limit, DEFAULT_LIMIT);
        assert_eq!(pagination.skip, 0);
        assert_eq!(pagination.sort_by, "created_at");
        assert_eq!(pagination.sort_order, SortOrder::Desc);
    }

    #[test]
    fn skip_is_derived_from_page_and_limit() {
        let options = PaginationOptions {
            page: Some("3".to_string()),
            limit: Some("25".to_string()),
            ..Default::default()
        };

        let pagination = calculate_pagination(&options);
        assert_eq!(pagination.page, 3);
        assert_eq!(pagination.limit, 25);
        assert_eq!(pagination.skip, 50);
    }

    #[test]
    fn invalid_input_falls_back_to_defaults() {
        let options = PaginationOptions {
            page: Some("zero".to_string()),
            limit: Some("-5".to_string()),
            sort_order: Some("sideways".to_string()),
            ..Default::default()
        };

        let pagination = calculate_pagination(&options);
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.limit, DEFAULT_LIMIT);
        assert_eq!(pagination.sort_order, SortOrder::Desc);
    }

    #[test]
    fn ascending_order_is_honored() {
        let options = PaginationOptions {
            sort_order: Some("asc".to_string()),
            ..Default::default()
        };

        assert_eq!(calculate_pagination(&options).sort_order, SortOrder::Asc);
    }

    #[test]
    fn unknown_sort_column_falls_back() {
        let options = PaginationOptions {
            sort_by: Some("; DROP TABLE vehicles".to_string()),
            ..Default::default()
        };

        let pagination = calculate_pagination(&options);
        assert_eq!(pagination.sort_column(&["created_at", "reg_no"]), "created_at");

        let options = PaginationOptions {
            sort_by: Some("reg_no".to_string()),
            ..Default::default()
        };
        let pagination = calculate_pagination(&options);
        assert_eq!(pagination.sort_column(&["created_at", "reg_no"]), "reg_no");
    }
}
