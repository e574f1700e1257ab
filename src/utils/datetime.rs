//! Fechas de reporte
//!
//! Los filtros de rango de los reportes llegan como `YYYY-MM-DD` y se
//! comparan como día completo inclusivo: el inicio a las 00:00:00 y el
//! fin a las 23:59:59.

use chrono::{DateTime, NaiveDate, Utc};

use crate::utils::errors::AppError;

/// Parsea una fecha `YYYY-MM-DD` opcional del query string
pub fn parse_date_param(value: Option<String>, field: &str) -> Result<Option<NaiveDate>, AppError> {
    match value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| AppError::Validation(format!("Invalid {}, expected YYYY-MM-DD", field))),
    }
}

/// Límite inferior inclusivo: medianoche del día
pub fn day_start(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(0, 0, 0).unwrap().and_utc()
}

/// Límite superior inclusivo: 23:59:59 del día
pub fn day_end(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(23, 59, 59).unwrap().and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn bounds_cover_the_full_day() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 31).unwrap();

        let start = day_start(date);
        let end = day_end(date);

        assert_eq!((start.hour(), start.minute(), start.second()), (0, 0, 0));
        assert_eq!((end.hour(), end.minute(), end.second()), (23, 59, 59));
    }

    #[test]
    fn edge_timestamps_fall_inside_and_outside_the_range() {
        let start = day_start(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        let end = day_end(NaiveDate::from_ymd_opt(2023, 1, 31).unwrap());

        let inside = NaiveDate::from_ymd_opt(2023, 1, 31)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap()
            .and_utc();
        let outside = NaiveDate::from_ymd_opt(2023, 2, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc();

        assert!(inside >= start && inside <= end);
        assert!(!(outside <= end));
    }

    #[test]
    fn date_param_parsing() {
        assert_eq!(parse_date_param(None, "startDate").unwrap(), None);
        assert_eq!(parse_date_param(Some("".to_string()), "startDate").unwrap(), None);
        assert_eq!(
            parse_date_param(Some("2023-01-15".to_string()), "startDate").unwrap(),
            NaiveDate::from_ymd_opt(2023, 1, 15)
        );
        assert!(parse_date_param(Some("15/01/2023".to_string()), "startDate").is_err());
    }
}
