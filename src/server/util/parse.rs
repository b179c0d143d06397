use chrono::NaiveDate;

use crate::server::error::AppError;

/// Parses a date using the configured format.
///
/// # Arguments
/// - `value` - Raw date text from a query parameter
/// - `format` - `chrono` format string, `%Y-%m-%d` unless configured otherwise
///
/// # Returns
/// - `Ok(NaiveDate)` - Successfully parsed date
/// - `Err(AppError::BadRequest)` - Text does not match the format
pub fn parse_date(value: &str, format: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), format).map_err(|_| {
        AppError::BadRequest(format!(
            "Invalid date '{}', expected format {}",
            value, format
        ))
    })
}

pub fn parse_optional_date(
    value: Option<&str>,
    format: &str,
) -> Result<Option<NaiveDate>, AppError> {
    value.map(|v| parse_date(v, format)).transpose()
}

/// Largest page size a listing will serve.
pub const MAX_ENTRIES: u64 = 100;

/// Checks listing pagination from the query string.
///
/// # Arguments
/// - `page` - Zero-based page index
/// - `entries` - Items per page, between 1 and [`MAX_ENTRIES`]
///
/// # Returns
/// - `Ok((page, entries))` - Values safe to hand to a paginator
/// - `Err(AppError::BadRequest)` - Page size out of range or page offset overflows
pub fn parse_pagination(page: u64, entries: u64) -> Result<(u64, u64), AppError> {
    if entries == 0 || entries > MAX_ENTRIES {
        return Err(AppError::BadRequest(format!(
            "entries must be between 1 and {}",
            MAX_ENTRIES
        )));
    }

    if page.checked_mul(entries).is_none() {
        return Err(AppError::BadRequest(format!("page {} is out of range", page)));
    }

    Ok((page, entries))
}
