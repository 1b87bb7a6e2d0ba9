//! Pure request validation.
//!
//! These checks run at the HTTP edge before any upstream call is issued.
//! They are stateless and do not trim their inputs; callers splitting a
//! comma-separated symbol list are expected to trim each token themselves.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::currencies;
use crate::errors::RatesError;

/// Validate a currency code against the supported set, case-insensitively.
///
/// The error carries the code as the caller supplied it.
pub fn currency(code: &str) -> Result<(), RatesError> {
    if currencies::is_supported(code) {
        Ok(())
    } else {
        Err(RatesError::InvalidBaseCurrency(code.to_string()))
    }
}

/// Validate a date string: exact `YYYY-MM-DD` shape and a real calendar
/// date.
///
/// Chrono alone accepts unpadded fields like `2023-1-1`, so the shape is
/// checked explicitly before parsing. Parsing then rejects well-shaped
/// impossibilities such as `2023-02-30`.
pub fn date(s: &str) -> Result<(), RatesError> {
    let shape_ok = s.len() == 10
        && s.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !shape_ok || NaiveDate::parse_from_str(s, "%Y-%m-%d").is_err() {
        return Err(RatesError::InvalidDate(s.to_string()));
    }
    Ok(())
}

/// Validate a conversion amount. The upstream requires at least 1.
pub fn amount(value: Decimal) -> Result<(), RatesError> {
    if value >= Decimal::ONE {
        Ok(())
    } else {
        Err(RatesError::InvalidAmount)
    }
}
