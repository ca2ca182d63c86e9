use crate::errors::AppError;

/// Parse a query value as a finite float; anything else counts as absent.
pub fn parse_finite(raw: Option<&str>) -> Option<f64> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Parse the leading integer of a value (`"25abc"` → 25, `"-3"` → -3).
///
/// Digit runs too long for `i64` saturate; a value with no leading digits
/// yields `None`.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let digits = &rest[..digits_len];
    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

pub fn validate_coordinates(lat: f64, lon: f64) -> Result<(), AppError> {
    if !lat.is_finite() || !lon.is_finite() {
        return Err(AppError::Validation(
            "Coordinates must be finite numbers".to_string(),
        ));
    }
    if !(-90.0..=90.0).contains(&lat) {
        return Err(AppError::Validation(
            "Latitude must be between -90 and 90".to_string(),
        ));
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(AppError::Validation(
            "Longitude must be between -180 and 180".to_string(),
        ));
    }
    Ok(())
}
