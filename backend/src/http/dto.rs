//! Data Transfer Objects for the HTTP API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::AppError;

/// Name of the query parameter carrying the source temperature.
pub const DEGREES_PARAM: &str = "degrees";

/// Integer digits of the largest representable [`Decimal`].
const MAX_INTEGER_DIGITS: i64 = 29;

/// Below this decimal point position every digit lies past the 28th
/// fractional place, so the value rounds to zero.
const MIN_POINT_POSITION: i64 = -30;

/// Query parameters accepted by every conversion endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DegreesQuery {
    /// Source temperature as decimal text. Absent or empty means `0`.
    #[serde(default)]
    pub degrees: Option<String>,
}

impl DegreesQuery {
    /// Parse the `degrees` parameter, defaulting to zero.
    pub fn degrees(&self) -> Result<Decimal, AppError> {
        match self.degrees.as_deref().map(str::trim) {
            None | Some("") => Ok(Decimal::ZERO),
            Some(raw) => parse_decimal(raw).map_err(|reason| AppError::InvalidParameter {
                name: DEGREES_PARAM,
                value: raw.to_string(),
                reason,
            }),
        }
    }
}

/// A conversion result, serialized as an exact JSON number (`212.00`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Temperature(#[serde(with = "rust_decimal::serde::arbitrary_precision")] pub Decimal);

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Parse `[+-]digits[.digits][(e|E)[+-]digits]`.
///
/// Scientific notation is expanded to plain notation first, so both forms
/// go through the same rounding once past 28 fractional digits.
fn parse_decimal(raw: &str) -> Result<Decimal, String> {
    let (mantissa, exponent) = match raw.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (raw, None),
    };

    let (negative, unsigned) = match mantissa.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, mantissa.strip_prefix('+').unwrap_or(mantissa)),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let has_digits = !(int_part.is_empty() && frac_part.is_empty());
    if !has_digits || !is_digits(int_part) || !is_digits(frac_part) {
        return Err(format!("{raw:?} is not a decimal number"));
    }

    let exponent = match exponent {
        None => 0,
        Some(exponent) => {
            let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
            if digits.is_empty() || !is_digits(digits) {
                return Err(format!("{raw:?} has a malformed exponent"));
            }
            exponent
                .parse::<i64>()
                .map_err(|_| format!("exponent of {raw:?} is out of range"))?
        }
    };

    let digits = format!("{int_part}{frac_part}");
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Ok(Decimal::ZERO);
    }

    // Decimal point position relative to the first significant digit.
    let leading_zeros = (digits.len() - significant.len()) as i64;
    let point = (int_part.len() as i64 - leading_zeros).saturating_add(exponent);
    if point > MAX_INTEGER_DIGITS {
        return Err(format!("{raw:?} exceeds the representable decimal range"));
    }
    if point < MIN_POINT_POSITION {
        return Ok(Decimal::ZERO);
    }

    let sign = if negative { "-" } else { "" };
    let plain = if point <= 0 {
        format!("{sign}0.{}{significant}", "0".repeat(point.unsigned_abs() as usize))
    } else if point as usize >= significant.len() {
        format!("{sign}{significant}{}", "0".repeat(point as usize - significant.len()))
    } else {
        let (whole, fraction) = significant.split_at(point as usize);
        format!("{sign}{whole}.{fraction}")
    };

    Decimal::from_str(&plain).map_err(|e| e.to_string())
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}
