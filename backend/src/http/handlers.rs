//! HTTP handlers for the REST API.
//!
//! Each conversion handler maps one route onto one engine function. The
//! result is returned as a bare JSON number carrying the exact decimal
//! digits, e.g. `212.00`.

use axum::{extract::OriginalUri, Json};

use super::dto::{HealthResponse, Temperature};
use super::error::AppError;
use super::extract::Degrees;
use crate::conversion::{Conversion, Scale};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

fn convert(conversion: Conversion, Degrees(degrees): Degrees) -> HandlerResult<Temperature> {
    let result = conversion.apply(degrees)?;
    tracing::debug!(%conversion, input = %degrees, output = %result, "converted temperature");
    Ok(Json(Temperature(result)))
}

/// Explain why `path` matched no route, naming the offending scale when the
/// path looks like a conversion.
fn describe_missing_route(path: &str) -> String {
    let conversion = path
        .trim_matches('/')
        .split_once('/')
        .and_then(|(group, target)| Some((group.strip_suffix("-to")?, target)));
    let Some((source, target)) = conversion else {
        return format!("no route for {path}");
    };

    match (source.parse::<Scale>(), target.parse::<Scale>()) {
        (Err(e), _) | (_, Err(e)) => format!("no route for {path}: {e}"),
        (Ok(from), Ok(to)) if Conversion::between(from, to).is_none() => {
            format!("no route for {path}: {from} cannot be converted to itself")
        }
        _ => format!("no route for {path}"),
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Fallback for unmatched routes.
///
/// Uses the original URI so nested route groups report the full path.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::NotFound(describe_missing_route(uri.path()))
}

// =============================================================================
// Celsius
// =============================================================================

/// GET /celsius-to/fahrenheit
pub async fn celsius_to_fahrenheit(degrees: Degrees) -> HandlerResult<Temperature> {
    convert(Conversion::CelsiusToFahrenheit, degrees)
}

/// GET /celsius-to/kelvin
///
/// Returns `C - 273.15`; see [`crate::conversion::celsius_to_kelvin`].
pub async fn celsius_to_kelvin(degrees: Degrees) -> HandlerResult<Temperature> {
    convert(Conversion::CelsiusToKelvin, degrees)
}

// =============================================================================
// Fahrenheit
// =============================================================================

/// GET /fahrenheit-to/celsius
pub async fn fahrenheit_to_celsius(degrees: Degrees) -> HandlerResult<Temperature> {
    convert(Conversion::FahrenheitToCelsius, degrees)
}

/// GET /fahrenheit-to/kelvin
pub async fn fahrenheit_to_kelvin(degrees: Degrees) -> HandlerResult<Temperature> {
    convert(Conversion::FahrenheitToKelvin, degrees)
}

// =============================================================================
// Kelvin
// =============================================================================

/// GET /kelvin-to/celsius
pub async fn kelvin_to_celsius(degrees: Degrees) -> HandlerResult<Temperature> {
    convert(Conversion::KelvinToCelsius, degrees)
}

/// GET /kelvin-to/fahrenheit
pub async fn kelvin_to_fahrenheit(degrees: Degrees) -> HandlerResult<Temperature> {
    convert(Conversion::KelvinToFahrenheit, degrees)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_missing_route_unknown_scale() {
        assert_eq!(
            describe_missing_route("/rankine-to/celsius"),
            "no route for /rankine-to/celsius: unknown temperature scale: rankine"
        );
        assert_eq!(
            describe_missing_route("/celsius-to/reaumur"),
            "no route for /celsius-to/reaumur: unknown temperature scale: reaumur"
        );
    }

    #[test]
    fn test_describe_missing_route_same_scale() {
        assert_eq!(
            describe_missing_route("/kelvin-to/kelvin"),
            "no route for /kelvin-to/kelvin: kelvin cannot be converted to itself"
        );
    }

    #[test]
    fn test_describe_missing_route_other_paths() {
        assert_eq!(describe_missing_route("/nowhere"), "no route for /nowhere");
        assert_eq!(describe_missing_route("/"), "no route for /");
        assert_eq!(describe_missing_route("/api/v1"), "no route for /api/v1");
    }
}
