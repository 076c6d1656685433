//! Temperature conversion engine.
//!
//! Six pure functions, one per supported (source scale → target scale)
//! direction, operating on [`Decimal`] values. Nothing in this module rounds
//! its output; results carry whatever scale the decimal arithmetic produces
//! and rendering is left to the caller.
//!
//! The [`Scale`] and [`Conversion`] types name the scales and directions so
//! the HTTP layer (and logs) can refer to them without stringly-typed paths.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

mod formulas;

pub use formulas::{
    celsius_to_fahrenheit, celsius_to_kelvin, fahrenheit_to_celsius, fahrenheit_to_kelvin,
    kelvin_to_celsius, kelvin_to_fahrenheit, ABSOLUTE_ZERO_OFFSET, FAHRENHEIT_FREEZING_POINT,
    FAHRENHEIT_PER_CELSIUS, FIVE_NINTHS,
};

/// Result type for conversion operations.
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Error type for conversion operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// An intermediate or final value fell outside the range of [`Decimal`].
    #[error("result of {conversion} exceeds the representable decimal range")]
    Overflow { conversion: Conversion },
}

/// A temperature scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Scale {
    pub const ALL: [Scale; 3] = [Scale::Celsius, Scale::Fahrenheit, Scale::Kelvin];

    /// Lowercase name, as used in route segments.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Scale::Celsius => "celsius",
            Scale::Fahrenheit => "fahrenheit",
            Scale::Kelvin => "kelvin",
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown scale name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown temperature scale: {0}")]
pub struct UnknownScale(pub String);

impl FromStr for Scale {
    type Err = UnknownScale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scale::ALL
            .into_iter()
            .find(|scale| scale.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownScale(s.to_string()))
    }
}

/// One of the six supported conversion directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conversion {
    CelsiusToFahrenheit,
    CelsiusToKelvin,
    FahrenheitToCelsius,
    FahrenheitToKelvin,
    KelvinToCelsius,
    KelvinToFahrenheit,
}

impl Conversion {
    pub const ALL: [Conversion; 6] = [
        Conversion::CelsiusToFahrenheit,
        Conversion::CelsiusToKelvin,
        Conversion::FahrenheitToCelsius,
        Conversion::FahrenheitToKelvin,
        Conversion::KelvinToCelsius,
        Conversion::KelvinToFahrenheit,
    ];

    /// The direction converting `from` into `to`, or `None` when both are the
    /// same scale.
    pub fn between(from: Scale, to: Scale) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|conversion| conversion.source() == from && conversion.target() == to)
    }

    pub const fn source(&self) -> Scale {
        match self {
            Conversion::CelsiusToFahrenheit | Conversion::CelsiusToKelvin => Scale::Celsius,
            Conversion::FahrenheitToCelsius | Conversion::FahrenheitToKelvin => Scale::Fahrenheit,
            Conversion::KelvinToCelsius | Conversion::KelvinToFahrenheit => Scale::Kelvin,
        }
    }

    pub const fn target(&self) -> Scale {
        match self {
            Conversion::FahrenheitToCelsius | Conversion::KelvinToCelsius => Scale::Celsius,
            Conversion::CelsiusToFahrenheit | Conversion::KelvinToFahrenheit => Scale::Fahrenheit,
            Conversion::CelsiusToKelvin | Conversion::FahrenheitToKelvin => Scale::Kelvin,
        }
    }

    /// HTTP path serving this conversion, e.g. `/celsius-to/fahrenheit`.
    pub fn path(&self) -> String {
        format!("/{}-to/{}", self.source(), self.target())
    }

    /// Apply the conversion to `degrees` expressed in [`Conversion::source`].
    pub fn apply(&self, degrees: Decimal) -> ConversionResult<Decimal> {
        match self {
            Conversion::CelsiusToFahrenheit => celsius_to_fahrenheit(degrees),
            Conversion::CelsiusToKelvin => celsius_to_kelvin(degrees),
            Conversion::FahrenheitToCelsius => fahrenheit_to_celsius(degrees),
            Conversion::FahrenheitToKelvin => fahrenheit_to_kelvin(degrees),
            Conversion::KelvinToCelsius => kelvin_to_celsius(degrees),
            Conversion::KelvinToFahrenheit => kelvin_to_fahrenheit(degrees),
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source(), self.target())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_round_trips_through_str() {
        for scale in Scale::ALL {
            assert_eq!(scale.to_string().parse::<Scale>().unwrap(), scale);
        }
        assert_eq!("KELVIN".parse::<Scale>().unwrap(), Scale::Kelvin);
        assert_eq!(" Celsius ".parse::<Scale>().unwrap(), Scale::Celsius);
    }

    #[test]
    fn test_scale_rejects_unknown_name() {
        let err = "rankine".parse::<Scale>().unwrap_err();
        assert_eq!(err, UnknownScale("rankine".to_string()));
        assert!(err.to_string().contains("rankine"));
    }

    #[test]
    fn test_conversion_between_covers_every_pair() {
        for from in Scale::ALL {
            for to in Scale::ALL {
                let conversion = Conversion::between(from, to);
                if from == to {
                    assert!(conversion.is_none());
                } else {
                    let conversion = conversion.unwrap();
                    assert_eq!(conversion.source(), from);
                    assert_eq!(conversion.target(), to);
                }
            }
        }
    }

    #[test]
    fn test_conversion_paths() {
        let paths: Vec<String> = Conversion::ALL.iter().map(Conversion::path).collect();
        assert_eq!(
            paths,
            vec![
                "/celsius-to/fahrenheit",
                "/celsius-to/kelvin",
                "/fahrenheit-to/celsius",
                "/fahrenheit-to/kelvin",
                "/kelvin-to/celsius",
                "/kelvin-to/fahrenheit",
            ]
        );
    }

    #[test]
    fn test_apply_dispatches_to_formula() {
        let hundred = Decimal::from(100);
        assert_eq!(
            Conversion::CelsiusToFahrenheit.apply(hundred).unwrap(),
            celsius_to_fahrenheit(hundred).unwrap()
        );
        assert_eq!(
            Conversion::KelvinToCelsius.apply(hundred).unwrap(),
            kelvin_to_celsius(hundred).unwrap()
        );
    }

    #[test]
    fn test_overflow_error_names_conversion() {
        let err = Conversion::CelsiusToFahrenheit.apply(Decimal::MAX).unwrap_err();
        assert_eq!(
            err,
            ConversionError::Overflow {
                conversion: Conversion::CelsiusToFahrenheit
            }
        );
        assert_eq!(
            err.to_string(),
            "result of celsius -> fahrenheit exceeds the representable decimal range"
        );
    }

    #[test]
    fn test_scale_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Scale::Fahrenheit).unwrap(), "\"fahrenheit\"");
    }
}
