//! # Thermometer
//!
//! Temperature conversion between Celsius, Fahrenheit and Kelvin, exposed as
//! a small REST API.
//!
//! ## Architecture
//!
//! - [`conversion`]: the six pure conversion functions, on [`rust_decimal::Decimal`]
//! - [`config`]: listener settings from defaults, a TOML file and the environment
//! - [`http`]: axum router and handlers (feature `http-server`, on by default)
//!
//! ## Precision
//!
//! All arithmetic is decimal. Fahrenheit-sourced conversions use the fixed
//! ratio `0.5556` in place of 5/9, so `50 °F` converts to `10.0008 °C`.

pub mod config;
pub mod conversion;

#[cfg(feature = "http-server")]
pub mod http;

pub use conversion::{Conversion, ConversionError, Scale};
