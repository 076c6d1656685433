//! HTTP surface for the conversion engine.
//!
//! An axum router exposing each of the six conversions as a `GET` endpoint.
//! Handlers are stateless: they read the `degrees` query parameter, call the
//! matching [`crate::conversion`] function and return the decimal result as
//! JSON.
//!
//! # Routes
//!
//! ```text
//! GET /health
//! GET /celsius-to/{fahrenheit,kelvin}?degrees=<decimal>
//! GET /fahrenheit-to/{celsius,kelvin}?degrees=<decimal>
//! GET /kelvin-to/{celsius,fahrenheit}?degrees=<decimal>
//! ```

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;

pub use error::{ApiError, AppError};
pub use extract::Degrees;
pub use router::create_router;
