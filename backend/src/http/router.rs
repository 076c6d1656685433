//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;

/// Create the main application router with all routes and middleware.
pub fn create_router() -> Router {
    // Read-only public API, so any origin may call it.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let celsius = Router::new()
        .route("/fahrenheit", get(handlers::celsius_to_fahrenheit))
        .route("/kelvin", get(handlers::celsius_to_kelvin));

    let fahrenheit = Router::new()
        .route("/celsius", get(handlers::fahrenheit_to_celsius))
        .route("/kelvin", get(handlers::fahrenheit_to_kelvin));

    let kelvin = Router::new()
        .route("/celsius", get(handlers::kelvin_to_celsius))
        .route("/fahrenheit", get(handlers::kelvin_to_fahrenheit));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/celsius-to", celsius)
        .nest("/fahrenheit-to", fahrenheit)
        .nest("/kelvin-to", kelvin)
        .fallback(handlers::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(CompressionLayer::new()),
        )
}
