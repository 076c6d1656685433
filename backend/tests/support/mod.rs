//! Shared helpers for integration tests.
//!
//! Each test file is compiled as its own crate, so helpers used by only some
//! of them would otherwise trigger dead code warnings.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

/// Serializes every test that touches the process environment.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with the given variables set (`Some`) or removed (`None`).
///
/// The previous values come back when `f` returns or panics.
pub fn with_scoped_env<F, R>(vars: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _env = EnvOverride::apply(vars);
    f()
}

/// Holds the environment lock and the values to restore on drop.
struct EnvOverride {
    previous: BTreeMap<String, Option<String>>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvOverride {
    fn apply(vars: &[(&str, Option<&str>)]) -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut previous = BTreeMap::new();
        for &(name, value) in vars {
            previous
                .entry(name.to_string())
                .or_insert_with(|| std::env::var(name).ok());
            set_or_remove(name, value);
        }

        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for EnvOverride {
    fn drop(&mut self) {
        for (name, value) in &self.previous {
            set_or_remove(name, value.as_deref());
        }
    }
}

fn set_or_remove(name: &str, value: Option<&str>) {
    match value {
        Some(value) => std::env::set_var(name, value),
        None => std::env::remove_var(name),
    }
}

#[cfg(feature = "http-server")]
pub mod http {
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    /// Sends a request through a fresh router and returns the status and raw
    /// body text.
    pub async fn send_raw(method: Method, uri: &str) -> (StatusCode, String) {
        let app = thermometer::http::create_router();
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .expect("valid request"),
            )
            .await
            .expect("router is infallible");

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        (status, String::from_utf8(body.to_vec()).expect("UTF-8 body"))
    }

    /// Like [`send_raw`], with the body parsed as JSON (`Null` when empty).
    pub async fn send(method: Method, uri: &str) -> (StatusCode, serde_json::Value) {
        let (status, body) = send_raw(method, uri).await;
        let json = if body.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(&body).expect("JSON body")
        };
        (status, json)
    }

    pub async fn get(uri: &str) -> (StatusCode, serde_json::Value) {
        send(Method::GET, uri).await
    }

    /// GETs a conversion endpoint and decodes the JSON number it returns
    /// without going through `f64`.
    pub async fn get_decimal(uri: &str) -> Decimal {
        let (status, body) = get(uri).await;
        assert_eq!(status, StatusCode::OK, "GET {uri} returned {body}");
        match body {
            serde_json::Value::Number(number) => {
                Decimal::from_str(&number.to_string()).expect("decimal body")
            }
            other => panic!("expected a JSON number, got {other}"),
        }
    }
}
