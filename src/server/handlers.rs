//! HTTP handlers for the contact endpoints.
//!
//! Handlers translate requests into service calls and map service errors to
//! status codes. They hold no business rules of their own.

use crate::error::ContactError;
use crate::models::Contact;
use crate::observability::{MetricsTracker, Timer};
use crate::services::ContactService;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn ContactService>,
    pub metrics: MetricsTracker,
}

impl AppState {
    /// Bundle a service with the metrics tracker the handlers report to.
    pub fn new(service: Arc<dyn ContactService>, metrics: MetricsTracker) -> Self {
        Self { service, metrics }
    }
}

#[derive(Debug, Deserialize)]
pub struct ContactQuery {
    #[serde(default)]
    pub name: Option<String>,
}

/// `GET /contact?name=...`
///
/// Responds with the contact as JSON, or `null` when there is none.
pub async fn get_contact(
    State(state): State<AppState>,
    Query(query): Query<ContactQuery>,
) -> Response {
    let timer = Timer::new("GET /contact");
    tracing::debug!(name = ?query.name, "GET /contact");

    let response = match state.service.retrieve(query.name.as_deref()).await {
        Ok(found) => (StatusCode::OK, Json(found)).into_response(),
        Err(e) => contact_error_response(&e),
    };

    finish(&state.metrics, timer, "GET /contact", &response);
    response
}

/// `POST /contact`
///
/// An empty body or a JSON `null` is treated as an absent contact and is
/// rejected by the service like any other invalid input.
pub async fn post_contact(State(state): State<AppState>, body: Bytes) -> Response {
    let timer = Timer::new("POST /contact");

    let response = match parse_contact_body(&body) {
        Ok(contact) => match state.service.create(contact).await {
            Ok(()) => StatusCode::CREATED.into_response(),
            Err(e) => contact_error_response(&e),
        },
        Err(e) => {
            tracing::warn!("Malformed contact body: {}", e);
            error_response(StatusCode::BAD_REQUEST, "malformed", &e.to_string())
        }
    };

    finish(&state.metrics, timer, "POST /contact", &response);
    response
}

/// `GET /health`
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({"status": "ok"}))
}

/// `GET /metrics`
pub async fn metrics(State(state): State<AppState>) -> Response {
    Json(state.metrics.snapshot()).into_response()
}

fn parse_contact_body(body: &[u8]) -> Result<Option<Contact>, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice::<Option<Contact>>(body)
}

fn finish(metrics: &MetricsTracker, timer: Timer, route: &str, response: &Response) {
    let success = response.status().is_success();
    let duration_ms = timer.finish_with_status(success);
    metrics.track_http_request(route, duration_ms, success);
}

fn contact_error_response(err: &ContactError) -> Response {
    match err {
        ContactError::Validation(_) => {
            error_response(StatusCode::BAD_REQUEST, "validation", &err.to_string())
        }
        ContactError::Storage(_) => {
            tracing::error!("Storage failure: {}", err);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "storage", &err.to_string())
        }
    }
}

fn error_response(status: StatusCode, category: &str, message: &str) -> Response {
    let body = json!({
        "error": {
            "category": category,
            "message": message,
        }
    });
    (status, Json(body)).into_response()
}
