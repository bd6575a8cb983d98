//! REST handlers for ad delivery and operational endpoints.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use targeting_core::types::DeliveryRequest;
use targeting_core::TargetingError;
use targeting_engine::Evaluator;
use tracing::{error, warn};

/// Shared application state for REST handlers.
#[derive(Clone)]
pub struct AppState {
    pub evaluator: Arc<Evaluator>,
    pub start_time: Instant,
}

#[derive(Debug, Deserialize)]
pub struct DeliveryParams {
    #[serde(default)]
    app: String,
    #[serde(default)]
    os: String,
    #[serde(default)]
    country: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

/// GET /v1/delivery — the eligible campaigns for one ad request.
///
/// 200 with a JSON array when at least one campaign matches, 204 when
/// none do, 400 when a required parameter is missing.
pub async fn handle_delivery(
    State(state): State<AppState>,
    Query(params): Query<DeliveryParams>,
) -> Response {
    metrics::counter!("delivery.requests").increment(1);

    // Validate at the API boundary so the caller learns which parameter
    // is missing; the evaluator re-checks before touching the store.
    for (value, name) in [
        (&params.app, "app"),
        (&params.os, "os"),
        (&params.country, "country"),
    ] {
        if value.is_empty() {
            warn!(param = name, "Delivery request missing parameter");
            metrics::counter!("delivery.validation_errors").increment(1);
            return error_response(StatusCode::BAD_REQUEST, format!("missing {name} param"));
        }
    }

    let request = DeliveryRequest::new(params.app, params.os, params.country);

    match state.evaluator.matching_campaigns(&request).await {
        Ok(matched) if matched.is_empty() => {
            metrics::counter!("delivery.no_match").increment(1);
            StatusCode::NO_CONTENT.into_response()
        }
        Ok(matched) => {
            metrics::counter!("delivery.matched").increment(matched.len() as u64);
            (StatusCode::OK, Json(matched)).into_response()
        }
        Err(TargetingError::InvalidRequest(field)) => {
            metrics::counter!("delivery.validation_errors").increment(1);
            error_response(StatusCode::BAD_REQUEST, format!("missing {field} param"))
        }
        Err(e) => {
            error!(error = %e, "Delivery evaluation failed");
            metrics::counter!("delivery.errors").increment(1);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
        }
    }
}

/// GET /health — health check endpoint.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_secs: u64,
}
