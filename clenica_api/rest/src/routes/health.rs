use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use clenica_core_contact_contracts::ContactService;
use serde::Serialize;

pub fn router(service: Arc<impl ContactService>) -> Router<()> {
    Router::new()
        .route("/api/health", routing::get(health))
        .with_state(service)
}

#[derive(Serialize)]
struct HealthResponse {
    http: bool,
    email: bool,
}

async fn health(service: State<Arc<impl ContactService>>) -> Response {
    let email = service.configured();

    let status = if email {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status, Json(HealthResponse { http: true, email })).into_response()
}
