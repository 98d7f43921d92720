use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use clenica_core_contact_contracts::{ContactService, ContactSubmitError};
use clenica_models::contact::ContactSubmission;

use super::{error, internal_server_error};
use crate::models::ApiSuccess;

pub fn router(service: Arc<impl ContactService>) -> Router<()> {
    Router::new()
        .route("/api/contact", routing::post(submit))
        .with_state(service)
}

/// Checks run in a fixed order: content type, mail configuration, body
/// shape, field validation. The body is not parsed unless the request
/// declares a JSON content type.
async fn submit(
    service: State<Arc<impl ContactService>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if !is_json_content_type(&headers) {
        return error(StatusCode::UNSUPPORTED_MEDIA_TYPE, "Invalid content type.");
    }

    if !service.configured() {
        tracing::error!("contact form mail settings are missing");
        return error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Email service not configured.",
        );
    }

    let submission = match serde_json::from_slice::<ContactSubmission>(&body) {
        Ok(submission) => submission,
        Err(_) => return error(StatusCode::BAD_REQUEST, "Invalid JSON body."),
    };

    match service.submit(submission).await {
        Ok(()) => Json(ApiSuccess { success: true }).into_response(),
        Err(ContactSubmitError::Rejected(rejection)) => {
            error(StatusCode::BAD_REQUEST, rejection.to_string())
        }
        Err(ContactSubmitError::NotConfigured) => {
            tracing::error!("contact form mail settings are missing");
            error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Email service not configured.",
            )
        }
        Err(ContactSubmitError::Send) => error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Unable to send email just now.",
        ),
        Err(ContactSubmitError::Other(err)) => internal_server_error(err),
    }
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.to_ascii_lowercase().contains("application/json"))
}
