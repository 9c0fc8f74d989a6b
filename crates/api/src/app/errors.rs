use std::any::Any;
use std::fmt::Display;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use usuarios_infra::StoreError;

pub const USER_NOT_FOUND: &str = "Usuario no encontrado";
pub const CREATE_FIELDS_REQUIRED: &str = "Se requieren nombre y email";
pub const SEARCH_PARAM_REQUIRED: &str = "Se requiere el parámetro 'nombre'";
pub const ROUTE_NOT_FOUND: &str = "Endpoint no encontrado";
pub const INTERNAL_ERROR: &str = "Error interno del servidor";
pub const CREATE_FAILED: &str = "Error al crear usuario";
pub const UPDATE_FAILED: &str = "Error al actualizar usuario";

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (status, axum::Json(json!({ "error": message.into() }))).into_response()
}

pub fn user_not_found() -> axum::response::Response {
    json_error(StatusCode::NOT_FOUND, USER_NOT_FOUND)
}

pub fn route_not_found() -> axum::response::Response {
    json_error(StatusCode::NOT_FOUND, ROUTE_NOT_FOUND)
}

/// 500 whose message carries the failure detail, e.g. `Error al actualizar usuario: <detail>`.
pub fn processing_error(context: &str, detail: impl Display) -> axum::response::Response {
    json_error(StatusCode::INTERNAL_SERVER_ERROR, format!("{context}: {detail}"))
}

/// Map a store failure; `context` prefixes the detail of internal errors.
pub fn store_error_to_response(err: StoreError, context: &str) -> axum::response::Response {
    match err {
        StoreError::NotFound(_) => user_not_found(),
        StoreError::LockPoisoned | StoreError::IdsExhausted => {
            tracing::warn!(error = %err, "user store failure");
            processing_error(context, err)
        }
    }
}

/// Create bodies that are missing, not JSON, or not an object.
pub fn create_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    tracing::debug!(reason = %rejection.body_text(), "rejected create body");
    json_error(StatusCode::BAD_REQUEST, CREATE_FIELDS_REQUIRED)
}

/// Update bodies that are missing, not JSON, or not an object. Reported as a
/// processing failure, not a client error.
pub fn update_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    let detail = rejection.body_text();
    tracing::warn!(reason = %detail, "rejected update body");
    processing_error(UPDATE_FAILED, detail)
}

pub fn query_rejection_to_response(rejection: QueryRejection) -> axum::response::Response {
    tracing::debug!(reason = %rejection.body_text(), "rejected query string");
    json_error(StatusCode::BAD_REQUEST, SEARCH_PARAM_REQUIRED)
}

/// Response for a handler panic (wired into `CatchPanicLayer`).
pub fn panic_to_response(err: Box<dyn Any + Send + 'static>) -> axum::response::Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = detail, "handler panicked");
    json_error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
}
