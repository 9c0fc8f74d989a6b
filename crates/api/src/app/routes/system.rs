use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::app::errors;

pub const API_VERSION: &str = "1.0";

pub async fn index() -> impl IntoResponse {
    Json(serde_json::json!({
        "mensaje": "¡Bienvenido a mi API!",
        "version": API_VERSION,
        "endpoints": {
            "usuarios": "/usuarios",
            "usuario_por_id": "/usuarios/<id>",
            "crear_usuario": "/usuarios (POST)",
            "buscar": "/buscar?nombre=<nombre>",
        },
    }))
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Router fallback for unmatched paths.
pub async fn not_found() -> axum::response::Response {
    errors::route_not_found()
}
