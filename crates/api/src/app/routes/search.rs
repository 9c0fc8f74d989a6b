use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::app::{dto, errors, services::AppServices};

/// `GET /buscar?nombre=X`: case-insensitive substring match on user names.
pub async fn search_users(
    Extension(services): Extension<Arc<AppServices>>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> axum::response::Response {
    let params = match pairs {
        Ok(Query(pairs)) => dto::SearchParams::from_pairs(pairs),
        Err(rejection) => return errors::query_rejection_to_response(rejection),
    };

    let nombre = match params.nombre {
        Some(n) if !n.is_empty() => n,
        _ => return errors::json_error(StatusCode::BAD_REQUEST, errors::SEARCH_PARAM_REQUIRED),
    };

    match services.users().search_by_name(&nombre) {
        Ok(found) => (StatusCode::OK, Json(dto::SearchResponse::new(nombre, found))).into_response(),
        Err(e) => errors::store_error_to_response(e, "Error al buscar usuarios"),
    }
}
