use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use usuarios_core::{Entity, UserId};

use crate::app::{dto, errors, services::AppServices};

pub fn router() -> Router {
    Router::new()
        .route("/usuarios", get(list_users).post(create_user))
        .route(
            "/usuarios/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
}

pub async fn list_users(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match services.users().list() {
        Ok(users) => (StatusCode::OK, Json(dto::UserListResponse::from(users))).into_response(),
        Err(e) => errors::store_error_to_response(e, "Error al obtener usuarios"),
    }
}

pub async fn get_user(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.users().get(id) {
        Ok(Some(user)) => (StatusCode::OK, Json(user)).into_response(),
        Ok(None) => errors::user_not_found(),
        Err(e) => errors::store_error_to_response(e, "Error al obtener usuario"),
    }
}

pub async fn create_user(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::JsonObject>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::create_rejection_to_response(rejection),
    };

    let data = match dto::CreateUserRequest::from_object(body).map(|req| req.into_new_user()) {
        Ok(Some(Ok(data))) => data,
        Ok(Some(Err(e))) => {
            tracing::debug!(error = %e, "rejected create body");
            return errors::json_error(StatusCode::BAD_REQUEST, errors::CREATE_FIELDS_REQUIRED);
        }
        Ok(None) | Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, errors::CREATE_FIELDS_REQUIRED);
        }
    };

    match services.users().create(data) {
        Ok(user) => {
            tracing::info!(user_id = %user.id(), "user created");
            (
                StatusCode::CREATED,
                Json(dto::UserWrittenResponse {
                    mensaje: "Usuario creado exitosamente",
                    usuario: user,
                }),
            )
                .into_response()
        }
        Err(e) => errors::store_error_to_response(e, errors::CREATE_FAILED),
    }
}

pub async fn update_user(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::JsonObject>, JsonRejection>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    // Unknown ids are reported before the body is looked at.
    match services.users().get(id) {
        Ok(Some(_)) => {}
        Ok(None) => return errors::user_not_found(),
        Err(e) => return errors::store_error_to_response(e, errors::UPDATE_FAILED),
    }

    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::update_rejection_to_response(rejection),
    };

    let patch = match dto::UpdateUserRequest::from_object(body) {
        Ok(req) => req.into_patch(),
        Err(e) => return errors::processing_error(errors::UPDATE_FAILED, e),
    };

    match services.users().update(id, patch) {
        Ok(user) => {
            tracing::info!(user_id = %id, "user updated");
            (
                StatusCode::OK,
                Json(dto::UserWrittenResponse {
                    mensaje: "Usuario actualizado exitosamente",
                    usuario: user,
                }),
            )
                .into_response()
        }
        Err(e) => errors::store_error_to_response(e, errors::UPDATE_FAILED),
    }
}

pub async fn delete_user(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.users().delete(id) {
        Ok(user) => {
            tracing::info!(user_id = %id, "user deleted");
            (
                StatusCode::OK,
                Json(dto::UserDeletedResponse {
                    mensaje: "Usuario eliminado exitosamente",
                    usuario_eliminado: user,
                }),
            )
                .into_response()
        }
        Err(e) => errors::store_error_to_response(e, "Error al eliminar usuario"),
    }
}

/// Non-integer ids never match a user route, so they get the generic 404.
/// Integers too large for an id still match the route but can't name a user.
fn parse_id(raw: &str) -> Result<UserId, axum::response::Response> {
    match raw.parse::<UserId>() {
        Ok(id) => Ok(id),
        Err(_) if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) => {
            Err(errors::user_not_found())
        }
        Err(_) => Err(errors::route_not_found()),
    }
}
