use axum::{routing::get, Router};

pub mod search;
pub mod system;
pub mod users;

/// Router for every public endpoint (no fallback; `build_app` adds it).
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::index))
        .route("/health", get(system::health))
        .route("/buscar", get(search::search_users))
        .merge(users::router())
}
