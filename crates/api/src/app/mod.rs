//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: the injected user store shared by all handlers
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent `{"error": ...}` responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use usuarios_infra::UserStore;

use crate::config::ApiConfig;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

use services::AppServices;

/// Build the full HTTP router backed by an in-memory store (public entrypoint used by `main.rs`).
pub fn build_app(config: &ApiConfig) -> Router {
    build_app_with_services(AppServices::in_memory(config.seed))
}

/// Build the router over any `UserStore` implementation.
pub fn build_app_with_store(store: Arc<dyn UserStore>) -> Router {
    build_app_with_services(AppServices::new(store))
}

fn build_app_with_services(services: AppServices) -> Router {
    routes::router()
        .fallback(routes::system::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(errors::panic_to_response))
                .layer(CorsLayer::permissive())
                .layer(Extension(Arc::new(services))),
        )
}
