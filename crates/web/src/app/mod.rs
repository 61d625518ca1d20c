//! HTTP application wiring (Axum router + service wiring).
//!
//! This folder is structured like:
//! - `services.rs`: infrastructure wiring (product store)
//! - `controller.rs`: the products resource controller (render/redirect decisions)
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: form payload mapping onto domain types
//! - `views.rs`: server-rendered HTML templates
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod controller;
pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;
pub mod views;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(session_secret: String) -> Router {
    let sessions = Arc::new(shopfront_auth::Hs256SessionValidator::new(
        session_secret.as_bytes(),
    ));
    let auth_state = middleware::AuthState { sessions };

    let services = Arc::new(services::build_services());

    // Protected routes: require an authenticated retailer session.
    let protected = routes::router()
        .layer(Extension(services))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::auth_middleware,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(protected)
        .layer(ServiceBuilder::new())
}
