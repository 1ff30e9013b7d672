//! Project handlers

mod handler;
pub mod request;

pub use handler::*;
pub use request::*;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Project routes, all behind the authorization middleware.
///
/// Only updates are mounted in this service. Creation, lookup, listing and
/// deletion answer 501 until their controllers move here.
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/project",
            post(handler::not_implemented).get(handler::not_implemented),
        )
        .route(
            "/project/{projectId}",
            get(handler::not_implemented)
                .put(handler::update_project)
                .delete(handler::not_implemented),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
