//! Axum router wiring.
//!
//! The route table is built explicitly here so the request-to-handler
//! mapping is visible at a single call site. Currently exposes `GET /`.

use axum::{routing::get, Router};

use crate::{app_state::AppState, html};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(html::home))
        .with_state(state)
}
