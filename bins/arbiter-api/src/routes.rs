// Route definitions for the Arbiter API

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, AppState};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/execute", post(handlers::execute))
        .route("/health", get(handlers::health_check))
        .route("/languages", get(handlers::list_languages))
        .route("/metrics", get(handlers::get_metrics))
}
