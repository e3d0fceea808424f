//! API routes module

pub mod chat;
pub mod models;
pub mod upload;

use std::sync::{Arc, RwLock};

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<RwLock<AppState>>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Chat routes
        .merge(chat::router())
        // Model listing routes
        .merge(models::router())
        // File upload routes
        .merge(upload::router())
}
