//! Router for the models API

use std::sync::{Arc, RwLock};

use axum::{Json, Router, extract::State, routing::get};

use super::public;
use crate::api::state::AppState;

type SharedState = Arc<RwLock<AppState>>;

/// List the configured model identifiers
async fn model_list(State(state): State<SharedState>) -> Json<public::ModelListResponse> {
    let models = state
        .read()
        .expect("Unable to read shared state")
        .registry
        .list()
        .to_vec();

    Json(public::ModelListResponse(models))
}

/// Create the models router
pub fn router() -> Router<SharedState> {
    Router::new().route("/models/", get(model_list))
}
