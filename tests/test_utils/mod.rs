//! Test utilities for integration tests
use std::sync::{Arc, RwLock};

use axum::{Router, body::Body};

use confab::api::AppState;
use confab::api::app;
use confab::core::AppConfig;

/// Creates a test application router from the given config
pub fn test_app(config: AppConfig) -> Router {
    let app_state = AppState::new(config);
    app(Arc::new(RwLock::new(app_state)))
}

/// Config pointing at the given completion API host with a fixed set
/// of model identifiers
pub fn test_config(api_hostname: &str, upload_dir: &str) -> AppConfig {
    AppConfig {
        models: vec![
            String::from("model_a"),
            String::from("model_b"),
            String::from("model_c"),
        ],
        openai_api_hostname: api_hostname.to_string(),
        openai_api_key: String::from("test-api-key"),
        upload_dir: upload_dir.to_string(),
    }
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("Response body was not valid utf-8")
}
