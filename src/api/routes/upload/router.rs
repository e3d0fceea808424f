//! Router for the upload API

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use anyhow::Context;
use axum::{
    Json, Router,
    extract::{Multipart, State},
    routing::post,
};

use super::public;
use crate::api::state::AppState;
use crate::core::AppError;

type SharedState = Arc<RwLock<AppState>>;

/// Save each uploaded file under the configured upload directory,
/// keyed by its client-supplied filename. An existing file with the
/// same name is overwritten. The first write failure fails the whole
/// request; files written before it stay on disk.
async fn upload_handler(
    State(state): State<SharedState>,
    mut multipart: Multipart,
) -> Result<Json<public::UploadResponse>, crate::api::public::ApiError> {
    let upload_dir = {
        let shared = state.read().expect("Unable to read shared state");
        PathBuf::from(&shared.config.upload_dir)
    };

    tokio::fs::create_dir_all(&upload_dir)
        .await
        .with_context(|| {
            format!(
                "Failed to create upload directory {}",
                upload_dir.display()
            )
        })?;

    let mut files = HashMap::new();

    while let Some(field) = multipart.next_field().await? {
        let Some(filename) = field.file_name().map(str::to_string) else {
            // Non-file fields, e.g. the optional `context` form field
            if field.name() == Some("context") {
                let context = field.text().await?;
                tracing::debug!("Received upload context ({} bytes)", context.len());
            }
            continue;
        };

        let data = field.bytes().await?;
        let dest = upload_dir.join(&filename);
        tokio::fs::write(&dest, &data)
            .await
            .map_err(|source| AppError::FileWrite {
                filename: filename.clone(),
                source,
            })?;

        tracing::debug!("Wrote {} bytes to {}", data.len(), dest.display());
        files.insert(filename, dest.display().to_string());
    }

    Ok(Json(public::UploadResponse {
        status: "success".to_string(),
        files,
    }))
}

/// Create the upload router
pub fn router() -> Router<SharedState> {
    Router::new().route("/upload/", post(upload_handler))
}
