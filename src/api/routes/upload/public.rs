//! Public types for the upload API
use std::collections::HashMap;

use serde::Serialize;

#[derive(Serialize)]
pub struct UploadResponse {
    pub status: String,
    pub files: HashMap<String, String>,
}
