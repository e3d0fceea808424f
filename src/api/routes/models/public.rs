//! Public types for the models API
use serde::Serialize;

/// Serializes as a bare JSON array of identifiers, in registry order
#[derive(Serialize)]
pub struct ModelListResponse(pub Vec<String>);
