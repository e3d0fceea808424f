use std::collections::HashMap;
use std::sync::Arc;

use crate::core::{AppConfig, AppError};
use crate::llm::{ModelClient, OpenAiClient};

pub type SharedModelClient = Arc<dyn ModelClient>;

/// Maps the configured model identifiers to client handles. Handles
/// are constructed on first use and reused for the process lifetime;
/// the identifier set itself is fixed at startup.
pub struct ModelRegistry {
    models: Vec<String>,
    api_hostname: String,
    api_key: String,
    handles: HashMap<String, SharedModelClient>,
}

impl ModelRegistry {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            models: config.models.clone(),
            api_hostname: config.openai_api_hostname.clone(),
            api_key: config.openai_api_key.clone(),
            handles: HashMap::new(),
        }
    }

    /// The configured model identifiers, in configuration order
    pub fn list(&self) -> &[String] {
        &self.models
    }

    /// Get the client handle for a model identifier, constructing it
    /// on first reference. Nothing is cached when construction fails.
    pub fn resolve(&mut self, model_name: &str) -> Result<SharedModelClient, AppError> {
        if !self.models.iter().any(|m| m == model_name) {
            return Err(AppError::UnknownModel(model_name.to_string()));
        }

        if let Some(handle) = self.handles.get(model_name) {
            return Ok(Arc::clone(handle));
        }

        let client = OpenAiClient::new(&self.api_hostname, &self.api_key, model_name).map_err(
            |cause| AppError::ModelInitialization {
                model: model_name.to_string(),
                cause,
            },
        )?;
        let handle: SharedModelClient = Arc::new(client);
        self.handles
            .insert(model_name.to_string(), Arc::clone(&handle));

        Ok(handle)
    }
}
