use crate::chat::ConversationStore;
use crate::core::AppConfig;
use crate::llm::ModelRegistry;

pub struct AppState {
    pub registry: ModelRegistry,
    pub conversations: ConversationStore,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let registry = ModelRegistry::new(&config);
        Self {
            registry,
            conversations: ConversationStore::new(),
            config,
        }
    }
}
