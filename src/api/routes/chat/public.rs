//! Public types for the chat API
use serde::{Deserialize, Serialize};

use crate::llm::Message;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<String>,
    pub model_name: String,
    pub conversation_id: Option<String>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub conversation_id: String,
}

#[derive(Serialize)]
pub struct StartConversationResponse {
    pub conversation_id: String,
}

#[derive(Serialize)]
pub struct ChatTranscriptResponse {
    pub transcript: Vec<Message>,
}
