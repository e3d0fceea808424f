//! Router for the chat API

use std::sync::{Arc, RwLock};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use uuid::Uuid;

use super::public;
use crate::api::state::AppState;
use crate::chat::DEFAULT_CONVERSATION_ID;
use crate::core::AppError;
use crate::llm::{Message, Role};

type SharedState = Arc<RwLock<AppState>>;

/// Run a single chat turn against the requested model
async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<public::ChatRequest>,
) -> Result<Json<public::ChatResponse>, crate::api::public::ApiError> {
    let conversation_id = payload
        .conversation_id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| DEFAULT_CONVERSATION_ID.to_string());

    let handle = {
        let mut shared = state.write().expect("Unable to write shared state");
        shared.registry.resolve(&payload.model_name)?
    };

    let inbound: Vec<Message> = payload
        .messages
        .iter()
        .map(|content| Message::new(Role::User, content))
        .collect();

    // The prompt is the stored history plus the inbound messages.
    // Nothing is committed to the store until the model call succeeds.
    let mut prompt = {
        let shared = state.read().expect("Unable to read shared state");
        shared.conversations.load(&conversation_id)
    };
    prompt.extend(inbound.iter().cloned());

    // The store lock is not held while the model call is in flight:
    // two concurrent turns on the same conversation can interleave
    // their load and save and lose messages.
    let reply = handle
        .generate(&prompt)
        .await
        .map_err(|cause| AppError::Generation { cause })?;

    {
        let mut shared = state.write().expect("Unable to write shared state");
        shared.conversations.append_and_save(
            &conversation_id,
            &inbound,
            Message::new(Role::Assistant, &reply),
        );
    }

    Ok(Json(public::ChatResponse {
        reply,
        conversation_id,
    }))
}

/// Create a new conversation with a generated id
async fn start_conversation(
    State(state): State<SharedState>,
) -> Json<public::StartConversationResponse> {
    let conversation_id = Uuid::new_v4().to_string();

    state
        .write()
        .expect("Unable to write shared state")
        .conversations
        .create(&conversation_id);

    Json(public::StartConversationResponse { conversation_id })
}

/// Get the full transcript for a conversation
async fn chat_transcript(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let shared = state.read().expect("Unable to read shared state");

    match shared.conversations.find(&id) {
        Some(transcript) => Json(public::ChatTranscriptResponse {
            transcript: transcript.to_vec(),
        })
        .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            format!("Conversation {} not found", id),
        )
            .into_response(),
    }
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/chat/", post(chat_handler))
        .route("/chat/start", post(start_conversation))
        .route("/chat/{id}", get(chat_transcript))
}
