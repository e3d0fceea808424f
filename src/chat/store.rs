use std::collections::HashMap;

use crate::llm::Message;

/// Conversation id used when a chat request doesn't name one
pub const DEFAULT_CONVERSATION_ID: &str = "default";

/// In-memory transcript storage keyed by conversation id. Transcripts
/// are append-only, never evicted, and lost on process restart.
#[derive(Default)]
pub struct ConversationStore {
    conversations: HashMap<String, Vec<Message>>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self {
            conversations: HashMap::new(),
        }
    }

    /// Look up a transcript. `None` if the conversation has never
    /// been seen.
    pub fn find(&self, conversation_id: &str) -> Option<&[Message]> {
        self.conversations
            .get(conversation_id)
            .map(Vec::as_slice)
    }

    /// The stored history for a conversation, empty if it has never
    /// been seen
    pub fn load(&self, conversation_id: &str) -> Vec<Message> {
        self.conversations
            .get(conversation_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Create an empty transcript unless one already exists
    pub fn create(&mut self, conversation_id: &str) {
        self.conversations
            .entry(conversation_id.to_string())
            .or_default();
    }

    /// Commit a completed turn: all inbound messages followed by the
    /// reply, creating the conversation if absent
    pub fn append_and_save(
        &mut self,
        conversation_id: &str,
        inbound: &[Message],
        outbound: Message,
    ) {
        let history = self
            .conversations
            .entry(conversation_id.to_string())
            .or_default();
        history.extend_from_slice(inbound);
        history.push(outbound);
    }
}
