mod store;

pub use store::{ConversationStore, DEFAULT_CONVERSATION_ID};
