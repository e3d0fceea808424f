mod client;
mod registry;

pub use client::{Message, ModelClient, OpenAiClient, Role};
pub use registry::{ModelRegistry, SharedModelClient};
