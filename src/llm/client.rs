use std::time::Duration;

use anyhow::{Error, Result, anyhow};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub enum Role {
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "user")]
    User,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Message {
            role,
            content: content.to_string(),
        }
    }
}

/// A client bound to a single model that produces the next reply for
/// an ordered transcript. The call may fail or block until the HTTP
/// timeout; there is no cancellation.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate(&self, transcript: &[Message]) -> Result<String, Error>;
}

/// Client for OpenAI compatible chat completion APIs
pub struct OpenAiClient {
    http: reqwest::Client,
    api_hostname: String,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(api_hostname: &str, api_key: &str, model: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(60 * 10))
            .build()?;

        Ok(Self {
            http,
            api_hostname: api_hostname.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        })
    }
}

#[async_trait]
impl ModelClient for OpenAiClient {
    async fn generate(&self, transcript: &[Message]) -> Result<String, Error> {
        let payload = json!({
            "model": self.model,
            "messages": transcript,
        });
        let url = format!("{}/v1/chat/completions", self.api_hostname.trim_end_matches("/"));
        let response: Value = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let reply = response["choices"][0]["message"]["content"]
            .as_str()
            .ok_or(anyhow!("No message received. Resp:\n\n {}", response))?;

        Ok(reply.to_string())
    }
}
