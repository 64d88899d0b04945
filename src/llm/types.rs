use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Outbound payload. Both providers accept the same shape for a single-turn call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<ChatMessage>,
}

impl CompletionRequest {
    pub fn single_user_message(
        model: impl Into<String>,
        max_tokens: u32,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            max_tokens,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.into(),
            }],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClaudeResponse {
    pub content: Vec<ClaudeContentBlock>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClaudeContentBlock {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatGptResponse {
    pub choices: Vec<ChatGptChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatGptChoice {
    pub message: ChatGptMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatGptMessage {
    #[serde(default)]
    pub content: Option<String>,
}
