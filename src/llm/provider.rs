use super::types::{ChatGptResponse, ClaudeResponse};
use crate::{Error, Result};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const ANTHROPIC_VERSION: &str = "2023-06-01";
pub const DEFAULT_MAX_TOKENS: u32 = 4000;

/// The closed set of completion services the relay forwards to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Claude,
    ChatGpt,
}

impl Provider {
    pub fn name(self) -> &'static str {
        match self {
            Self::Claude => "claude",
            Self::ChatGpt => "chatgpt",
        }
    }

    pub fn default_base_url(self) -> &'static str {
        match self {
            Self::Claude => "https://api.anthropic.com/v1",
            Self::ChatGpt => "https://api.openai.com/v1",
        }
    }

    /// Path appended to the base URL for a completion call.
    pub fn endpoint_path(self) -> &'static str {
        match self {
            Self::Claude => "/messages",
            Self::ChatGpt => "/chat/completions",
        }
    }

    pub fn default_model(self) -> &'static str {
        match self {
            Self::Claude => "claude-3-haiku-20240307",
            Self::ChatGpt => "gpt-3.5-turbo",
        }
    }

    pub fn default_api_key_file(self) -> &'static str {
        match self {
            Self::Claude => ".private",
            Self::ChatGpt => ".openai_key",
        }
    }

    pub fn default_api_key_env(self) -> &'static str {
        match self {
            Self::Claude => "CLAUDE_API_KEY",
            Self::ChatGpt => "OPENAI_API_KEY",
        }
    }

    pub fn placeholder_api_key(self) -> &'static str {
        match self {
            Self::Claude => "YOUR_API_KEY",
            Self::ChatGpt => "YOUR_OPENAI_API_KEY",
        }
    }

    pub fn auth_headers(self, api_key: &str) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        match self {
            Self::Claude => {
                let mut key = HeaderValue::from_str(api_key)?;
                key.set_sensitive(true);
                headers.insert(HeaderName::from_static("x-api-key"), key);
                headers.insert(
                    HeaderName::from_static("anthropic-version"),
                    HeaderValue::from_static(ANTHROPIC_VERSION),
                );
            }
            Self::ChatGpt => {
                let mut bearer = HeaderValue::from_str(&format!("Bearer {}", api_key))?;
                bearer.set_sensitive(true);
                headers.insert(AUTHORIZATION, bearer);
            }
        }
        Ok(headers)
    }

    /// Pulls the first generated text span out of a successful reply body.
    pub fn extract_text(self, body: &str) -> Result<String> {
        match self {
            Self::Claude => {
                let reply: ClaudeResponse = serde_json::from_str(body)
                    .map_err(|e| Error::malformed_response(format!("Claude reply: {}", e)))?;
                reply
                    .content
                    .into_iter()
                    .next()
                    .and_then(|block| block.text)
                    .ok_or_else(|| Error::malformed_response("Claude reply has no content[0].text"))
            }
            Self::ChatGpt => {
                let reply: ChatGptResponse = serde_json::from_str(body)
                    .map_err(|e| Error::malformed_response(format!("ChatGPT reply: {}", e)))?;
                reply
                    .choices
                    .into_iter()
                    .next()
                    .and_then(|choice| choice.message.content)
                    .ok_or_else(|| {
                        Error::malformed_response("ChatGPT reply has no choices[0].message.content")
                    })
            }
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
