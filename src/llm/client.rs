use super::{Provider, types::CompletionRequest};
use crate::{Error, Result, config::ProviderSettings};
use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use tracing::{debug, info, warn};

/// Sends a single prompt to a provider and returns the first generated text span.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, provider: Provider, prompt: &str) -> Result<String>;
}

pub struct HttpCompletionClient {
    http: reqwest::Client,
    claude: ProviderSettings,
    chatgpt: ProviderSettings,
}

impl HttpCompletionClient {
    pub fn new(claude: ProviderSettings, chatgpt: ProviderSettings) -> Self {
        Self {
            http: reqwest::Client::new(),
            claude,
            chatgpt,
        }
    }

    pub fn settings(&self, provider: Provider) -> &ProviderSettings {
        match provider {
            Provider::Claude => &self.claude,
            Provider::ChatGpt => &self.chatgpt,
        }
    }

    fn endpoint(&self, provider: Provider) -> String {
        let base = self.settings(provider).base_url.trim_end_matches('/');
        format!("{}{}", base, provider.endpoint_path())
    }
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn complete(&self, provider: Provider, prompt: &str) -> Result<String> {
        let settings = self.settings(provider);
        let url = self.endpoint(provider);
        let payload =
            CompletionRequest::single_user_message(&settings.model, settings.max_tokens, prompt);

        let mut headers = provider.auth_headers(&settings.api_key)?;
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        debug!(
            "Sending {} request to {} with model {} ({} prompt bytes)",
            provider,
            url,
            settings.model,
            prompt.len()
        );

        let mut request = self.http.post(&url).headers(headers).json(&payload);
        if let Some(timeout) = settings.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        info!("{} API responded with status {}", provider, status.as_u16());

        if status != reqwest::StatusCode::OK {
            warn!(
                "{} API error {}: {}",
                provider,
                status.as_u16(),
                body.chars().take(500).collect::<String>()
            );
            return Err(Error::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        provider.extract_text(&body)
    }
}
