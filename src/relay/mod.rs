//! Translates a browser question about a mind map into a single provider call
//! and folds the outcome into the uniform [`Envelope`].

mod prompt;
mod types;

pub use prompt::{PROMPT_PREAMBLE, build_prompt};
pub use types::{Envelope, InboundRequest};

use crate::{
    Error, Result,
    llm::{CompletionClient, Provider},
};
use std::sync::Arc;
use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

#[derive(Clone)]
pub struct Relay {
    client: Arc<dyn CompletionClient>,
}

impl Relay {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Parses a raw inbound body and relays it. Unparseable bodies become a failure envelope.
    pub async fn handle_body(&self, provider: Provider, body: &[u8]) -> Envelope {
        match parse_inbound(body) {
            Ok(request) => self.handle(provider, &request).await,
            Err(e) => {
                error!(provider = %provider, kind = e.kind(), "Rejected inbound request: {}", e);
                Envelope::failure(&e)
            }
        }
    }

    pub async fn handle(&self, provider: Provider, request: &InboundRequest) -> Envelope {
        let request_id = Uuid::new_v4();
        let span = info_span!("relay", provider = %provider, request_id = %request_id);

        async {
            info!(
                "Relaying question ({} bytes) with mind map ({} bytes)",
                request.question.len(),
                request.freemind_xml.len()
            );

            match self.forward(provider, request).await {
                Ok(text) => {
                    info!("Relay succeeded with {} bytes of response", text.len());
                    Envelope::ok(text)
                }
                Err(e) => {
                    error!(kind = e.kind(), "Relay failed: {}", e);
                    Envelope::failure(&e)
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn forward(&self, provider: Provider, request: &InboundRequest) -> Result<String> {
        let prompt = build_prompt(&request.question, &request.freemind_xml);
        self.client.complete(provider, &prompt).await
    }
}

pub fn parse_inbound(body: &[u8]) -> Result<InboundRequest> {
    serde_json::from_slice(body).map_err(|e| Error::invalid_request(e.to_string()))
}
