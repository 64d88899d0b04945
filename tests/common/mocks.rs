use async_trait::async_trait;
use mindmap_relay::{Error, Result, llm::CompletionClient, llm::Provider};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Scripted reply handed back by [`RecordingClient`].
pub enum MockReply {
    Text(String),
    Upstream { status: u16, body: String },
    Malformed(String),
}

/// Completion client that records every prompt and replays scripted replies.
#[derive(Clone, Default)]
pub struct RecordingClient {
    pub replies: Arc<Mutex<VecDeque<MockReply>>>,
    pub calls: Arc<Mutex<Vec<(Provider, String)>>>,
}

impl RecordingClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_replies(self, replies: Vec<MockReply>) -> Self {
        *self.replies.lock().unwrap() = replies.into();
        self
    }

    pub fn push_text(&self, text: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Text(text.to_string()));
    }

    pub fn calls(&self) -> Vec<(Provider, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for RecordingClient {
    async fn complete(&self, provider: Provider, prompt: &str) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((provider, prompt.to_string()));

        match self.replies.lock().unwrap().pop_front() {
            Some(MockReply::Text(text)) => Ok(text),
            Some(MockReply::Upstream { status, body }) => Err(Error::Upstream { status, body }),
            Some(MockReply::Malformed(msg)) => Err(Error::malformed_response(msg)),
            None => Err(Error::malformed_response("No more mock replies available")),
        }
    }
}
