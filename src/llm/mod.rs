mod client;
mod provider;
mod types;

#[cfg(test)]
pub use client::MockCompletionClient;
pub use client::{CompletionClient, HttpCompletionClient};
pub use provider::{ANTHROPIC_VERSION, DEFAULT_MAX_TOKENS, Provider};
pub use types::*;
