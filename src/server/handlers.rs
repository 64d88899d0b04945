use super::types::PingResponse;
use crate::{
    llm::Provider,
    relay::{Envelope, Relay},
};
use axum::{body::Bytes, extract::State, http::StatusCode, response::Json};

#[derive(Clone)]
pub struct AppState {
    pub relay: Relay,
}

pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse::pong())
}

pub async fn claude(State(state): State<AppState>, body: Bytes) -> (StatusCode, Json<Envelope>) {
    relay_to(&state, Provider::Claude, &body).await
}

pub async fn chatgpt(State(state): State<AppState>, body: Bytes) -> (StatusCode, Json<Envelope>) {
    relay_to(&state, Provider::ChatGpt, &body).await
}

// The body is taken raw so that malformed JSON still gets the envelope, not an extractor rejection.
async fn relay_to(
    state: &AppState,
    provider: Provider,
    body: &[u8],
) -> (StatusCode, Json<Envelope>) {
    let envelope = state.relay.handle_body(provider, body).await;
    (envelope.status_code(), Json(envelope))
}
