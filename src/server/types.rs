use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PingResponse {
    pub success: bool,
    pub message: String,
}

impl PingResponse {
    pub fn pong() -> Self {
        Self {
            success: true,
            message: "Pong!".to_string(),
        }
    }
}
