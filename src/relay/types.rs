use crate::Error;
use axum::http::StatusCode;
use serde::{Deserialize, Deserializer, Serialize};

/// Question plus mind map sent by the browser client. Absent or `null` fields read as "".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InboundRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub question: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub freemind_xml: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Uniform reply returned to the caller for every relay call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl Envelope {
    pub fn ok(response: impl Into<String>) -> Self {
        Self {
            success: true,
            response: Some(response.into()),
            error: None,
            details: None,
        }
    }

    pub fn failure(err: &Error) -> Self {
        Self {
            success: false,
            response: None,
            error: Some(err.to_string()),
            details: err.details().map(str::to_string),
        }
    }

    /// Upstream status codes are never passed through; every failure is a 500.
    pub fn status_code(&self) -> StatusCode {
        if self.success {
            StatusCode::OK
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_success_envelope_shape() {
        let envelope = Envelope::ok("Paris");

        assert_eq!(envelope.status_code(), StatusCode::OK);
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({"success": true, "response": "Paris"})
        );
    }

    #[test]
    fn test_upstream_failure_envelope_shape() {
        let envelope = Envelope::failure(&Error::Upstream {
            status: 429,
            body: "rate limited".to_string(),
        });

        assert_eq!(envelope.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({"success": false, "error": "API error: 429", "details": "rate limited"})
        );
    }

    #[test]
    fn test_other_failure_omits_details() {
        let envelope = Envelope::failure(&Error::config("no API key"));

        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({"success": false, "error": "Configuration error: no API key"})
        );
    }

    #[test]
    fn test_inbound_defaults() {
        let request: InboundRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, InboundRequest::default());

        let request: InboundRequest =
            serde_json::from_str(r#"{"question": null, "freemind_xml": "<map/>", "extra": 1}"#)
                .unwrap();
        assert_eq!(request.question, "");
        assert_eq!(request.freemind_xml, "<map/>");
    }
}
