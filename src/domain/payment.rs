use super::ticket::TicketId;
use crate::error::{CheckoutError, Result};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Body of the payment initiation request: `{"ticket_id": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InitiatePaymentRequest {
    pub ticket_id: TicketId,
}

impl InitiatePaymentRequest {
    pub fn new(ticket_id: TicketId) -> Self {
        Self { ticket_id }
    }
}

/// Destination the user must be sent to in order to approve the payment.
///
/// Kept exactly as the backend returned it, relative or absolute, so
/// navigation targets the very same text. Only an empty string is refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalUrl(String);

impl ApprovalUrl {
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApprovalUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the backend answered to an initiation request.
#[derive(Debug, Clone, PartialEq)]
pub enum InitiationOutcome {
    Approved {
        approval_url: ApprovalUrl,
        payment_id: Option<String>,
    },
    Rejected(String),
}

impl InitiationOutcome {
    /// Interprets a decoded response body.
    ///
    /// A truthy `error` wins over everything else. Without one, `approval_url`
    /// must be a non-empty string; a body carrying neither is malformed rather
    /// than a success pointing nowhere.
    pub fn from_body(body: &Value) -> Result<Self> {
        if let Some(error) = body.get("error").filter(|v| is_truthy(v)) {
            let message = match error {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            return Ok(Self::Rejected(message));
        }

        let approval_url = match body.get("approval_url") {
            Some(Value::String(url)) => ApprovalUrl::new(url.as_str()),
            _ => None,
        }
        .ok_or_else(|| {
            CheckoutError::MalformedResponse(
                "response has neither an error nor an approval_url".to_string(),
            )
        })?;

        let payment_id = match body.get("payment_id") {
            Some(Value::String(id)) => Some(id.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };

        Ok(Self::Approved {
            approval_url,
            payment_id,
        })
    }
}

// Mirrors how the backend's JSON was judged by the browser client.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
