use serde::Serialize;
use std::fmt;

/// Opaque identifier of the ticket being paid for.
///
/// No format validation is applied: whatever the user typed is sent verbatim,
/// so `"0042"` stays a string on the wire. The only rule is that it is not empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TicketId(String);

impl TicketId {
    /// Returns `None` for empty input, which aborts the checkout flow.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Converts the answer of a prompt, where `None` means the user cancelled.
    pub fn from_answer(answer: Option<String>) -> Option<Self> {
        answer.and_then(Self::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
