mod generate;
mod guard;

/// Identifies a single request in the logs. Never consumed by the request handlers themselves.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestId(String);

/// Inbound header that carries an upstream request id.
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Upper bound on the characters kept from an inbound request id.
const MAX_INBOUND_LENGTH: usize = 64;

impl RequestId {
    /// Accepts an inbound id, or `None` if it is blank.
    pub fn from_header(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        Some(Self(value.chars().take(MAX_INBOUND_LENGTH).collect()))
    }

    pub fn inner(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner())
    }
}
