//! Client configuration

/// Connection settings for the entity store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Store base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Bearer token, when the store requires one
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout = timeout_secs;
        self
    }
}
