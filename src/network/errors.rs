use thiserror::Error;

// * Unified Error type for the Network Layer.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Malformed JSON body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl NetworkError {
    /// Short reason suitable for a chat reply.
    pub fn user_reason(&self) -> String {
        match self {
            NetworkError::Status(code) => format!("HTTP {}", code),
            NetworkError::Reqwest(e) if e.is_timeout() => "request timed out".to_string(),
            NetworkError::Reqwest(e) if e.is_connect() => "could not connect".to_string(),
            NetworkError::Reqwest(e) => match e.status() {
                Some(status) => format!("HTTP {}", status.as_u16()),
                None => "network error".to_string(),
            },
            NetworkError::InvalidUrl(_) => "invalid upstream URL".to_string(),
            NetworkError::Decode(_) => "unreadable response".to_string(),
        }
    }

    /// Metrics label for the failure class.
    pub fn outcome_label(&self) -> &'static str {
        match self {
            NetworkError::Status(_) => "status",
            NetworkError::Reqwest(e) if e.is_timeout() => "timeout",
            NetworkError::Reqwest(_) => "transport",
            NetworkError::InvalidUrl(_) => "invalid_url",
            NetworkError::Decode(_) => "decode",
        }
    }
}
