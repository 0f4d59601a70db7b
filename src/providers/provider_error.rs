use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ProviderError {
    Config(String),
    Network(String),
    Status { code: u16, body: String },
    JsonParse(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Config(msg) => write!(f, "Provider not configured: {msg}"),
            ProviderError::Network(msg) => write!(f, "Network error: {msg}"),
            ProviderError::Status { code, body } => write!(f, "HTTP {code}: {body}"),
            ProviderError::JsonParse(msg) => write!(f, "JSON parse error: {msg}"),
        }
    }
}

impl Error for ProviderError {}
