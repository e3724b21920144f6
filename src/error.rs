use thiserror::Error;

/// A required key was absent from the inbound event.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("missing required field `{key}`")]
pub struct MissingFieldError {
    pub key: String,
}

impl MissingFieldError {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

#[derive(Debug, Error)]
pub enum NotifierError {
    #[error(transparent)]
    MissingField(#[from] MissingFieldError),
    #[error("environment variable {name} is not set")]
    MissingEnv { name: &'static str },
    #[error("invalid webhook url {url:?}: {reason}")]
    InvalidWebhookUrl { url: String, reason: String },
    #[error("failed to serialize payload: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to post notification: {0}")]
    Transport(#[from] reqwest::Error),
}
