use std::env;

use reqwest::Url;

use crate::error::NotifierError;

pub const WEBHOOK_URL: &str = "SLACK_WEBHOOK_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Destination for outbound notifications.
    pub webhook_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, NotifierError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, NotifierError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let webhook_url = lookup(WEBHOOK_URL)
            .filter(|url| !url.trim().is_empty())
            .ok_or(NotifierError::MissingEnv { name: WEBHOOK_URL })?;
        let parsed = Url::parse(&webhook_url).map_err(|e| NotifierError::InvalidWebhookUrl {
            url: webhook_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(NotifierError::InvalidWebhookUrl {
                url: webhook_url,
                reason: format!("unsupported scheme {}", parsed.scheme()),
            });
        }
        Ok(Self { webhook_url })
    }
}
