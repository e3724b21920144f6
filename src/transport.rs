use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;

use crate::error::NotifierError;

/// Outbound HTTP capability used by the notifier.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(
        &self,
        url: &str,
        body: String,
        headers: HeaderMap,
    ) -> Result<StatusCode, NotifierError>;
}

pub struct ReqwestTransport {
    reqwest_client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::new_with_client(reqwest::Client::new())
    }

    pub fn new_with_client(reqwest_client: reqwest::Client) -> Self {
        Self { reqwest_client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post(
        &self,
        url: &str,
        body: String,
        headers: HeaderMap,
    ) -> Result<StatusCode, NotifierError> {
        let response = self
            .reqwest_client
            .post(url)
            .headers(headers)
            .body(body)
            .send()
            .await?;
        Ok(response.status())
    }
}
