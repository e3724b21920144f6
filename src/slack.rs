use chrono::{DateTime, Local};
use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::Serialize;
use tracing::{info, warn};

use crate::{error::NotifierError, transport::Transport};

pub const USERNAME: &str = "Test";
pub const INFO_PRETEXT: &str = ":white_check_mark: INFO :white_check_mark:";
pub const INFO_COLOR: &str = "#36C5F0";
pub const FOOTER_ICON: &str = "https://cdkworkshop.com/images/new-cdk-logo.png";
pub const FOOTER_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Serialize, Debug)]
pub struct SlackPayload<'a> {
    username: &'static str,
    attachments: Vec<Attachment<'a>>,
}

#[derive(Serialize, Debug)]
struct Attachment<'a> {
    pretext: &'static str,
    color: &'static str,
    text: &'a str,
    footer: String,
    footer_icon: &'static str,
}

impl<'a> SlackPayload<'a> {
    /// A single info-level attachment stamped with `now`.
    pub fn info(text: &'a str, now: DateTime<Local>) -> Self {
        Self {
            username: USERNAME,
            attachments: vec![Attachment {
                pretext: INFO_PRETEXT,
                color: INFO_COLOR,
                text,
                footer: now.format(FOOTER_TIME_FORMAT).to_string(),
                footer_icon: FOOTER_ICON,
            }],
        }
    }
}

pub struct SlackNotifier<T: Transport> {
    webhook_url: String,
    transport: T,
}

impl<T: Transport> SlackNotifier<T> {
    pub fn new(webhook_url: impl Into<String>, transport: T) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            transport,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Posts `message` once. The response status is logged but never treated as a failure.
    pub async fn notify(&self, message: &str) -> Result<(), NotifierError> {
        let payload = SlackPayload::info(message, Local::now());
        let mut headers = HeaderMap::new();
        headers.append(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        let status = self
            .transport
            .post(&self.webhook_url, serde_json::to_string(&payload)?, headers)
            .await?;
        if status.is_success() {
            info!(%status, "posted notification");
        } else {
            warn!(%status, "webhook answered with a non-success status");
        }
        Ok(())
    }
}
