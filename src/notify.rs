use thiserror::Error;

use crate::models::ContactMessage;

/// Forwards contact submissions to a configured webhook. Failures are the
/// caller's to report, never to propagate: a dead notifier must not lose a
/// stored message.
#[derive(Clone)]
pub struct Notifier {
    http: reqwest::Client,
    webhook_url: Option<String>,
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("no contact webhook configured")]
    Unconfigured,

    #[error("webhook request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("webhook returned {0}")]
    Status(reqwest::StatusCode),
}

impl Notifier {
    pub fn new(http: reqwest::Client, webhook_url: Option<String>) -> Self {
        Self { http, webhook_url }
    }

    pub async fn contact_submitted(&self, message: &ContactMessage) -> Result<(), NotifyError> {
        let url = self.webhook_url.as_deref().ok_or(NotifyError::Unconfigured)?;

        let response = self.http.post(url).json(message).send().await?;
        if !response.status().is_success() {
            return Err(NotifyError::Status(response.status()));
        }
        Ok(())
    }
}
