//! HttpMailer - outbound email over HTTP POST.
//!
//! Talks to a transactional-email endpoint: JSON body in, a
//! `{"success": bool}`-shaped JSON answer out. Failures map to `MailerError`
//! and are never retried here; the scheduler logs and moves on.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::ports::{DigestEmail, MailerError, ReminderEmail, ReminderMailer};

pub struct HttpMailer {
    client: reqwest::Client,
    reminder_url: String,
    digest_url: String,
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    success: bool,
}

impl HttpMailer {
    pub fn new(reminder_url: impl Into<String>, digest_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            reminder_url: reminder_url.into(),
            digest_url: digest_url.into(),
        }
    }

    /// Convenience constructor using the conventional endpoint paths.
    pub fn for_base_url(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self::new(
            format!("{base}/api/send-reminder"),
            format!("{base}/api/send-daily-digest"),
        )
    }

    async fn post<B: Serialize>(&self, url: &str, body: &B) -> Result<(), MailerError> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|err| MailerError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MailerError::Status(status.as_u16()));
        }

        let parsed: SendResponse = response
            .json()
            .await
            .map_err(|err| MailerError::Transport(err.to_string()))?;
        if !parsed.success {
            return Err(MailerError::Rejected);
        }
        Ok(())
    }
}

#[async_trait]
impl ReminderMailer for HttpMailer {
    async fn send_reminder(&self, req: &ReminderEmail) -> Result<(), MailerError> {
        self.post(&self.reminder_url, req).await
    }

    async fn send_digest(&self, req: &DigestEmail) -> Result<(), MailerError> {
        self.post(&self.digest_url, req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_expands_to_the_conventional_endpoints() {
        let mailer = HttpMailer::for_base_url("https://todos.example.com/");
        assert_eq!(
            mailer.reminder_url,
            "https://todos.example.com/api/send-reminder"
        );
        assert_eq!(
            mailer.digest_url,
            "https://todos.example.com/api/send-daily-digest"
        );
    }
}
