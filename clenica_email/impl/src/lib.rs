use std::sync::LazyLock;

use anyhow::Context;
use clenica_email_contracts::{Email, EmailService};
use serde::Serialize;
use url::Url;

/// Transactional email endpoint of the provider (Resend).
const SEND_ENDPOINT: &str = "https://api.resend.com/emails";

static USER_AGENT: LazyLock<String> = LazyLock::new(|| {
    format!(
        "ClenicaCare Backend ({}, Version {})",
        env!("CARGO_PKG_HOMEPAGE"),
        env!("CARGO_PKG_VERSION")
    )
});

const _: () = {
    assert!(!env!("CARGO_PKG_HOMEPAGE").is_empty());
};

#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    mailer: Option<Mailer>,
}

#[derive(Debug, Clone)]
struct Mailer {
    client: reqwest::Client,
    endpoint: Url,
    api_key: String,
    from: String,
}

#[derive(Debug, Default)]
pub struct EmailServiceConfig {
    pub api_key: Option<String>,
    pub from: Option<String>,
    pub endpoint_override: Option<Url>,
}

impl EmailServiceImpl {
    /// Builds the delivery client. The client is unavailable unless both the
    /// API key and the sender identity are present.
    pub fn new(config: EmailServiceConfig) -> anyhow::Result<Self> {
        let EmailServiceConfig {
            api_key,
            from,
            endpoint_override,
        } = config;

        let mailer = match (api_key, from) {
            (Some(api_key), Some(from)) => {
                let client = reqwest::Client::builder()
                    .user_agent(&*USER_AGENT)
                    .build()?;
                let endpoint = match endpoint_override {
                    Some(endpoint) => endpoint,
                    None => SEND_ENDPOINT.parse()?,
                };
                Some(Mailer {
                    client,
                    endpoint,
                    api_key,
                    from,
                })
            }
            _ => None,
        };

        Ok(Self { mailer })
    }
}

impl EmailService for EmailServiceImpl {
    fn available(&self) -> bool {
        self.mailer.is_some()
    }

    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        let mailer = self
            .mailer
            .as_ref()
            .context("email provider is not configured")?;

        let request = SendRequest {
            from: &mailer.from,
            to: [&email.recipient],
            reply_to: email.reply_to.as_deref().unwrap_or(&mailer.from),
            subject: &email.subject,
            text: &email.text,
            html: &email.html,
        };

        let response = mailer
            .client
            .post(mailer.endpoint.clone())
            .bearer_auth(&mailer.api_key)
            .json(&request)
            .send()
            .await?;

        Ok(response.status().is_success())
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    reply_to: &'a str,
    subject: &'a str,
    text: &'a str,
    html: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email() -> Email {
        Email {
            recipient: "jane@example.com".into(),
            subject: "Test".into(),
            reply_to: None,
            text: "Hello".into(),
            html: "<p>Hello</p>".into(),
        }
    }

    #[test]
    fn available_only_with_key_and_sender() {
        let complete = EmailServiceImpl::new(EmailServiceConfig {
            api_key: Some("re_test".into()),
            from: Some("ClenicaCare <noreply@clenicacare.com>".into()),
            endpoint_override: None,
        })
        .unwrap();
        assert!(complete.available());

        let missing_key = EmailServiceImpl::new(EmailServiceConfig {
            api_key: None,
            from: Some("noreply@clenicacare.com".into()),
            endpoint_override: None,
        })
        .unwrap();
        assert!(!missing_key.available());

        let missing_sender = EmailServiceImpl::new(EmailServiceConfig {
            api_key: Some("re_test".into()),
            from: None,
            endpoint_override: None,
        })
        .unwrap();
        assert!(!missing_sender.available());
    }

    #[tokio::test]
    async fn send_fails_when_unavailable() {
        let sut = EmailServiceImpl::new(EmailServiceConfig::default()).unwrap();

        let result = sut.send(email()).await;

        assert!(result.is_err());
    }
}
