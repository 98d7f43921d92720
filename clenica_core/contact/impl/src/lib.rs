use std::sync::Arc;

use anyhow::anyhow;
use clenica_core_contact_contracts::{ContactService, ContactSubmitError};
use clenica_email_contracts::EmailService;
use clenica_models::contact::ContactSubmission;
use tracing::error;

pub mod message;

#[derive(Debug, Clone)]
pub struct ContactServiceImpl<Email> {
    email: Email,
    config: ContactServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ContactServiceConfig {
    /// Operator mailbox that receives enquiry notifications.
    pub forward_to: Option<Arc<str>>,
}

impl<Email> ContactServiceImpl<Email> {
    pub fn new(email: Email, config: ContactServiceConfig) -> Self {
        Self { email, config }
    }
}

impl<EmailS> ContactService for ContactServiceImpl<EmailS>
where
    EmailS: EmailService,
{
    fn configured(&self) -> bool {
        self.config.forward_to.is_some() && self.email.available()
    }

    async fn submit(&self, submission: ContactSubmission) -> Result<(), ContactSubmitError> {
        let forward_to = match self.config.forward_to.as_deref() {
            Some(forward_to) if self.email.available() => forward_to,
            _ => return Err(ContactSubmitError::NotConfigured),
        };

        let submission = submission.normalize()?;

        let notification = message::operator_notification(&submission, forward_to);
        let acknowledgement = message::acknowledgement(&submission);

        // Both sends are always awaited; partial delivery is overall failure.
        let (notification_sent, acknowledgement_sent) = tokio::join!(
            self.email.send(notification),
            self.email.send(acknowledgement)
        );

        let mut failed = false;
        if let Err(err) = as_delivered(notification_sent) {
            error!("Failed to send operator notification: {err:#}");
            failed = true;
        }
        if let Err(err) = as_delivered(acknowledgement_sent) {
            error!("Failed to send acknowledgement: {err:#}");
            failed = true;
        }
        if failed {
            return Err(ContactSubmitError::Send);
        }

        Ok(())
    }
}

fn as_delivered(result: anyhow::Result<bool>) -> anyhow::Result<()> {
    result?
        .then_some(())
        .ok_or_else(|| anyhow!("provider rejected the message"))
}
