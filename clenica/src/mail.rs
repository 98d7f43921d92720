use clenica_config::MailConfig;
use clenica_email_impl::{EmailServiceConfig, EmailServiceImpl};

/// Builds the delivery client from the mail settings. The client is
/// unavailable (but valid) while settings are missing.
pub fn client(config: &MailConfig) -> anyhow::Result<EmailServiceImpl> {
    EmailServiceImpl::new(EmailServiceConfig {
        api_key: config.api_key.clone(),
        from: config.from.clone(),
        endpoint_override: config.endpoint_override.clone(),
    })
}
