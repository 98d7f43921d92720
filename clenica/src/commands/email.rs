use anyhow::ensure;
use clap::Subcommand;
use clenica_config::Config;
use clenica_email_contracts::{Email, EmailService};

use crate::mail;

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Test email deliverability
    Test { recipient: String },
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test { recipient } => test(config, recipient).await,
        }
    }
}

async fn test(config: Config, recipient: String) -> anyhow::Result<()> {
    let email_service = mail::client(&config.mail)?;
    ensure!(email_service.available(), "Email service not configured");

    let ok = email_service
        .send(Email {
            recipient,
            subject: "Email Deliverability Test".into(),
            reply_to: None,
            text: "Email deliverability seems to be working!".into(),
            html: "<p>Email deliverability seems to be working!</p>".into(),
        })
        .await?;

    ensure!(ok, "Failed to send email");

    Ok(())
}
