use anyhow::ensure;
use clap::Subcommand;
use portfolio_config::Config;
use portfolio_di::Provide;
use portfolio_email_contracts::{ContentType, Email, EmailService};
use portfolio_models::email_address::EmailAddressWithName;
use tracing::info;

use crate::environment::{types::EmailApi, Provider};

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Send a test email through the configured provider
    Test { recipient: EmailAddressWithName },
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test { recipient } => test(config, recipient).await,
        }
    }
}

async fn test(config: Config, recipient: EmailAddressWithName) -> anyhow::Result<()> {
    let mut provider = Provider::new(&config)?;
    let email_service: EmailApi = provider.provide();

    let ok = email_service
        .send(Email {
            sender_name: None,
            recipient,
            subject: "Email Deliverability Test".into(),
            body: "Email deliverability seems to be working!".into(),
            content_type: ContentType::Text,
            reply_to: None,
        })
        .await?;

    ensure!(ok, "Failed to send email");
    info!("Test email sent");

    Ok(())
}
