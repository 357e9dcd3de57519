use std::sync::Arc;

use portfolio_core_contact_contracts::{ContactFeatureService, ContactSendMessageError};
use portfolio_di::Build;
use portfolio_email_contracts::{ContentType, Email, EmailService};
use portfolio_models::{contact::SubmissionPayload, email_address::EmailAddressWithName};
use portfolio_templates_contracts::{ContactMessageTemplate, TemplateService};
use tracing::trace;

#[derive(Debug, Clone, Build)]
pub struct ContactFeatureServiceImpl<Email, Template> {
    email: Email,
    template: Template,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    pub recipient: Arc<EmailAddressWithName>,
}

impl<EmailS, Template> ContactFeatureService for ContactFeatureServiceImpl<EmailS, Template>
where
    EmailS: EmailService,
    Template: TemplateService,
{
    async fn send_message(&self, payload: SubmissionPayload) -> Result<(), ContactSendMessageError> {
        let subject = format!("New Contact Form Submission from {}", payload.name);
        let sender_name = (!payload.name.trim().is_empty()).then(|| payload.name.clone());
        let reply_to = Some(payload.email.clone());

        let body = self.template.render(&ContactMessageTemplate {
            name: payload.name,
            email: payload.email,
            message: payload.message,
        })?;

        let email = Email {
            sender_name,
            recipient: (*self.config.recipient).clone(),
            subject,
            body,
            content_type: ContentType::Html,
            reply_to,
        };

        trace!(recipient = %email.recipient, "forward contact message");
        if !self.email.send(email).await? {
            return Err(ContactSendMessageError::Send);
        }

        Ok(())
    }
}
