use std::sync::Arc;

use portfolio_di::Build;
use portfolio_email_contracts::{ContentType, Email, EmailService};
use portfolio_extern_contracts::resend::{
    ResendApiService, ResendEmailBody, ResendSendEmailRequest, ResendSendEmailResponse,
};
use portfolio_models::email_address::EmailAddressWithName;
use portfolio_utils::Apply;
use tracing::{debug, error};

#[derive(Debug, Clone, Build)]
pub struct EmailServiceImpl<ResendApi> {
    resend: ResendApi,
    config: EmailServiceConfig,
}

#[derive(Debug, Clone)]
pub struct EmailServiceConfig {
    pub from: Arc<EmailAddressWithName>,
}

impl<ResendApi> EmailService for EmailServiceImpl<ResendApi>
where
    ResendApi: ResendApiService,
{
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        let from = (*self.config.from)
            .clone()
            .apply_map(email.sender_name, |from, name| from.renamed(name));

        let request = ResendSendEmailRequest {
            from: from.to_string(),
            to: vec![email.recipient.to_string()],
            subject: email.subject,
            reply_to: email.reply_to,
            body: match email.content_type {
                ContentType::Text => ResendEmailBody::Text(email.body),
                ContentType::Html => ResendEmailBody::Html(email.body),
            },
        };

        match self.resend.send_email(request).await? {
            ResendSendEmailResponse::Accepted { id } => {
                debug!(%id, "email accepted by resend");
                Ok(true)
            }
            ResendSendEmailResponse::Rejected { status, message } => {
                error!(status, %message, "email rejected by resend");
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use portfolio_demo::contact::{RECIPIENT, SENDER};
    use portfolio_extern_contracts::resend::MockResendApiService;
    use portfolio_utils::assert_matches;
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn accepted() {
        // Arrange
        let resend = MockResendApiService::new().with_send_email(
            request("Jane Doe <onboarding@resend.dev>"),
            ResendSendEmailResponse::Accepted { id: "42".into() },
        );

        let sut = make_sut(resend);

        // Act
        let result = sut.send(email(Some("Jane Doe"))).await;

        // Assert
        assert!(result.unwrap());
    }

    #[tokio::test]
    async fn configured_sender_name() {
        // Arrange
        let resend = MockResendApiService::new().with_send_email(
            request("Contact Form <onboarding@resend.dev>"),
            ResendSendEmailResponse::Accepted { id: "42".into() },
        );

        let sut = make_sut(resend);

        // Act
        let result = sut.send(email(None)).await;

        // Assert
        assert!(result.unwrap());
    }

    #[tokio::test]
    async fn text_body() {
        // Arrange
        let resend = MockResendApiService::new().with_send_email(
            ResendSendEmailRequest {
                body: ResendEmailBody::Text("Hello".into()),
                ..request("Jane Doe <onboarding@resend.dev>")
            },
            ResendSendEmailResponse::Accepted { id: "42".into() },
        );

        let sut = make_sut(resend);

        // Act
        let result = sut
            .send(Email {
                body: "Hello".into(),
                content_type: ContentType::Text,
                ..email(Some("Jane Doe"))
            })
            .await;

        // Assert
        assert!(result.unwrap());
    }

    #[tokio::test]
    async fn rejected() {
        // Arrange
        let resend = MockResendApiService::new().with_send_email(
            request("Jane Doe <onboarding@resend.dev>"),
            ResendSendEmailResponse::Rejected {
                status: 401,
                message: "API key is invalid".into(),
            },
        );

        let sut = make_sut(resend);

        // Act
        let result = sut.send(email(Some("Jane Doe"))).await;

        // Assert
        assert!(!result.unwrap());
    }

    #[tokio::test]
    async fn unreachable() {
        // Arrange
        let resend = MockResendApiService::new()
            .with_send_email_error(request("Jane Doe <onboarding@resend.dev>"), "timeout");

        let sut = make_sut(resend);

        // Act
        let result = sut.send(email(Some("Jane Doe"))).await;

        // Assert
        assert_matches!(result, Err(_));
    }

    fn make_sut(resend: MockResendApiService) -> EmailServiceImpl<MockResendApiService> {
        EmailServiceImpl {
            resend,
            config: EmailServiceConfig {
                from: Arc::new(SENDER.clone()),
            },
        }
    }

    fn email(sender_name: Option<&str>) -> Email {
        Email {
            sender_name: sender_name.map(Into::into),
            recipient: RECIPIENT.clone(),
            subject: "New Contact Form Submission from Jane Doe".into(),
            body: "<p>Hello</p>".into(),
            content_type: ContentType::Html,
            reply_to: Some("jane@example.com".into()),
        }
    }

    fn request(from: &str) -> ResendSendEmailRequest {
        ResendSendEmailRequest {
            from: from.into(),
            to: vec!["owner@example.com".into()],
            subject: "New Contact Form Submission from Jane Doe".into(),
            reply_to: Some("jane@example.com".into()),
            body: ResendEmailBody::Html("<p>Hello</p>".into()),
        }
    }
}
