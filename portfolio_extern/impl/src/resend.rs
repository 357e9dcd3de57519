use std::{sync::Arc, time::Duration};

use anyhow::Context;
use portfolio_di::Build;
use portfolio_extern_contracts::resend::{
    ResendApiService, ResendEmailBody, ResendSendEmailRequest, ResendSendEmailResponse,
};
use portfolio_models::Sensitive;
use serde::{Deserialize, Serialize};
use tracing::trace;
use url::Url;

use crate::http::{as_directory, HttpClient};

/// https://resend.com/docs/api-reference/emails/send-email
const RESEND_ENDPOINT: &str = "https://api.resend.com/";

#[derive(Debug, Clone, Build)]
pub struct ResendApiServiceImpl {
    config: ResendApiServiceConfig,
    #[state]
    http: HttpClient,
}

#[derive(Debug, Clone)]
pub struct ResendApiServiceConfig {
    endpoint: Arc<Url>,
    api_key: Option<Sensitive<Arc<str>>>,
    timeout: Duration,
}

impl ResendApiServiceConfig {
    /// A missing `api_key` is not an error here. Every request will fail
    /// instead.
    pub fn new(endpoint_override: Option<Url>, api_key: Option<String>, timeout: Duration) -> Self {
        Self {
            endpoint: as_directory(
                endpoint_override
                    .unwrap_or_else(|| Url::parse(RESEND_ENDPOINT).expect("valid resend endpoint")),
            )
            .into(),
            api_key: api_key.map(|key| Sensitive(key.into())),
            timeout,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl ResendApiService for ResendApiServiceImpl {
    async fn send_email(
        &self,
        request: ResendSendEmailRequest,
    ) -> anyhow::Result<ResendSendEmailResponse> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .context("No Resend API key configured")?;

        let url = self
            .config
            .endpoint
            .join("emails")
            .context("Failed to build resend emails URL")?;

        trace!(%url, to = ?request.to, "send resend email");

        let response = self
            .http
            .post(url)
            .bearer_auth(&***api_key)
            .timeout(self.config.timeout)
            .json(&SendEmailRequest::from(&request))
            .send()
            .await
            .context("Failed to send resend emails request")?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .map(|x| x.message)
                .unwrap_or_else(|err| format!("Unreadable error response: {err}"));
            return Ok(ResendSendEmailResponse::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<SendEmailResponse>()
            .await
            .map(|x| ResendSendEmailResponse::Accepted { id: x.id })
            .context("Failed to deserialize resend emails response")
    }
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a [String],
    subject: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    html: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
}

impl<'a> From<&'a ResendSendEmailRequest> for SendEmailRequest<'a> {
    fn from(value: &'a ResendSendEmailRequest) -> Self {
        let (html, text) = match &value.body {
            ResendEmailBody::Html(body) => (Some(body.as_str()), None),
            ResendEmailBody::Text(body) => (None, Some(body.as_str())),
        };
        Self {
            from: &value.from,
            to: &value.to,
            subject: &value.subject,
            reply_to: value.reply_to.as_deref(),
            html,
            text,
        }
    }
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    message: String,
}
