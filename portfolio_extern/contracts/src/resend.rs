use std::future::Future;

/// Client for the Resend email API.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ResendApiService: Send + Sync + 'static {
    /// Hands an email over to Resend for delivery.
    ///
    /// A response that Resend answered with a non-success status is returned
    /// as [`ResendSendEmailResponse::Rejected`], transport failures as `Err`.
    fn send_email(
        &self,
        request: ResendSendEmailRequest,
    ) -> impl Future<Output = anyhow::Result<ResendSendEmailResponse>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResendSendEmailRequest {
    /// `Name <address>` or a bare address
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub reply_to: Option<String>,
    pub body: ResendEmailBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResendEmailBody {
    Text(String),
    Html(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResendSendEmailResponse {
    Accepted { id: String },
    Rejected { status: u16, message: String },
}

#[cfg(feature = "mock")]
impl MockResendApiService {
    pub fn with_send_email(
        mut self,
        request: ResendSendEmailRequest,
        result: ResendSendEmailResponse,
    ) -> Self {
        self.expect_send_email()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_send_email_error(
        mut self,
        request: ResendSendEmailRequest,
        error: &'static str,
    ) -> Self {
        self.expect_send_email()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(move |_| Box::pin(std::future::ready(Err(anyhow::anyhow!(error)))));
        self
    }
}
