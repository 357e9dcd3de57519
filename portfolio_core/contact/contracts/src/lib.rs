use std::future::Future;

use portfolio_models::contact::SubmissionPayload;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Forwards a contact form submission to the site owner.
    ///
    /// The payload is not validated. Missing fields arrive as empty strings
    /// and are forwarded as such.
    fn send_message(
        &self,
        payload: SubmissionPayload,
    ) -> impl Future<Output = Result<(), ContactSendMessageError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSendMessageError {
    #[error("The email provider did not accept the message.")]
    Send,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_send_message(mut self, payload: SubmissionPayload, ok: bool) -> Self {
        self.expect_send_message()
            .once()
            .with(mockall::predicate::eq(payload))
            .return_once(move |_| {
                Box::pin(std::future::ready(if ok {
                    Ok(())
                } else {
                    Err(ContactSendMessageError::Send)
                }))
            });
        self
    }

    pub fn with_send_message_error(mut self, payload: SubmissionPayload) -> Self {
        self.expect_send_message()
            .once()
            .with(mockall::predicate::eq(payload))
            .return_once(|_| {
                Box::pin(std::future::ready(Err(ContactSendMessageError::Other(
                    anyhow::anyhow!("email provider unreachable"),
                ))))
            });
        self
    }
}
