use std::future::Future;

use portfolio_models::contact::SubmissionPayload;

/// Client side of the contact relay endpoint.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait RelayApiService: Send + Sync + 'static {
    /// Posts a submission to the relay endpoint.
    ///
    /// Only the HTTP status of the answer is taken into account. Transport
    /// failures and timeouts are returned as `Err`.
    fn submit(
        &self,
        payload: SubmissionPayload,
    ) -> impl Future<Output = anyhow::Result<RelayReply>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayReply {
    Accepted,
    Rejected { status: u16 },
}

#[cfg(feature = "mock")]
impl MockRelayApiService {
    pub fn with_submit(mut self, payload: SubmissionPayload, result: RelayReply) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(payload))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_submit_error(mut self, payload: SubmissionPayload, error: &'static str) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(payload))
            .return_once(move |_| Box::pin(std::future::ready(Err(anyhow::anyhow!(error)))));
        self
    }
}
