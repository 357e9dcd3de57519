use std::{sync::Arc, time::Duration};

use anyhow::Context;
use portfolio_di::Build;
use portfolio_extern_contracts::relay::{RelayApiService, RelayReply};
use portfolio_models::contact::SubmissionPayload;
use tracing::trace;
use url::Url;

use crate::http::{as_directory, HttpClient};

/// Path of the contact endpoint relative to the site's base url.
const CONTACT_PATH: &str = "api/contact";

#[derive(Debug, Clone, Build)]
pub struct RelayApiServiceImpl {
    config: RelayApiServiceConfig,
    #[state]
    http: HttpClient,
}

#[derive(Debug, Clone)]
pub struct RelayApiServiceConfig {
    endpoint: Arc<Url>,
    timeout: Duration,
}

impl RelayApiServiceConfig {
    pub fn new(base_url: &Url, timeout: Duration) -> anyhow::Result<Self> {
        let endpoint = as_directory(base_url.clone())
            .join(CONTACT_PATH)
            .with_context(|| format!("Failed to build contact endpoint from {base_url}"))?;
        Ok(Self {
            endpoint: endpoint.into(),
            timeout,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl RelayApiService for RelayApiServiceImpl {
    async fn submit(&self, payload: SubmissionPayload) -> anyhow::Result<RelayReply> {
        trace!(url = %self.config.endpoint, "send contact request");

        let status = self
            .http
            .post((*self.config.endpoint).clone())
            .timeout(self.config.timeout)
            .json(&payload)
            .send()
            .await
            .context("Failed to send contact request")?
            .status();

        Ok(if status.is_success() {
            RelayReply::Accepted
        } else {
            RelayReply::Rejected {
                status: status.as_u16(),
            }
        })
    }
}
