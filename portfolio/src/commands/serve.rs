use portfolio_config::{Config, API_KEY_ENV};
use portfolio_di::Provide;
use tracing::{info, warn};

use crate::environment::{types::RestServer, Provider};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    if config.email.api_key.is_none() {
        warn!(
            "No Resend API key configured. Set {API_KEY_ENV} or email.api_key, otherwise every \
             contact message will fail."
        );
    }
    if let Some(endpoint) = &config.email.endpoint_override {
        info!(%endpoint, "Using custom Resend endpoint");
    }

    let mut provider = Provider::new(&config)?;
    let server: RestServer = provider.provide();
    server.serve(config.http.host, config.http.port).await
}
