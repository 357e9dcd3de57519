use std::time::Duration;

use portfolio_api_rest::RestServerConfig;
use portfolio_config::Config;
use portfolio_core_contact_impl::ContactFeatureConfig;
use portfolio_di::provider;
use portfolio_email_impl::EmailServiceConfig;
use portfolio_extern_impl::{relay::RelayApiServiceConfig, resend::ResendApiServiceConfig};
use url::Url;

pub mod types;

provider! {
    /// Provides the relay endpoint and everything it depends on
    pub Provider {
        // API
        rest_server_config: RestServerConfig,

        // Extern
        resend_api_service_config: ResendApiServiceConfig,

        // Email
        email_service_config: EmailServiceConfig,

        // Core
        contact_feature_config: ContactFeatureConfig,
    }
}

impl Provider {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        // API
        let rest_server_config = RestServerConfig::new(&config.http.allowed_origins)?;

        // Extern
        let resend_api_service_config = ResendApiServiceConfig::new(
            config.email.endpoint_override.clone(),
            config.email.api_key.clone().map(|api_key| api_key.0),
            *config.email.timeout,
        );

        // Email
        let email_service_config = EmailServiceConfig {
            from: config.email.from.clone().into(),
        };

        // Core
        let contact_feature_config = ContactFeatureConfig {
            recipient: config.contact.recipient.clone().into(),
        };

        Ok(Self {
            _cache: Default::default(),
            rest_server_config,
            resend_api_service_config,
            email_service_config,
            contact_feature_config,
        })
    }
}

provider! {
    /// Provides the relay api client used by the terminal contact form
    pub ClientProvider {
        relay_api_service_config: RelayApiServiceConfig,
    }
}

impl ClientProvider {
    pub fn new(base_url: &Url, timeout: Duration) -> anyhow::Result<Self> {
        Ok(Self {
            _cache: Default::default(),
            relay_api_service_config: RelayApiServiceConfig::new(base_url, timeout)?,
        })
    }
}
