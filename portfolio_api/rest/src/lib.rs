use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use anyhow::Context;
use axum::{http::HeaderValue, Router};
use portfolio_core_contact_contracts::ContactFeatureService;
use portfolio_di::Build;
use portfolio_utils::Apply;
use tokio::net::TcpListener;
use tracing::info;

mod middlewares;
mod models;
mod routes;

pub use routes::contact::CONTACT_ROUTE;

#[derive(Debug, Clone, Build)]
pub struct RestServer<Contact> {
    config: RestServerConfig,
    contact: Contact,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    /// Origins allowed to call the api from a browser. Cors is disabled if
    /// this is empty.
    allowed_origins: Arc<[HeaderValue]>,
}

impl RestServerConfig {
    pub fn new(allowed_origins: &[String]) -> anyhow::Result<Self> {
        let allowed_origins = allowed_origins
            .iter()
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .with_context(|| format!("Invalid allowed origin: {origin:?}"))
            })
            .collect::<anyhow::Result<_>>()?;

        Ok(Self { allowed_origins })
    }
}

impl<Contact> RestServer<Contact>
where
    Contact: ContactFeatureService,
{
    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let listener = TcpListener::bind((host, port))
            .await
            .with_context(|| format!("Failed to bind to {host}:{port}"))?;
        info!("Starting http server on {host}:{port}");
        self.serve_listener(listener).await
    }

    /// Serves the api on an already bound listener until the process exits.
    pub async fn serve_listener(self, listener: TcpListener) -> anyhow::Result<()> {
        let service = self
            .router()
            .into_make_service_with_connect_info::<SocketAddr>();
        axum::serve(listener, service)
            .await
            .context("Failed to start http server")
    }

    fn router(self) -> Router<()> {
        let allowed_origins = Some(self.config.allowed_origins).filter(|x| !x.is_empty());

        // The last layer added runs first.
        let router = Router::new().merge(routes::contact::router(self.contact.into()));
        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        let router = middlewares::request_id::add(router);
        router.apply_map(allowed_origins, middlewares::cors::add)
    }
}
