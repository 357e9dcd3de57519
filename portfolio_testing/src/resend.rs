//! Fake implementation of the Resend `POST /emails` endpoint.
//!
//! Requests must carry the configured API key as bearer token and are
//! validated roughly the way Resend does it. Accepted emails are kept in an
//! in-memory inbox.

use std::{
    net::{IpAddr, Ipv4Addr},
    sync::Arc,
};

use anyhow::Context;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use portfolio_models::email_address::{EmailAddress, EmailAddressWithName};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::Mutex};
use tracing::info;
use url::Url;
use uuid::Uuid;

pub const EMAILS_ROUTE: &str = "/emails";

/// An email accepted by the fake api.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReceivedEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    #[serde(default)]
    pub reply_to: Option<String>,
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FakeResend {
    api_key: Arc<str>,
    inbox: Arc<Mutex<Vec<ReceivedEmail>>>,
}

impl FakeResend {
    pub fn new(api_key: impl Into<Arc<str>>) -> Self {
        Self {
            api_key: api_key.into(),
            inbox: Default::default(),
        }
    }

    pub fn router(&self) -> Router<()> {
        Router::new()
            .route(EMAILS_ROUTE, routing::post(send_email))
            .with_state(self.clone())
    }

    /// All emails accepted so far, oldest first.
    pub async fn inbox(&self) -> Vec<ReceivedEmail> {
        self.inbox.lock().await.clone()
    }

    /// Serves the fake api on an ephemeral port on localhost and returns its
    /// base url. The server runs until the tokio runtime shuts down.
    pub async fn spawn(&self) -> anyhow::Result<Url> {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
            .await
            .context("Failed to bind fake resend server")?;
        let addr = listener.local_addr()?;
        let router = self.router();
        tokio::spawn(async move { axum::serve(listener, router).await });
        format!("http://{addr}/")
            .parse()
            .context("Failed to build fake resend url")
    }
}

pub async fn start_server(host: IpAddr, port: u16, api_key: String) -> anyhow::Result<()> {
    info!("Starting fake resend api on {host}:{port}");
    info!("Endpoint override: http://{host}:{port}/");
    info!("API key: {api_key:?}");

    let router = FakeResend::new(api_key).router();

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router)
        .await
        .context("Failed to start HTTP server")
}

async fn send_email(
    State(resend): State<FakeResend>,
    headers: HeaderMap,
    request: Result<Json<ReceivedEmail>, JsonRejection>,
) -> Response {
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|key| key == &*resend.api_key);
    if !authorized {
        return error(StatusCode::UNAUTHORIZED, "invalid_api_key", "API key is invalid");
    }

    let email = match request {
        Ok(Json(email)) => email,
        Err(rejection) => {
            return error(
                StatusCode::UNPROCESSABLE_ENTITY,
                "missing_required_field",
                &rejection.body_text(),
            )
        }
    };

    if let Err(message) = validate(&email) {
        return error(StatusCode::UNPROCESSABLE_ENTITY, "validation_error", &message);
    }

    let id = Uuid::new_v4();
    info!(%id, subject = %email.subject, "accepted email");
    resend.inbox.lock().await.push(email);

    Json(SendEmailResponse { id }).into_response()
}

fn validate(email: &ReceivedEmail) -> Result<(), String> {
    email
        .from
        .parse::<EmailAddressWithName>()
        .map_err(|_| format!("Invalid `from` field: {:?}", email.from))?;

    if email.to.is_empty() {
        return Err("Missing `to` field.".into());
    }
    for to in &email.to {
        to.parse::<EmailAddressWithName>()
            .map_err(|_| format!("Invalid `to` field: {to:?}"))?;
    }

    if let Some(reply_to) = &email.reply_to {
        reply_to
            .parse::<EmailAddress>()
            .map_err(|_| format!("Invalid `reply_to` field: {reply_to:?}"))?;
    }

    if email.html.is_none() && email.text.is_none() {
        return Err("Missing `html` or `text` field.".into());
    }

    Ok(())
}

fn error(status: StatusCode, name: &str, message: &str) -> Response {
    let body = ErrorResponse {
        status_code: status.as_u16(),
        name,
        message,
    };
    (status, Json(body)).into_response()
}

#[derive(Serialize)]
struct SendEmailResponse {
    id: Uuid,
}

#[derive(Serialize)]
struct ErrorResponse<'a> {
    #[serde(rename = "statusCode")]
    status_code: u16,
    name: &'a str,
    message: &'a str,
}
