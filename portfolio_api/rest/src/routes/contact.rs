use std::sync::Arc;

use anyhow::Context;
use axum::{body::Bytes, extract::State, response::Response, routing, Router};
use portfolio_core_contact_contracts::{ContactFeatureService, ContactSendMessageError};
use tracing::error;

use super::{failure, internal_server_error, success};
use crate::models::contact::ApiSubmissionPayload;

pub const CONTACT_ROUTE: &str = "/api/contact";

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route(CONTACT_ROUTE, routing::post(send_message))
        .with_state(service)
}

async fn send_message(
    service: State<Arc<impl ContactFeatureService>>,
    body: Bytes,
) -> Response {
    // The content type is not checked, only the body has to be json.
    let payload = match serde_json::from_slice::<ApiSubmissionPayload>(&body)
        .context("invalid contact request body")
    {
        Ok(payload) => payload,
        Err(err) => return internal_server_error(err),
    };

    match service.send_message(payload.into()).await {
        Ok(()) => success(),
        Err(ContactSendMessageError::Send) => {
            error!("email provider did not accept the contact message");
            failure()
        }
        Err(ContactSendMessageError::Other(err)) => internal_server_error(err),
    }
}
