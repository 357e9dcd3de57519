use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use portfolio_models::contact::RelayResponse;

pub mod contact;

pub fn success() -> Response {
    (StatusCode::OK, Json(RelayResponse { success: true })).into_response()
}

pub fn failure() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(RelayResponse { success: false }),
    )
        .into_response()
}

/// Logs `err` with its full chain of causes and responds with [`failure`].
pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    failure()
}
