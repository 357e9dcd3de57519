use std::panic::AssertUnwindSafe;

use anyhow::anyhow;
use axum::{
    extract::Request,
    middleware::{from_fn, Next},
    response::Response,
    Router,
};
use futures::FutureExt;

use crate::routes::internal_server_error;

/// Turns a panicking handler into the regular failure response.
pub fn add<S: Clone + Send + Sync + 'static>(router: Router<S>) -> Router<S> {
    router.layer(from_fn(middleware))
}

async fn middleware(request: Request, next: Next) -> Response {
    match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response,
        Err(_) => internal_server_error(anyhow!("request handler panicked")),
    }
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use axum::routing;
    use portfolio_models::contact::RelayResponse;
    use pretty_assertions::assert_eq;
    use reqwest::StatusCode;
    use tokio::net::TcpListener;

    use super::*;

    #[tokio::test]
    async fn panic_becomes_failure() {
        // Arrange
        let router = add(Router::new().route(
            "/panic",
            routing::get(|| async { panic!("handler exploded") as () }),
        ));
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await });

        // Act
        let response = reqwest::get(format!("http://{addr}/panic")).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.json::<RelayResponse>().await.unwrap(),
            RelayResponse { success: false }
        );
    }
}
