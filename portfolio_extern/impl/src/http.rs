use std::{ops::Deref, sync::LazyLock};

use portfolio_utils::portfolio_version;
use url::Url;

pub static USER_AGENT: LazyLock<String> =
    LazyLock::new(|| format!("portfolio-contact-relay/{}", portfolio_version()));

/// Shared `reqwest` client identifying itself with [`USER_AGENT`].
#[derive(Debug, Clone)]
pub struct HttpClient(reqwest::Client);

impl Deref for HttpClient {
    type Target = reqwest::Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self(
            reqwest::Client::builder()
                .user_agent(&*USER_AGENT)
                .build()
                .expect("failed to initialize the http client"),
        )
    }
}

/// Appends a trailing slash to the path of `url` so relative joins extend it
/// instead of replacing its last segment.
pub fn as_directory(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_directory_keeps_last_segment() {
        let url = as_directory("http://localhost/v1".parse().unwrap());
        assert_eq!(url.as_str(), "http://localhost/v1/");
        assert_eq!(url.join("emails").unwrap().as_str(), "http://localhost/v1/emails");
    }

    #[test]
    fn as_directory_is_idempotent() {
        let url = as_directory("http://localhost/v1/".parse().unwrap());
        assert_eq!(url.as_str(), "http://localhost/v1/");

        let url = as_directory("http://localhost".parse().unwrap());
        assert_eq!(url.as_str(), "http://localhost/");
    }
}
