mod response;

use crate::{
    config::Config,
    error::{Error, Result},
};
use reqwest::{
    header::{ACCEPT, AUTHORIZATION, USER_AGENT},
    Client, RequestBuilder,
};
use response::ResponseHandler;
use serde::{de::DeserializeOwned, Serialize};

const ACCEPT_JSON: &str = "application/json; indent=4";
const AGENT: &str = "ebrains-drive";

/// Authenticated client for a single Drive deployment.
///
/// Paths passed to [`HttpClient::get`] and [`HttpClient::post_form`] are
/// appended to the base URL as-is, so they start with `/`.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: String,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base_url: String = base_url.into();

        HttpClient {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            token: token.into(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let token = config.token.as_deref().unwrap_or_default();
        if token.is_empty() {
            return Err(Error::Config {
                message: "no API token configured".to_owned(),
            });
        }

        Ok(HttpClient::new(&config.base_url, token))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        log::debug!("GET {}", path);

        self.client
            .get(self.url(path))
            .default_headers(&self.token)
            .send()
            .await
            .handle()
            .await
    }

    pub async fn post_form<B, T>(&self, path: &str, form: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        log::debug!("POST {}", path);

        self.client
            .post(self.url(path))
            .default_headers(&self.token)
            .form(form)
            .send()
            .await
            .handle()
            .await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

pub trait Headers {
    fn default_headers(self, token: &str) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn default_headers(self, token: &str) -> RequestBuilder {
        self.header(AUTHORIZATION, format!("Token {}", token))
            .header(ACCEPT, ACCEPT_JSON)
            .header(USER_AGENT, AGENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Pong {
        pong: bool,
    }

    #[tokio::test]
    async fn get_sends_default_headers_and_parses_json() -> anyhow::Result<()> {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/api2/ping/")
            .match_header("authorization", "Token secret")
            .match_header("accept", ACCEPT_JSON)
            .match_header("user-agent", AGENT)
            .with_header("content-type", "application/json")
            .with_body(r#"{"pong": true}"#)
            .create_async()
            .await;

        let client = HttpClient::new(server.url(), "secret");
        let response: Pong = client.get("/api2/ping/").await?;

        mock.assert_async().await;
        assert_eq!(response, Pong { pong: true });

        Ok(())
    }

    #[tokio::test]
    async fn post_form_encodes_body() -> anyhow::Result<()> {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("POST", "/api2/ping/")
            .match_header("content-type", "application/x-www-form-urlencoded")
            .match_body(Matcher::UrlEncoded("name".into(), "my lib".into()))
            .with_body(r#"{"pong": false}"#)
            .create_async()
            .await;

        let client = HttpClient::new(server.url(), "secret");
        let response: Pong = client
            .post_form("/api2/ping/", &[("name", "my lib")])
            .await?;

        mock.assert_async().await;
        assert_eq!(response, Pong { pong: false });

        Ok(())
    }

    #[tokio::test]
    async fn non_success_status_becomes_response_error() {
        let mut server = Server::new_async().await;

        let _mock = server
            .mock("GET", "/api2/ping/")
            .with_status(403)
            .with_body("forbidden")
            .create_async()
            .await;

        let client = HttpClient::new(server.url(), "secret");
        let err = client.get::<Pong>("/api2/ping/").await.unwrap_err();

        assert_eq!(err.status(), Some(403));
        assert!(matches!(
            err,
            Error::Response { ref message, .. } if message == "forbidden"
        ));
    }

    #[tokio::test]
    async fn malformed_json_becomes_parse_error() {
        let mut server = Server::new_async().await;

        let _mock = server
            .mock("GET", "/api2/ping/")
            .with_body("not json")
            .create_async()
            .await;

        let client = HttpClient::new(server.url(), "secret");
        let err = client.get::<Pong>("/api2/ping/").await.unwrap_err();

        assert!(matches!(err, Error::ParseResponse { .. }));
    }

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let client = HttpClient::new("https://drive.example.org/", "t");

        assert_eq!(client.base_url(), "https://drive.example.org");
        assert_eq!(
            client.url("/api2/repos/"),
            "https://drive.example.org/api2/repos/"
        );
    }

    #[test]
    fn from_config_requires_token() {
        let config = Config::default();

        let err = HttpClient::from_config(&config).unwrap_err();

        assert!(matches!(err, Error::Config { .. }));
    }
}
