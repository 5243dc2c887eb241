//! CodeWhisperer runtime HTTP client
//!
//! Thin wrapper over `reqwest` that attaches the fixed probe headers to each
//! request and captures the response as plain values for the printer.

use crate::core::config::Config;
use crate::core::constants::header;
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Error types that can occur while probing an endpoint
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected status {status}")]
    UnexpectedStatus { status: u16 },

    #[error("Invalid JSON body: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

/// Build the headers sent with every probe request
///
/// # Errors
///
/// Returns `ProbeError::InvalidHeader` if the token or user agent contains
/// characters not allowed in a header value.
pub fn build_headers(access_token: &str, user_agent: &str) -> Result<HeaderMap, ProbeError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", access_token))?,
    );
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static(header::APPLICATION_JSON),
    );
    headers.insert(ACCEPT, HeaderValue::from_static(header::APPLICATION_JSON));
    headers.insert(USER_AGENT, HeaderValue::from_str(user_agent)?);
    headers.insert(
        header::OPTOUT_PREFERENCE,
        HeaderValue::from_static(header::OPTIN),
    );
    Ok(headers)
}

/// A response captured for printing
#[derive(Debug, Clone, Default)]
pub struct ProbeResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl ProbeResponse {
    /// Drain a `reqwest` response into owned values
    pub async fn from_reqwest(response: reqwest::Response) -> Result<Self, ProbeError> {
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.text().await?;

        Ok(Self {
            status,
            headers,
            body,
        })
    }

    /// Parse the body as JSON, only for HTTP 200
    pub fn json(&self) -> Result<Value, ProbeError> {
        if self.status != 200 {
            return Err(ProbeError::UnexpectedStatus {
                status: self.status,
            });
        }
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// HTTP client bound to one configuration
pub struct KiroClient {
    client: Client,
    config: Config,
    headers: HeaderMap,
}

impl KiroClient {
    /// Create a new client
    ///
    /// No timeout is set beyond the `reqwest` defaults.
    ///
    /// # Errors
    ///
    /// Fails if the headers cannot be built or the TLS backend cannot be
    /// initialized.
    pub fn new(config: Config) -> Result<Self, ProbeError> {
        let headers = build_headers(&config.access_token, &config.user_agent)?;
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            config,
            headers,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Send a GET request with query parameters
    pub async fn get<Q>(&self, path: &str, query: &Q) -> Result<ProbeResponse, ProbeError>
    where
        Q: Serialize + ?Sized,
    {
        let url = self.config.endpoint_url(path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .headers(self.headers.clone())
            .query(query)
            .send()
            .await?;

        debug!("GET {} -> {}", url, response.status());
        ProbeResponse::from_reqwest(response).await
    }

    /// Send a POST request with a JSON body
    pub async fn post<B>(&self, path: &str, body: &B) -> Result<ProbeResponse, ProbeError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.config.endpoint_url(path);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .headers(self.headers.clone())
            .json(body)
            .send()
            .await?;

        debug!("POST {} -> {}", url, response.status());
        ProbeResponse::from_reqwest(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::TokenSource;

    #[test]
    fn test_build_headers_has_fixed_keys() {
        let headers = build_headers("abc", "Kiro/1.0").unwrap();
        assert_eq!(headers.len(), 5);
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer abc");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        assert_eq!(headers.get(USER_AGENT).unwrap(), "Kiro/1.0");
        assert_eq!(
            headers
                .get("x-amzn-codewhisperer-optout-preference")
                .unwrap(),
            "OPTIN"
        );
    }

    #[test]
    fn test_build_headers_rejects_control_characters() {
        let result = build_headers("abc\ndef", "Kiro/1.0");
        assert!(matches!(result, Err(ProbeError::InvalidHeader(_))));
    }

    #[test]
    fn test_json_requires_200() {
        let response = ProbeResponse {
            status: 404,
            headers: Vec::new(),
            body: r#"{"message":"missing"}"#.to_string(),
        };
        assert!(matches!(
            response.json(),
            Err(ProbeError::UnexpectedStatus { status: 404 })
        ));
    }

    #[test]
    fn test_json_rejects_malformed_body() {
        let response = ProbeResponse {
            status: 200,
            headers: Vec::new(),
            body: "<html>".to_string(),
        };
        assert!(matches!(response.json(), Err(ProbeError::InvalidJson(_))));
    }

    #[tokio::test]
    async fn test_requests_carry_headers() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/GetProfile")
            .match_header("authorization", "Bearer abc")
            .match_header("accept", "application/json")
            .match_header("content-type", "application/json")
            .match_header("user-agent", "Kiro/1.0")
            .match_header("x-amzn-codewhisperer-optout-preference", "OPTIN")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_header("x-amzn-requestid", "req-1")
            .with_body(r#"{"profile":{}}"#)
            .create_async()
            .await;

        let config =
            Config::new("abc".to_string(), TokenSource::Argument).with_base_url(server.url());
        let client = KiroClient::new(config).unwrap();
        let response = client
            .post("/GetProfile", &serde_json::json!({}))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.status, 200);
        assert!(
            response
                .headers
                .iter()
                .any(|(name, value)| name == "x-amzn-requestid" && value == "req-1")
        );
        assert_eq!(response.json().unwrap()["profile"], serde_json::json!({}));
    }
}
