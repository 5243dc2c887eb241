//! Probe configuration
//!
//! The credential and target host are collected once at startup and passed
//! explicitly to the client.

use crate::core::constants::{DEFAULT_BASE_URL, USER_AGENT};

/// Access token compiled into the binary
///
/// Leave empty to require the token as the first command-line argument.
pub const DEFAULT_ACCESS_TOKEN: &str = "";

/// Default log level
const DEFAULT_LOG_LEVEL: &str = "info";

/// Where the access token came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Constant,
    Argument,
}

/// Runtime configuration for the probe run
#[derive(Debug, Clone)]
pub struct Config {
    /// API base URL, without a trailing slash
    pub base_url: String,

    /// Bearer token sent with every request
    pub access_token: String,

    /// Where `access_token` was taken from
    pub token_source: TokenSource,

    /// User-Agent header value
    pub user_agent: String,

    /// Logging level
    pub log_level: String,
}

impl Config {
    /// Build a configuration from the command-line arguments
    ///
    /// `args` must not include the program name. Returns `None` when neither
    /// the compiled-in constant nor the first argument supplies a token.
    pub fn from_args<I>(args: I) -> Option<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let (access_token, token_source) = resolve_access_token(DEFAULT_ACCESS_TOKEN, args)?;
        Some(Self::new(access_token, token_source))
    }

    /// Create a configuration for the default host
    pub fn new(access_token: String, token_source: TokenSource) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token,
            token_source,
            user_agent: USER_AGENT.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }

    /// Point the configuration at another host
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Full URL for an endpoint path
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Pick the access token: the constant wins, then the first argument
///
/// Empty strings count as missing.
pub fn resolve_access_token<I>(constant: &str, args: I) -> Option<(String, TokenSource)>
where
    I: IntoIterator<Item = String>,
{
    if !constant.is_empty() {
        return Some((constant.to_string(), TokenSource::Constant));
    }

    args.into_iter()
        .next()
        .filter(|token| !token.is_empty())
        .map(|token| (token, TokenSource::Argument))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_no_token_anywhere() {
        assert!(resolve_access_token("", args(&[])).is_none());
        assert!(Config::from_args(args(&[])).is_none());
    }

    #[test]
    fn test_empty_argument_is_missing() {
        assert!(resolve_access_token("", args(&[""])).is_none());
    }

    #[test]
    fn test_argument_token() {
        let (token, source) = resolve_access_token("", args(&["abc", "ignored"])).unwrap();
        assert_eq!(token, "abc");
        assert_eq!(source, TokenSource::Argument);
    }

    #[test]
    fn test_constant_wins_over_argument() {
        let (token, source) = resolve_access_token("baked", args(&["abc"])).unwrap();
        assert_eq!(token, "baked");
        assert_eq!(source, TokenSource::Constant);
    }

    #[test]
    fn test_endpoint_url() {
        let config = Config::new("abc".to_string(), TokenSource::Argument)
            .with_base_url("http://127.0.0.1:1234/");
        assert_eq!(
            config.endpoint_url("/GetProfile"),
            "http://127.0.0.1:1234/GetProfile"
        );
        assert_eq!(
            Config::new("abc".to_string(), TokenSource::Argument).endpoint_url("/GetProfile"),
            "https://codewhisperer.us-east-1.amazonaws.com/GetProfile"
        );
    }
}
