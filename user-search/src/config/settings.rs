//! Client settings resolved from the environment.

use std::env;
use std::fmt;

use crate::DemoError;

/// Default OpenSearch URL.
pub const DEFAULT_OPENSEARCH_URL: &str = "http://localhost:9200";

/// Credentials for HTTP basic auth.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// How to reach the search engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    /// The engine endpoint.
    pub url: String,
    /// Optional basic-auth credentials.
    pub auth: Option<BasicAuth>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_OPENSEARCH_URL.to_string(),
            auth: None,
        }
    }
}

impl ClientSettings {
    /// Resolve settings from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `OPENSEARCH_URL`: OpenSearch server URL (default: http://localhost:9200)
    /// - `OPENSEARCH_USERNAME`, `OPENSEARCH_PASSWORD`: basic-auth credentials,
    ///   both or neither
    pub fn from_env() -> Result<Self, DemoError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DemoError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let url = non_empty("OPENSEARCH_URL")
            .unwrap_or_else(|| DEFAULT_OPENSEARCH_URL.to_string());

        let username = non_empty("OPENSEARCH_USERNAME");
        let password = non_empty("OPENSEARCH_PASSWORD");
        let auth = match (username, password) {
            (Some(username), Some(password)) => Some(BasicAuth { username, password }),
            (None, None) => None,
            (Some(_), None) => {
                return Err(DemoError::config(
                    "OPENSEARCH_USERNAME is set but OPENSEARCH_PASSWORD is not",
                ))
            }
            (None, Some(_)) => {
                return Err(DemoError::config(
                    "OPENSEARCH_PASSWORD is set but OPENSEARCH_USERNAME is not",
                ))
            }
        };

        Ok(Self { url, auth })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = ClientSettings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, ClientSettings::default());
        assert_eq!(settings.url, "http://localhost:9200");
    }

    #[test]
    fn test_url_and_auth() {
        let settings = ClientSettings::from_lookup(lookup(&[
            ("OPENSEARCH_URL", "https://search.internal:9200"),
            ("OPENSEARCH_USERNAME", "admin"),
            ("OPENSEARCH_PASSWORD", "secret"),
        ]))
        .unwrap();

        assert_eq!(settings.url, "https://search.internal:9200");
        let auth = settings.auth.unwrap();
        assert_eq!(auth.username, "admin");
        assert!(!format!("{:?}", auth).contains("secret"));
    }

    #[test]
    fn test_empty_url_falls_back_to_default() {
        let vars = lookup(&[("OPENSEARCH_URL", "")]);
        let settings = ClientSettings::from_lookup(vars).unwrap();
        assert_eq!(settings.url, DEFAULT_OPENSEARCH_URL);
    }

    #[test]
    fn test_partial_credentials() {
        let vars = lookup(&[("OPENSEARCH_USERNAME", "admin")]);
        let result = ClientSettings::from_lookup(vars);
        assert!(matches!(result, Err(DemoError::ConfigError(_))));

        let vars = lookup(&[("OPENSEARCH_PASSWORD", "secret")]);
        let result = ClientSettings::from_lookup(vars);
        assert!(matches!(result, Err(DemoError::ConfigError(_))));
    }
}
