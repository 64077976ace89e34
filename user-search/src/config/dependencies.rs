//! Client construction for the demo programs.

use tracing::info;

use crate::config::ClientSettings;
use crate::DemoError;
use user_search_repository::OpenSearchClient;

/// Container for the initialized client handle.
///
/// Built once per run and passed by reference to every operation.
pub struct Dependencies {
    /// The search engine client.
    pub client: OpenSearchClient,
}

impl Dependencies {
    /// Initialize dependencies from environment variables.
    ///
    /// See [`ClientSettings::from_env`] for the variables read.
    pub fn from_env() -> Result<Self, DemoError> {
        Self::from_settings(&ClientSettings::from_env()?)
    }

    /// Initialize dependencies from explicit settings.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(DemoError::ConfigError)` - If the client cannot be created
    pub fn from_settings(settings: &ClientSettings) -> Result<Self, DemoError> {
        info!(
            opensearch_url = %settings.url,
            authenticated = settings.auth.is_some(),
            "Initializing dependencies"
        );

        let client = match &settings.auth {
            Some(auth) => {
                OpenSearchClient::with_basic_auth(&settings.url, &auth.username, &auth.password)
            }
            None => OpenSearchClient::new(&settings.url),
        }
        .map_err(|e| DemoError::config(format!("Failed to create OpenSearch client: {}", e)))?;

        Ok(Self { client })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_is_config_error() {
        let settings = ClientSettings {
            url: "localhost without scheme".to_string(),
            auth: None,
        };

        let err = Dependencies::from_settings(&settings).err().unwrap();
        assert!(matches!(err, DemoError::ConfigError(_)));
        assert!(err.to_string().contains("Failed to create OpenSearch client"));
    }

    #[test]
    fn test_default_settings() {
        assert!(Dependencies::from_settings(&ClientSettings::default()).is_ok());
    }
}
