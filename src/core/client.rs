//! Async translation client for the remote translation service

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::core::config::ClientConfig;
use crate::core::errors::{HealthCheckError, Result, TranslationError};
use crate::core::models::{HealthResponse, TranslateResponse, TranslationRequest, TranslationResult};
use crate::core::settings::SettingsProvider;

const TRANSLATE_PATH: &str = "/api/translate";
const HEALTH_PATH: &str = "/api/health";

/// Stateless client; one HTTP call per operation, no retries or caching
#[derive(Clone)]
pub struct TranslationClient {
    client: reqwest::Client,
    config: Arc<ClientConfig>,
    settings: Arc<dyn SettingsProvider>,
}

impl std::fmt::Debug for TranslationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl TranslationClient {
    /// Create a new translation client
    pub fn new(config: ClientConfig, settings: Arc<dyn SettingsProvider>) -> Result<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder()
            .pool_idle_timeout(Some(Duration::from_secs(config.pool_idle_timeout_secs)))
            .pool_max_idle_per_host(config.pool_max_idle_per_host);
        if let Some(timeout_ms) = config.request_timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            config: Arc::new(config),
            settings,
        })
    }

    /// Create with default configuration
    pub fn with_settings(settings: Arc<dyn SettingsProvider>) -> Result<Self> {
        Self::new(ClientConfig::default(), settings)
    }

    /// Configuration the client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Translate `text`; an empty `context` counts as none
    pub async fn translate(
        &self,
        text: &str,
        source_code: &str,
        target_code: &str,
        context: Option<&str>,
    ) -> Result<TranslationResult> {
        let mut request = TranslationRequest::new(text, source_code, target_code);
        if let Some(context) = context {
            request = request.with_context(context);
        }
        self.translate_request(&request).await
    }

    /// Translate a prepared request
    pub async fn translate_request(&self, request: &TranslationRequest) -> Result<TranslationResult> {
        // Read per call so settings changes apply immediately
        let base_url = self.settings.backend_url();
        let url = endpoint(&base_url, TRANSLATE_PATH)
            .ok_or_else(|| TranslationError::InvalidUrl { url: base_url.clone() })?;

        let payload = request.to_payload(&self.config.default_source_language);
        debug!(
            "Translating {} chars {} -> {} via {}",
            request.text.chars().count(),
            payload.source_language,
            payload.target_language,
            url
        );

        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| TranslationError::Transport {
                message: e.to_string(),
            })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            warn!("Translation service returned status {}", status);
            return Err(TranslationError::Server {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| TranslationError::Transport {
                message: e.to_string(),
            })?;

        let envelope: TranslateResponse =
            serde_json::from_slice(&body).map_err(|e| TranslationError::Decode {
                message: e.to_string(),
            })?;

        match envelope {
            TranslateResponse {
                success: true,
                data: Some(result),
                ..
            } => {
                info!(
                    "Translation succeeded ({} -> {})",
                    result.source_language_code, result.target_language_code
                );
                Ok(result)
            }
            TranslateResponse { success: true, data: None, .. } => Err(TranslationError::Decode {
                message: "success response without data".to_string(),
            }),
            TranslateResponse {
                success: false,
                error: Some(error),
                ..
            } => {
                warn!("Translation service rejected request: {}", error.message);
                Err(TranslationError::Application {
                    message: error.message,
                    details: error.details,
                })
            }
            TranslateResponse { success: false, error: None, .. } => Err(TranslationError::Decode {
                message: "failure response without error".to_string(),
            }),
        }
    }

    /// Probe `<candidate_url>/api/health`; used to vet a URL before saving it
    pub async fn check_health(&self, candidate_url: &str) -> std::result::Result<(), HealthCheckError> {
        let url = endpoint(candidate_url, HEALTH_PATH).ok_or(HealthCheckError::InvalidUrl)?;

        let response = self
            .client
            .get(url)
            .timeout(Duration::from_millis(self.config.health_timeout_ms))
            .send()
            .await
            .map_err(|e| {
                warn!("Health check for {} failed: {}", candidate_url, e);
                if e.is_timeout() {
                    HealthCheckError::Timeout
                } else if e.is_connect() {
                    HealthCheckError::CannotConnect
                } else {
                    HealthCheckError::Failed(e.to_string())
                }
            })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(HealthCheckError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                HealthCheckError::Timeout
            } else {
                HealthCheckError::Failed(e.to_string())
            }
        })?;

        let health: HealthResponse =
            serde_json::from_slice(&body).map_err(|_| HealthCheckError::InvalidResponse)?;
        if !health.is_healthy() {
            return Err(HealthCheckError::InvalidResponse);
        }

        info!("Backend {} is healthy", candidate_url);
        Ok(())
    }
}

/// Join a base URL and an API path, ignoring trailing slashes on the base
fn endpoint(base_url: &str, path: &str) -> Option<reqwest::Url> {
    let base = base_url.trim().trim_end_matches('/');
    let url = reqwest::Url::parse(&format!("{}{}", base, path)).ok()?;
    match url.scheme() {
        "http" | "https" => Some(url),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::settings::AppSettings;
    use crate::storage::MemoryStore;

    fn client() -> TranslationClient {
        let settings = Arc::new(AppSettings::new(Arc::new(MemoryStore::new())));
        TranslationClient::with_settings(settings).unwrap()
    }

    #[test]
    fn test_endpoint() {
        assert_eq!(
            endpoint("https://example.com/", TRANSLATE_PATH).unwrap().as_str(),
            "https://example.com/api/translate"
        );
        assert_eq!(
            endpoint("http://localhost:3001", HEALTH_PATH).unwrap().as_str(),
            "http://localhost:3001/api/health"
        );
        assert!(endpoint("not a url", HEALTH_PATH).is_none());
        assert!(endpoint("ftp://example.com", HEALTH_PATH).is_none());
    }

    #[test]
    fn test_client_creation_validates_config() {
        let settings = Arc::new(AppSettings::new(Arc::new(MemoryStore::new())));
        let config = ClientConfig {
            default_source_language: "auto".to_string(),
            ..Default::default()
        };
        assert!(TranslationClient::new(config, settings).is_err());
    }

    #[test]
    fn test_invalid_backend_url() {
        let settings = Arc::new(AppSettings::new(Arc::new(MemoryStore::new())));
        settings.set_backend_url("not a url").unwrap();
        let client = TranslationClient::with_settings(settings).unwrap();

        let err = tokio_test::block_on(client.translate("Hello", "en", "es", None)).unwrap_err();
        assert!(matches!(err, TranslationError::InvalidUrl { .. }));
        assert_eq!(err.user_message(), "Invalid URL configuration");
    }

    #[tokio::test]
    async fn test_health_check_invalid_url() {
        let result = client().check_health("::nope::").await;
        assert_eq!(result, Err(HealthCheckError::InvalidUrl));
    }
}
