//! User settings stored in the shared key-value store

use std::sync::Arc;
use tracing::{debug, warn};

use crate::core::errors::{Result, TranslationError};
use crate::core::languages::{LanguageSelection, AUTO_DETECT, DEFAULT_TARGET_LANGUAGE};
use crate::storage::KeyValueStore;

pub const BACKEND_URL_KEY: &str = "backendURL";
pub const SOURCE_LANGUAGE_KEY: &str = "sourceLanguageCode";
pub const TARGET_LANGUAGE_KEY: &str = "targetLanguageCode";
pub const CONTEXT_KEY: &str = "translationContext";

/// Backend used until the user configures another one
pub const DEFAULT_BACKEND_URL: &str = "https://translation-service.fruitcc.com";

/// Source of the backend base URL, consulted before every request
pub trait SettingsProvider: Send + Sync {
    /// Base URL of the translation service, without the `/api` suffix
    fn backend_url(&self) -> String;
}

/// Settings persisted as UTF-8 strings in a [`KeyValueStore`]
#[derive(Clone)]
pub struct AppSettings {
    store: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for AppSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppSettings").finish_non_exhaustive()
    }
}

impl AppSettings {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn get_string(&self, key: &str, default: &str) -> String {
        match self.store.get(key) {
            Ok(Some(bytes)) => String::from_utf8(bytes).unwrap_or_else(|_| {
                warn!("Setting {} is not valid UTF-8, using default", key);
                default.to_string()
            }),
            Ok(None) => default.to_string(),
            Err(e) => {
                warn!("Failed to read setting {}: {}", key, e);
                default.to_string()
            }
        }
    }

    fn set_string(&self, key: &str, value: &str) -> Result<()> {
        self.store
            .set(key, value.as_bytes())
            .map_err(|e| TranslationError::Config {
                message: format!("failed to save {}: {}", key, e),
            })?;
        debug!("Saved setting {}", key);
        Ok(())
    }

    pub fn set_backend_url(&self, url: &str) -> Result<()> {
        let url = url.trim();
        if url.is_empty() {
            return Err(TranslationError::Config {
                message: "backend URL cannot be empty".to_string(),
            });
        }
        self.set_string(BACKEND_URL_KEY, url)
    }

    /// Stored context; empty means none
    pub fn context(&self) -> String {
        self.get_string(CONTEXT_KEY, "")
    }

    pub fn set_context(&self, context: &str) -> Result<()> {
        self.set_string(CONTEXT_KEY, context)
    }

    /// Last language pair, falling back to defaults for unknown codes
    pub fn selection(&self) -> LanguageSelection {
        let source = self.get_string(SOURCE_LANGUAGE_KEY, AUTO_DETECT);
        let target = self.get_string(TARGET_LANGUAGE_KEY, DEFAULT_TARGET_LANGUAGE);

        LanguageSelection::from_codes(&source, &target).unwrap_or_else(|e| {
            warn!("Stored language selection is unusable ({}), using defaults", e);
            LanguageSelection::default()
        })
    }

    pub fn set_selection(&self, selection: &LanguageSelection) -> Result<()> {
        self.set_string(SOURCE_LANGUAGE_KEY, selection.source().code)?;
        self.set_string(TARGET_LANGUAGE_KEY, selection.target().code)
    }
}

impl SettingsProvider for AppSettings {
    fn backend_url(&self) -> String {
        self.get_string(BACKEND_URL_KEY, DEFAULT_BACKEND_URL)
    }
}
