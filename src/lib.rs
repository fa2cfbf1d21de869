//! Native Translator - translation client core
//!
//! Sends text to a remote translation service over HTTP/JSON and keeps a
//! bounded, deduplicated history of past translations in a key-value store.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod core;
pub mod history;
pub mod storage;
pub mod telemetry;

// Re-export key types for convenience
pub use self::core::{
    client::TranslationClient,
    config::ClientConfig,
    errors::{HealthCheckError, StorageError, TranslationError},
    languages::{Language, LanguageSelection},
    models::{TranslationRequest, TranslationResult},
    settings::{AppSettings, SettingsProvider},
};

pub use history::{HistoryEntry, HistoryStore, NewHistoryEntry};
pub use storage::{FileStore, KeyValueStore, MemoryStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
