//! Core data models for translation

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::languages::AUTO_DETECT;

/// Treat an empty context as no context at all
pub fn normalize_context(context: Option<&str>) -> Option<String> {
    context.filter(|c| !c.is_empty()).map(|c| c.to_string())
}

/// Translation request as issued by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
    pub context: Option<String>,
}

impl TranslationRequest {
    pub fn new(
        text: impl Into<String>,
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
            context: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = normalize_context(Some(&context.into()));
        self
    }

    /// Build the body sent to the service, replacing auto-detect with
    /// `default_source`
    pub fn to_payload(&self, default_source: &str) -> TranslatePayload {
        let source_language = if self.source_lang == AUTO_DETECT {
            default_source.to_string()
        } else {
            self.source_lang.clone()
        };

        TranslatePayload {
            text: self.text.clone(),
            context: normalize_context(self.context.as_deref()),
            source_language,
            target_language: self.target_lang.clone(),
        }
    }
}

/// JSON body of `POST /api/translate`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TranslatePayload {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    pub source_language: String,
    pub target_language: String,
}

/// Envelope returned by `POST /api/translate`
#[derive(Debug, Clone, Deserialize)]
pub struct TranslateResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<TranslationResult>,
    #[serde(default)]
    pub error: Option<ServiceError>,
}

/// Failure reported by the translation service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceError {
    pub message: String,
    #[serde(default)]
    pub details: Option<String>,
}

/// Successful translation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub original_text: String,
    pub translated_text: String,
    #[serde(rename = "sourceLanguage")]
    pub source_language_code: String,
    #[serde(rename = "targetLanguage")]
    pub target_language_code: String,
    #[serde(default)]
    pub context: Option<String>,
    /// Server-provided, format not guaranteed
    pub timestamp: String,
}

impl TranslationResult {
    /// Best-effort parse of `timestamp`; naive times are taken as UTC
    pub fn parsed_timestamp(&self) -> Option<DateTime<Utc>> {
        let raw = self.timestamp.trim();
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.with_timezone(&Utc));
        }
        ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .map(|naive| naive.and_utc())
    }
}

/// Envelope returned by `GET /api/health`
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<HealthData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthData {
    pub status: String,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.success && self.data.as_ref().is_some_and(|d| d.status == "healthy")
    }
}
