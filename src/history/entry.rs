//! History entry types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::languages::Language;
use crate::core::models::{normalize_context, TranslationRequest, TranslationResult};

const PREVIEW_CHARS: usize = 50;

/// Recorded translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: Uuid,
    pub source_text: String,
    pub translated_text: String,
    pub source_language_code: String,
    pub source_language_name: String,
    pub target_language_code: String,
    pub target_language_name: String,
    #[serde(default)]
    pub context: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Source text shortened for list display
    pub fn preview_text(&self) -> String {
        if self.source_text.chars().count() > PREVIEW_CHARS {
            let head: String = self.source_text.chars().take(PREVIEW_CHARS).collect();
            format!("{}...", head)
        } else {
            self.source_text.clone()
        }
    }

    pub(crate) fn matches_key(&self, input: &NewHistoryEntry) -> bool {
        self.source_text == input.source_text
            && self.source_language_code == input.source_language_code
            && self.target_language_code == input.target_language_code
            && self.context == input.context
    }

    pub(crate) fn matches_query(&self, needle_lower: &str) -> bool {
        self.source_text.to_lowercase().contains(needle_lower)
            || self.translated_text.to_lowercase().contains(needle_lower)
    }
}

/// Inputs for [`HistoryStore::record`](crate::history::HistoryStore::record)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHistoryEntry {
    pub source_text: String,
    pub translated_text: String,
    pub source_language_code: String,
    pub source_language_name: String,
    pub target_language_code: String,
    pub target_language_name: String,
    pub context: Option<String>,
}

impl NewHistoryEntry {
    pub fn new(
        source_text: impl Into<String>,
        translated_text: impl Into<String>,
        source: &Language,
        target: &Language,
        context: Option<&str>,
    ) -> Self {
        Self {
            source_text: source_text.into(),
            translated_text: translated_text.into(),
            source_language_code: source.code.to_string(),
            source_language_name: source.name.to_string(),
            target_language_code: target.code.to_string(),
            target_language_name: target.name.to_string(),
            context: normalize_context(context),
        }
    }

    /// Inputs for a successful translation of `request`.
    ///
    /// Text and context come from the caller's request, not the service echo;
    /// only the translated text is taken from `result`.
    pub fn from_result(
        request: &TranslationRequest,
        result: &TranslationResult,
        source: &Language,
        target: &Language,
    ) -> Self {
        Self::new(
            request.text.clone(),
            result.translated_text.clone(),
            source,
            target,
            request.context.as_deref(),
        )
    }

    pub(crate) fn into_entry(self) -> HistoryEntry {
        HistoryEntry {
            id: Uuid::new_v4(),
            source_text: self.source_text,
            translated_text: self.translated_text,
            source_language_code: self.source_language_code,
            source_language_name: self.source_language_name,
            target_language_code: self.target_language_code,
            target_language_name: self.target_language_name,
            context: self.context,
            created_at: Utc::now(),
        }
    }
}
