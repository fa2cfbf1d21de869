//! Static language catalog and source/target selection

use std::fmt;

use crate::core::errors::{Result, TranslationError};

/// Code of the auto-detect sentinel; valid only as a source
pub const AUTO_DETECT: &str = "auto";

/// Concrete code substituted for auto-detect on outbound requests
pub const DEFAULT_SOURCE_LANGUAGE: &str = "en";

/// Default target language code
pub const DEFAULT_TARGET_LANGUAGE: &str = "en";

/// Selectable language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
}

static CATALOG: &[Language] = &[
    Language { code: AUTO_DETECT, name: "Auto-detect", flag: "🌐" },
    Language { code: "en", name: "English", flag: "🇬🇧" },
    Language { code: "es", name: "Spanish", flag: "🇪🇸" },
    Language { code: "fr", name: "French", flag: "🇫🇷" },
    Language { code: "de", name: "German", flag: "🇩🇪" },
    Language { code: "it", name: "Italian", flag: "🇮🇹" },
    Language { code: "pt", name: "Portuguese", flag: "🇵🇹" },
    Language { code: "ru", name: "Russian", flag: "🇷🇺" },
    Language { code: "ja", name: "Japanese", flag: "🇯🇵" },
    Language { code: "ko", name: "Korean", flag: "🇰🇷" },
    Language { code: "zh", name: "Chinese (Simplified)", flag: "🇨🇳" },
    Language { code: "zh-TW", name: "Chinese (Traditional)", flag: "🇹🇼" },
    Language { code: "ar", name: "Arabic", flag: "🇸🇦" },
    Language { code: "hi", name: "Hindi", flag: "🇮🇳" },
    Language { code: "nl", name: "Dutch", flag: "🇳🇱" },
    Language { code: "pl", name: "Polish", flag: "🇵🇱" },
    Language { code: "tr", name: "Turkish", flag: "🇹🇷" },
    Language { code: "vi", name: "Vietnamese", flag: "🇻🇳" },
    Language { code: "th", name: "Thai", flag: "🇹🇭" },
    Language { code: "id", name: "Indonesian", flag: "🇮🇩" },
    Language { code: "sv", name: "Swedish", flag: "🇸🇪" },
];

impl Language {
    /// Look up a catalog entry by code
    pub fn find(code: &str) -> Option<&'static Language> {
        CATALOG.iter().find(|l| l.code == code)
    }

    /// Auto-detect catalog entry
    pub fn auto_detect() -> &'static Language {
        &CATALOG[0]
    }

    pub fn is_auto_detect(&self) -> bool {
        self.code == AUTO_DETECT
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.flag, self.name)
    }
}

/// Full catalog, usable as source languages
pub fn languages() -> &'static [Language] {
    CATALOG
}

/// Catalog without the auto-detect sentinel
pub fn target_languages() -> impl Iterator<Item = &'static Language> {
    CATALOG.iter().filter(|l| !l.is_auto_detect())
}

/// Source/target pair chosen by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageSelection {
    source: &'static Language,
    target: &'static Language,
}

impl Default for LanguageSelection {
    fn default() -> Self {
        Self {
            source: Language::auto_detect(),
            target: Language::find(DEFAULT_TARGET_LANGUAGE).unwrap_or(&CATALOG[1]),
        }
    }
}

impl LanguageSelection {
    /// Create a selection; the target may not be auto-detect
    pub fn new(source: &'static Language, target: &'static Language) -> Result<Self> {
        check_target(target)?;
        Ok(Self { source, target })
    }

    /// Create a selection from catalog codes
    pub fn from_codes(source: &str, target: &str) -> Result<Self> {
        let source = Language::find(source).ok_or_else(|| unknown_language(source))?;
        let target = Language::find(target).ok_or_else(|| unknown_language(target))?;
        Self::new(source, target)
    }

    pub fn source(&self) -> &'static Language {
        self.source
    }

    pub fn target(&self) -> &'static Language {
        self.target
    }

    pub fn set_source(&mut self, source: &'static Language) {
        self.source = source;
    }

    pub fn set_target(&mut self, target: &'static Language) -> Result<()> {
        check_target(target)?;
        self.target = target;
        Ok(())
    }

    /// Swapping is impossible while the source is auto-detect
    pub fn can_swap(&self) -> bool {
        !self.source.is_auto_detect()
    }

    /// Exchange source and target; returns whether anything changed
    pub fn swap(&mut self) -> bool {
        if !self.can_swap() {
            return false;
        }
        std::mem::swap(&mut self.source, &mut self.target);
        true
    }
}

fn check_target(target: &Language) -> Result<()> {
    if target.is_auto_detect() {
        return Err(TranslationError::Config {
            message: "auto-detect cannot be used as a target language".to_string(),
        });
    }
    Ok(())
}

fn unknown_language(code: &str) -> TranslationError {
    TranslationError::Config {
        message: format!("Unknown language code: {}", code),
    }
}
