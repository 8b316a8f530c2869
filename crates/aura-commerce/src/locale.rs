//! UI language preference.

use aura_cache::{Cache, KeyValueStore};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CommerceError;

/// Storage key the language code is kept under.
pub const LANGUAGE_STORAGE_KEY: &str = "language";

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    De,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::De, Language::En];

    /// Two-letter code ("de" / "en").
    pub fn code(&self) -> &'static str {
        match self {
            Language::De => "de",
            Language::En => "en",
        }
    }

    /// Name of the language in itself.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::De => "Deutsch",
            Language::En => "English",
        }
    }

    /// Exact code match; anything else is rejected.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.code() == code)
    }
}

impl FromStr for Language {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(&s.trim().to_lowercase()).ok_or_else(|| CommerceError::unknown("language", s))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Persisted language choice.
pub struct LanguageStore<S> {
    cache: Cache<S>,
    key: String,
    language: Language,
}

impl<S: KeyValueStore> LanguageStore<S> {
    /// Open the store under [`LANGUAGE_STORAGE_KEY`].
    pub fn open(cache: Cache<S>) -> Self {
        Self::open_with_key(cache, LANGUAGE_STORAGE_KEY)
    }

    /// Open under a custom key. Unknown or unreadable values keep the default.
    pub fn open_with_key(cache: Cache<S>, key: impl Into<String>) -> Self {
        let key = key.into();
        let language = match cache.store().get(&key) {
            Ok(Some(bytes)) => match decode_code(&bytes) {
                Some(code) => Language::from_code(&code).unwrap_or_else(|| {
                    tracing::warn!(key = %key, code = %code, "ignoring unknown stored language");
                    Language::default()
                }),
                None => {
                    tracing::warn!(key = %key, "ignoring unreadable stored language");
                    Language::default()
                }
            },
            Ok(None) => Language::default(),
            Err(e) => {
                tracing::error!(key = %key, error = %e, "failed to load language");
                Language::default()
            }
        };
        Self {
            cache,
            key,
            language,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Persist `language` as its bare code, then switch to it.
    ///
    /// If the write fails the error is logged and the current language is
    /// kept. Returns whether the switch happened.
    pub fn set(&mut self, language: Language) -> bool {
        match self.cache.store().set(&self.key, language.code().as_bytes()) {
            Ok(()) => {
                tracing::debug!(language = %language, "saved language");
                self.language = language;
                true
            }
            Err(e) => {
                tracing::error!(key = %self.key, error = %e, "failed to save language");
                false
            }
        }
    }
}

/// Accept a bare code (`en`) as well as a JSON string (`"en"`).
fn decode_code(bytes: &[u8]) -> Option<String> {
    if let Ok(code) = serde_json::from_slice::<String>(bytes) {
        return Some(code);
    }
    std::str::from_utf8(bytes).ok().map(|s| s.trim().to_string())
}
