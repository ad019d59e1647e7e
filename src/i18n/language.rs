use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Display languages of the blog. English is the authoring language,
/// Vietnamese an optional overlay.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "vi")]
    Vietnamese,
}

/// Order matters: toggling walks this list.
pub const SUPPORTED_LANGUAGES: [Language; 2] = [Language::English, Language::Vietnamese];

pub const DEFAULT_LANGUAGE: Language = Language::English;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported language: {0}")]
pub struct UnsupportedLanguage(pub String);

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Vietnamese => "vi",
        }
    }

    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Vietnamese => "Tiếng Việt",
        }
    }

    /// Exact, case-sensitive lookup among the supported codes.
    pub fn from_code(code: &str) -> Option<Language> {
        SUPPORTED_LANGUAGES.iter()
            .copied()
            .find(|lang| lang.code() == code)
    }

    /// Next language in `SUPPORTED_LANGUAGES`, wrapping around.
    pub fn next(&self) -> Language {
        let index = SUPPORTED_LANGUAGES.iter()
            .position(|lang| lang == self)
            .unwrap_or(0);
        SUPPORTED_LANGUAGES[(index + 1) % SUPPORTED_LANGUAGES.len()]
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| UnsupportedLanguage(s.to_string()))
    }
}

/// Matches the language reported by the browser (`vi-VN`, `en_US`, `VI`)
/// against the supported set by its primary subtag.
pub fn detect_browser_language(browser_language: Option<&str>) -> Language {
    let Some(browser_language) = browser_language else {
        return DEFAULT_LANGUAGE;
    };

    let primary = browser_language
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_lowercase();

    Language::from_code(&primary).unwrap_or(DEFAULT_LANGUAGE)
}
