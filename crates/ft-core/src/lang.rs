//! Display languages for fortune texts.

use serde::{Deserialize, Serialize};

/// Language a fortune is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    /// Traditional Chinese, the language every table is guaranteed to carry.
    #[default]
    #[serde(rename = "zh")]
    ZhHant,
    /// English.
    #[serde(rename = "en")]
    En,
}

impl Language {
    /// Parse a language from a user-supplied code.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "zh" | "zh-hant" | "zhhant" | "zh-tw" | "tw" => Some(Self::ZhHant),
            "en" | "english" => Some(Self::En),
            _ => None,
        }
    }

    /// Short code used on the command line and in JSON output.
    pub fn code(self) -> &'static str {
        match self {
            Self::ZhHant => "zh",
            Self::En => "en",
        }
    }

    /// All supported languages.
    pub fn all() -> &'static [Self] {
        &[Self::ZhHant, Self::En]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZhHant => write!(f, "繁體中文"),
            Self::En => write!(f, "English"),
        }
    }
}
