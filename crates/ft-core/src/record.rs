//! Raw records as they appear in the JSON data files.

use serde::{Deserialize, Serialize};

use crate::lang::Language;

/// One row of a number mapping table.
///
/// The double table was published with the key misspelled as
/// `SingedIdentifier`; both spellings are read, and the misspelled one wins
/// when both carry a value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberMapping {
    /// The lucky number this row maps.
    #[serde(rename = "Number")]
    pub number: i64,
    /// Identifier under the correct key.
    #[serde(
        rename = "SignedIdentifier",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub signed_identifier: Option<String>,
    /// Identifier under the misspelled key.
    #[serde(
        rename = "SingedIdentifier",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub singed_identifier: Option<String>,
}

impl NumberMapping {
    /// Create a mapping row with a correctly spelled identifier.
    pub fn new(number: i64, identifier: impl Into<String>) -> Self {
        Self {
            number,
            signed_identifier: Some(identifier.into()),
            singed_identifier: None,
        }
    }

    /// The identifier this row points at, if it has a non-empty one.
    pub fn identifier(&self) -> Option<&str> {
        non_empty(self.singed_identifier.as_deref())
            .or_else(|| non_empty(self.signed_identifier.as_deref()))
    }
}

/// A row of the solutions or levels table: one text per language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedEntry {
    /// Key joining this row to mapping rows.
    #[serde(rename = "Identifier")]
    pub identifier: String,
    /// Traditional Chinese text.
    #[serde(rename = "zhHant", default)]
    pub zh_hant: Option<String>,
    /// English text.
    #[serde(default)]
    pub en: Option<String>,
}

/// Fortune text for an identifier.
pub type Solution = LocalizedEntry;

/// Fortune tier label for an identifier.
pub type Level = LocalizedEntry;

impl LocalizedEntry {
    /// Create an entry with both texts set.
    pub fn new(
        identifier: impl Into<String>,
        zh_hant: impl Into<String>,
        en: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            zh_hant: Some(zh_hant.into()),
            en: Some(en.into()),
        }
    }

    /// Text in the given language, falling back to Chinese when the requested
    /// text is missing or empty.
    pub fn text(&self, lang: Language) -> &str {
        let zh = non_empty(self.zh_hant.as_deref());
        let picked = match lang {
            Language::ZhHant => zh,
            Language::En => non_empty(self.en.as_deref()).or(zh),
        };
        picked.unwrap_or("")
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}
