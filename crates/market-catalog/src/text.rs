//! Bilingual text fields.
//!
//! Listing titles, descriptions and cities arrive either as a plain string
//! or as an object keyed by language code (`{"ru": "...", "kk": "..."}`).

use std::collections::BTreeMap;

use market_core::Language;
use serde::{Deserialize, Serialize};

/// A text field that is either plain or keyed by language code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedText {
    /// Same text for every language.
    Plain(String),
    /// Text per language code. Codes outside [`Language`] are kept but never selected.
    Localized(BTreeMap<String, String>),
}

impl LocalizedText {
    /// Build a localized value from Russian and Kazakh strings.
    pub fn bilingual(ru: impl Into<String>, kk: impl Into<String>) -> Self {
        let mut map = BTreeMap::new();
        map.insert(Language::Ru.code().to_string(), ru.into());
        map.insert(Language::Kk.code().to_string(), kk.into());
        Self::Localized(map)
    }

    /// Text for `language`.
    ///
    /// Plain values are returned unchanged. A keyed value without an entry
    /// for `language` yields an empty string.
    pub fn get(&self, language: Language) -> &str {
        match self {
            Self::Plain(text) => text,
            Self::Localized(map) => map.get(language.code()).map(String::as_str).unwrap_or(""),
        }
    }

    /// Text for `language`, or `None` when a keyed value lacks it.
    pub fn try_get(&self, language: Language) -> Option<&str> {
        match self {
            Self::Plain(text) => Some(text),
            Self::Localized(map) => map.get(language.code()).map(String::as_str),
        }
    }

    /// Every stored variant, in language-code order.
    pub fn variants(&self) -> Vec<&str> {
        match self {
            Self::Plain(text) => vec![text.as_str()],
            Self::Localized(map) => map.values().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for LocalizedText {
    fn from(s: &str) -> Self {
        Self::Plain(s.to_string())
    }
}

impl From<String> for LocalizedText {
    fn from(s: String) -> Self {
        Self::Plain(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_returned_unchanged() {
        let text = LocalizedText::from("Алматы");
        assert_eq!(text.get(Language::Ru), "Алматы");
        assert_eq!(text.get(Language::Kk), "Алматы");
    }

    #[test]
    fn test_localized_selects_language() {
        let text = LocalizedText::bilingual("Велосипед", "Велосипед жаңа");
        assert_eq!(text.get(Language::Ru), "Велосипед");
        assert_eq!(text.get(Language::Kk), "Велосипед жаңа");
    }

    #[test]
    fn test_localized_missing_key_is_empty() {
        let text: LocalizedText = serde_json::from_str(r#"{"ru": "Диван"}"#).unwrap();
        assert_eq!(text.get(Language::Kk), "");
        assert_eq!(text.try_get(Language::Kk), None);
    }

    #[test]
    fn test_deserialize_both_shapes() {
        let plain: LocalizedText = serde_json::from_str(r#""Астана""#).unwrap();
        assert_eq!(plain, LocalizedText::Plain("Астана".into()));

        let keyed: LocalizedText =
            serde_json::from_str(r#"{"ru": "Астана", "kk": "Астана", "en": "Astana"}"#).unwrap();
        assert_eq!(keyed.get(Language::Ru), "Астана");
        assert_eq!(keyed.variants().len(), 3);
    }
}
