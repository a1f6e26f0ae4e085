//! UI language selection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Languages the marketplace UI is served in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Russian.
    #[default]
    Ru,
    /// Kazakh.
    Kk,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Language; 2] = [Language::Ru, Language::Kk];

    /// Two-letter code (e.g., "ru").
    pub fn code(&self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::Kk => "kk",
        }
    }

    /// BCP 47 locale tag used for formatting.
    pub fn locale(&self) -> &'static str {
        match self {
            Language::Ru => "ru-RU",
            Language::Kk => "kk-KZ",
        }
    }

    /// Parse a language code or locale tag ("kk", "kk-KZ", "RU").
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.trim().split(['-', '_']).next()?.to_ascii_lowercase();
        match primary.as_str() {
            "ru" => Some(Language::Ru),
            "kk" | "kz" => Some(Language::Kk),
            _ => None,
        }
    }

    /// Pick the language from, in order: explicit query value, cookie, then the
    /// first supported entry of an `Accept-Language` header.
    pub fn negotiate(
        query: Option<&str>,
        cookie: Option<&str>,
        accept_language: Option<&str>,
    ) -> Option<Self> {
        query
            .and_then(Self::from_code)
            .or_else(|| cookie.and_then(Self::from_code))
            .or_else(|| {
                accept_language?
                    .split(',')
                    .filter_map(|part| part.split(';').next())
                    .find_map(Self::from_code)
            })
    }

    /// Choose between a Russian and a Kazakh string.
    pub fn pick<'a>(&self, ru: &'a str, kk: &'a str) -> &'a str {
        match self {
            Language::Ru => ru,
            Language::Kk => kk,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Language::from_code("ru"), Some(Language::Ru));
        assert_eq!(Language::from_code("kk-KZ"), Some(Language::Kk));
        assert_eq!(Language::from_code("KZ"), Some(Language::Kk));
        assert_eq!(Language::from_code("en"), None);
    }

    #[test]
    fn test_negotiate_accept_language() {
        let lang = Language::negotiate(None, None, Some("en-US,kk;q=0.8,ru;q=0.5"));
        assert_eq!(lang, Some(Language::Kk));
    }

    #[test]
    fn test_negotiate_ignores_unknown_query() {
        let lang = Language::negotiate(Some("de"), Some("kk"), None);
        assert_eq!(lang, Some(Language::Kk));
    }

    #[test]
    fn test_negotiate_nothing() {
        assert_eq!(Language::negotiate(None, None, Some("en, de")), None);
    }

    #[test]
    fn test_deserialize_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            lang: Language,
        }
        let parsed: Wrapper = toml::from_str("lang = \"kk\"").unwrap();
        assert_eq!(parsed.lang, Language::Kk);
    }
}
