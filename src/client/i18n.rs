/**
 * Translation Lookup
 *
 * A flat key-to-string table built from a language catalog entry. Missing
 * keys fall back to the key itself, so untranslated UI stays legible.
 */

use std::collections::HashMap;

use crate::shared::api::LanguageResponse;

#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    code: String,
    entries: HashMap<String, String>,
}

impl TranslationTable {
    pub fn new(code: impl Into<String>, entries: HashMap<String, String>) -> Self {
        Self {
            code: code.into(),
            entries,
        }
    }

    pub fn from_language(language: &LanguageResponse) -> Self {
        Self::new(language.code.clone(), language.content.clone())
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Translate a key, falling back to the key itself.
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.entries.get(key).map(String::as_str).unwrap_or(key)
    }

    /// Translate a key, falling back to the given default.
    pub fn translate_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.entries.get(key).map(String::as_str).unwrap_or(default)
    }

    pub fn has_translation(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> TranslationTable {
        let mut entries = HashMap::new();
        entries.insert(
            "global.pages.home.property.welcome-banner".to_string(),
            "Welcome".to_string(),
        );
        TranslationTable::new("en-US", entries)
    }

    #[test]
    fn test_translate_hit_and_miss() {
        let table = table();
        assert_eq!(
            table.translate("global.pages.home.property.welcome-banner"),
            "Welcome"
        );
        // Missing keys echo back.
        assert_eq!(table.translate("global.unknown"), "global.unknown");
    }

    #[test]
    fn test_translate_or() {
        let table = table();
        assert_eq!(table.translate_or("global.unknown", "Fallback"), "Fallback");
        assert!(table.has_translation("global.pages.home.property.welcome-banner"));
        assert!(!table.has_translation("global.unknown"));
    }
}
