//! Multi-language text values.

use core::fmt;

/// A human-readable string tagged with a BCP-47 language code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LangString {
    /// The text value.
    pub value: String,
    /// BCP-47 language tag (e.g., `"en"`, `"de"`, `"en-US"`).
    pub language_tag: String,
}

impl LangString {
    /// Creates a language-tagged string.
    #[must_use]
    pub fn new(language_tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language_tag: language_tag.into(),
        }
    }
}

impl fmt::Display for LangString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"@{}", self.value, self.language_tag)
    }
}

/// An ordered collection of [`LangString`]s in which a language tag
/// identifies at most one entry.
///
/// Insertion order is preserved; [`MultiLanguageText::set`] replaces the
/// value of an existing tag in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiLanguageText {
    entries: Vec<LangString>,
}

impl MultiLanguageText {
    /// Creates an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for a language tag, replacing an existing entry with
    /// the same tag.
    pub fn set(&mut self, language_tag: impl Into<String>, value: impl Into<String>) {
        let language_tag = language_tag.into();
        let value = value.into();
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|e| e.language_tag == language_tag)
        {
            entry.value = value;
        } else {
            self.entries.push(LangString {
                value,
                language_tag,
            });
        }
    }

    /// Returns the value for an exact language tag, if present.
    #[must_use]
    pub fn get(&self, language_tag: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.language_tag == language_tag)
            .map(|e| e.value.as_str())
    }

    /// Returns the best value for a language tag: the exact tag, then a
    /// primary-subtag match (`"en"` matches `"en-US"`), then `"en"`, then
    /// the first entry.
    #[must_use]
    pub fn preferred(&self, language_tag: &str) -> Option<&str> {
        if let Some(value) = self.get(language_tag) {
            return Some(value);
        }
        let primary = language_tag.split('-').next().unwrap_or(language_tag);
        if let Some(entry) = self.entries.iter().find(|e| {
            e.language_tag == primary
                || e.language_tag.split('-').next().unwrap_or(&e.language_tag) == primary
        }) {
            return Some(entry.value.as_str());
        }
        if let Some(value) = self.get("en") {
            return Some(value);
        }
        self.entries.first().map(|e| e.value.as_str())
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &LangString> {
        self.entries.iter()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the container has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<LangString> for MultiLanguageText {
    fn from_iter<T: IntoIterator<Item = LangString>>(iter: T) -> Self {
        let mut text = Self::new();
        for entry in iter {
            text.set(entry.language_tag, entry.value);
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_existing_tag() {
        let mut text = MultiLanguageText::new();
        text.set("en", "movement");
        text.set("de", "Bewegung");
        text.set("en", "asset movement");
        assert_eq!(text.len(), 2);
        assert_eq!(text.get("en"), Some("asset movement"));
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut text = MultiLanguageText::new();
        text.set("de", "Bewegung");
        text.set("en", "movement");
        let tags: Vec<&str> = text.iter().map(|e| e.language_tag.as_str()).collect();
        assert_eq!(tags, vec!["de", "en"]);
    }

    #[test]
    fn preferred_falls_back_through_primary_subtag_and_english() {
        let mut text = MultiLanguageText::new();
        text.set("en", "movement");
        text.set("de-DE", "Bewegung");
        assert_eq!(text.preferred("de-DE"), Some("Bewegung"));
        assert_eq!(text.preferred("de-AT"), Some("Bewegung"));
        assert_eq!(text.preferred("fr"), Some("movement"));
    }

    #[test]
    fn preferred_falls_back_to_first_entry_without_english() {
        let mut text = MultiLanguageText::new();
        text.set("ja", "動き");
        assert_eq!(text.preferred("fr"), Some("動き"));
    }

    #[test]
    fn from_iterator_deduplicates_tags() {
        let text: MultiLanguageText = [
            LangString::new("en", "one"),
            LangString::new("en", "two"),
        ]
        .into_iter()
        .collect();
        assert_eq!(text.len(), 1);
        assert_eq!(text.get("en"), Some("two"));
    }
}
