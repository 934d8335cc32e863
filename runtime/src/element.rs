//! The base metamodel element.

use crate::lang::MultiLanguageText;

/// Descriptive state shared by every runtime model element: multi-language
/// preferred names and descriptions, reference URLs, and the list of parent
/// elements (for entity inheritance tracking).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelElement {
    name: String,
    preferred_names: MultiLanguageText,
    descriptions: MultiLanguageText,
    see: Vec<String>,
    parents: Vec<String>,
}

impl ModelElement {
    /// Creates an element with the given name and no descriptive content.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns the element name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the multi-language preferred names.
    #[must_use]
    pub fn preferred_names(&self) -> &MultiLanguageText {
        &self.preferred_names
    }

    /// Returns the multi-language descriptions.
    #[must_use]
    pub fn descriptions(&self) -> &MultiLanguageText {
        &self.descriptions
    }

    /// Returns the reference URLs.
    #[must_use]
    pub fn see(&self) -> &[String] {
        &self.see
    }

    /// Returns the URNs of the parent elements, nearest first.
    #[must_use]
    pub fn parents(&self) -> &[String] {
        &self.parents
    }

    /// Adds or replaces a preferred name for a language tag.
    pub fn add_preferred_name(
        &mut self,
        language_tag: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.preferred_names.set(language_tag, value);
    }

    /// Adds or replaces a description for a language tag.
    pub fn add_description(
        &mut self,
        language_tag: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.descriptions.set(language_tag, value);
    }

    /// Adds a reference URL.
    pub fn add_see(&mut self, url: impl Into<String>) {
        self.see.push(url.into());
    }

    /// Appends a parent element URN.
    pub fn add_parent(&mut self, urn: impl Into<String>) {
        self.parents.push(urn.into());
    }

    /// Builder-style variant of [`ModelElement::add_preferred_name`].
    #[must_use]
    pub fn with_preferred_name(
        mut self,
        language_tag: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.add_preferred_name(language_tag, value);
        self
    }

    /// Builder-style variant of [`ModelElement::add_description`].
    #[must_use]
    pub fn with_description(
        mut self,
        language_tag: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.add_description(language_tag, value);
        self
    }

    /// Builder-style variant of [`ModelElement::add_see`].
    #[must_use]
    pub fn with_see(mut self, url: impl Into<String>) -> Self {
        self.add_see(url);
        self
    }

    /// Builder-style variant of [`ModelElement::add_parent`].
    #[must_use]
    pub fn with_parent(mut self, urn: impl Into<String>) -> Self {
        self.add_parent(urn);
        self
    }
}

/// A runtime characteristic descriptor built with the same builder style as
/// [`ModelElement`]. Generated code uses the static
/// [`CharacteristicDesc`](crate::CharacteristicDesc) instead; this type is
/// for applications assembling characteristics at runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefaultCharacteristic {
    element: ModelElement,
    urn: Option<String>,
    data_type_urn: Option<String>,
}

impl DefaultCharacteristic {
    /// Creates a characteristic with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            element: ModelElement::new(name),
            urn: None,
            data_type_urn: None,
        }
    }

    /// Returns the descriptive element.
    #[must_use]
    pub fn element(&self) -> &ModelElement {
        &self.element
    }

    /// Returns a mutable view of the descriptive element.
    pub fn element_mut(&mut self) -> &mut ModelElement {
        &mut self.element
    }

    /// Returns the characteristic URN, if set.
    #[must_use]
    pub fn urn(&self) -> Option<&str> {
        self.urn.as_deref()
    }

    /// Returns the data type URN, if set.
    #[must_use]
    pub fn data_type_urn(&self) -> Option<&str> {
        self.data_type_urn.as_deref()
    }

    /// Sets the characteristic URN.
    #[must_use]
    pub fn with_urn(mut self, urn: impl Into<String>) -> Self {
        self.urn = Some(urn.into());
        self
    }

    /// Sets the data type URN.
    #[must_use]
    pub fn with_data_type_urn(mut self, urn: impl Into<String>) -> Self {
        self.data_type_urn = Some(urn.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_accumulates_descriptive_state() {
        let element = ModelElement::new("Movement")
            .with_preferred_name("en", "movement")
            .with_preferred_name("de", "Bewegung")
            .with_description("en", "Aspect for movement information.")
            .with_see("https://example.com/docs/movement");
        assert_eq!(element.name(), "Movement");
        assert_eq!(element.preferred_names().get("de"), Some("Bewegung"));
        assert_eq!(element.see().len(), 1);
        assert!(element.parents().is_empty());
    }

    #[test]
    fn parent_list_tracks_inheritance_order() {
        let element = ModelElement::new("Sensor")
            .with_parent("urn:samm:com.example.sensors:1.0.0#DeviceBase");
        assert_eq!(
            element.parents(),
            ["urn:samm:com.example.sensors:1.0.0#DeviceBase"]
        );
    }

    #[test]
    fn default_characteristic_builder() {
        let characteristic = DefaultCharacteristic::new("Speed")
            .with_urn("urn:samm:com.example.movement:1.0.0#Speed")
            .with_data_type_urn("http://www.w3.org/2001/XMLSchema#float");
        assert_eq!(characteristic.element().name(), "Speed");
        assert_eq!(
            characteristic.urn(),
            Some("urn:samm:com.example.movement:1.0.0#Speed")
        );
    }
}
