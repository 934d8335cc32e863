//! Typing contracts implemented by generated meta-classes.

use crate::lang::LangString;
use crate::property::PropertyDesc;

/// Static metadata of a generated model class.
///
/// Implemented by the generated `Meta*` companion of every aspect and entity
/// struct, giving all generated classes a uniform metadata surface.
pub trait StaticMetaClass {
    /// Returns the full URN of the model element.
    fn model_urn() -> &'static str;

    /// Returns the meta-model version the element conforms to.
    fn meta_model_version() -> &'static str;

    /// Returns the element name.
    fn name() -> &'static str;

    /// Returns the multi-language preferred names.
    fn preferred_names() -> Vec<LangString> {
        Vec::new()
    }

    /// Returns the multi-language descriptions.
    fn descriptions() -> Vec<LangString> {
        Vec::new()
    }

    /// Returns the reference URLs.
    fn see() -> Vec<&'static str> {
        Vec::new()
    }
}

/// Access to the property descriptors of a generated model class.
pub trait PropertyContainer {
    /// Properties declared directly on the element.
    fn declared_properties() -> &'static [PropertyDesc];

    /// All properties, including those inherited from extended elements.
    /// Defaults to the declared properties.
    fn all_properties() -> &'static [PropertyDesc] {
        Self::declared_properties()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::CharacteristicDesc;

    struct MetaMovement;

    const DECLARED: &[PropertyDesc] = &[PropertyDesc {
        urn: "urn:samm:com.example.movement:1.0.0#isMoving",
        name: "isMoving",
        payload_name: None,
        optional: false,
        not_in_payload: false,
        is_abstract: false,
        example_value: None,
        characteristic: CharacteristicDesc {
            urn: "urn:samm:org.eclipse.esmf.samm:characteristic:2.1.0#Boolean",
            name: "Boolean",
            data_type_urn: Some("http://www.w3.org/2001/XMLSchema#boolean"),
        },
    }];

    impl StaticMetaClass for MetaMovement {
        fn model_urn() -> &'static str {
            "urn:samm:com.example.movement:1.0.0#Movement"
        }

        fn meta_model_version() -> &'static str {
            "2.1.0"
        }

        fn name() -> &'static str {
            "Movement"
        }

        fn preferred_names() -> Vec<LangString> {
            vec![LangString::new("en", "movement")]
        }
    }

    impl PropertyContainer for MetaMovement {
        fn declared_properties() -> &'static [PropertyDesc] {
            DECLARED
        }
    }

    #[test]
    fn meta_class_surface() {
        assert_eq!(MetaMovement::name(), "Movement");
        assert_eq!(MetaMovement::meta_model_version(), "2.1.0");
        assert_eq!(MetaMovement::preferred_names().len(), 1);
        // Defaults apply where the implementor declares nothing.
        assert!(MetaMovement::descriptions().is_empty());
        assert!(MetaMovement::see().is_empty());
    }

    #[test]
    fn all_properties_defaults_to_declared() {
        assert_eq!(
            MetaMovement::all_properties().len(),
            MetaMovement::declared_properties().len()
        );
    }
}
