//! SAMM aspect meta-model encoded as typed Rust data.
//!
//! The `samm-metamodel` crate provides the element types of the Semantic
//! Aspect Meta Model — aspects, properties, characteristics, constraints,
//! entities, and units — as plain Rust data structures, together with URN
//! handling, sample aspect models, and serializers that produce Turtle and
//! example JSON payloads.
//!
//! # Entry Point
//!
//! ```
//! let model = samm_metamodel::models::movement::model();
//! assert_eq!(model.aspect.name(), "Movement");
//! assert_eq!(model.aspect.properties.len(), 4);
//! ```
//!
//! # Serialization
//!
//! ```
//! let model = samm_metamodel::models::movement::model();
//! let turtle = samm_metamodel::serializer::turtle::to_turtle(model);
//! assert!(turtle.contains(":Movement a samm:Aspect"));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod model;
pub mod models;
#[cfg(feature = "serializers")]
pub mod serializer;
pub mod units;
pub mod urn;
pub mod vocabulary;

pub use model::{
    Aspect, AspectModel, BoundDefinition, Characteristic, CharacteristicKind, Constraint,
    DataType, Encoding, Entity, Event, LangText, ModelNamespace, Operation, Property,
    ScalarValue, Unit, XsdType,
};
pub use urn::{ModelUrn, UrnParseError, Version};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_model_count() {
        assert_eq!(models::all().len(), 2);
    }

    #[test]
    fn all_element_urns_unique_per_model() {
        for model in models::all() {
            let mut urns = std::collections::HashSet::new();
            assert!(urns.insert(model.aspect.urn));
            for prop in model.all_properties() {
                assert!(urns.insert(prop.urn), "Duplicate property URN: {}", prop.urn);
            }
            for entity in &model.entities {
                assert!(urns.insert(entity.urn), "Duplicate entity URN: {}", entity.urn);
            }
            for c in model.characteristics() {
                assert!(urns.insert(c.urn), "Duplicate characteristic URN: {}", c.urn);
            }
        }
    }

    #[test]
    fn all_element_urns_parse() {
        for model in models::all() {
            for prop in model.all_properties() {
                assert!(
                    ModelUrn::parse(prop.urn).is_ok(),
                    "Unparseable property URN: {}",
                    prop.urn
                );
            }
            for c in model.characteristics() {
                assert!(
                    ModelUrn::parse(c.urn).is_ok(),
                    "Unparseable characteristic URN: {}",
                    c.urn
                );
            }
        }
    }

    #[test]
    fn language_tags_unique_within_collections() {
        for model in models::all() {
            for prop in model.all_properties() {
                let mut tags = std::collections::HashSet::new();
                for text in &prop.preferred_names {
                    assert!(
                        tags.insert(text.language_tag),
                        "Duplicate language tag `{}` on {}",
                        text.language_tag,
                        prop.urn
                    );
                }
            }
        }
    }

    #[test]
    fn meta_model_version_matches_vocabulary() {
        for model in models::all() {
            assert_eq!(model.meta_model_version, vocabulary::SAMM_VERSION);
        }
    }
}
