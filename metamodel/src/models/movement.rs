//! The Movement aspect — position, speed, and a speed limit warning.
//!
//! This is the canonical introductory aspect model: a moving asset reports
//! whether it is moving, its spatial position (an entity with three measured
//! coordinates), its speed, and a traffic-light style warning level.

use std::sync::OnceLock;

use crate::model::{
    Aspect, AspectModel, Characteristic, CharacteristicKind, DataType, Entity, LangText,
    ModelNamespace, Property, ScalarValue, XsdType,
};
use crate::units;
use crate::vocabulary;

/// Returns the Movement aspect model.
#[must_use]
pub fn model() -> &'static AspectModel {
    static MODEL: OnceLock<AspectModel> = OnceLock::new();
    MODEL.get_or_init(|| AspectModel {
        meta_model_version: vocabulary::SAMM_VERSION,
        namespace: ModelNamespace {
            namespace: "com.example.movement",
            version: "1.0.0",
        },
        aspect: aspect(),
        entities: entities(),
        units: vec![
            units::kilometre_per_hour(),
            units::degree_unit_of_angle(),
            units::metre(),
        ],
    })
}

fn aspect() -> Aspect {
    Aspect {
        urn: "urn:samm:com.example.movement:1.0.0#Movement",
        preferred_names: vec![
            LangText::new("en", "movement"),
            LangText::new("de", "Bewegung"),
        ],
        descriptions: vec![
            LangText::new("en", "Aspect for movement information of an asset."),
            LangText::new("de", "Aspekt für Bewegungsinformationen eines Assets."),
        ],
        see: vec!["https://example.com/docs/movement"],
        properties: vec![
            is_moving(),
            position(),
            speed(),
            speed_limit_warning(),
        ],
        operations: vec![],
        events: vec![],
    }
}

fn is_moving() -> Property {
    Property {
        urn: "urn:samm:com.example.movement:1.0.0#isMoving",
        preferred_names: vec![
            LangText::new("en", "is moving"),
            LangText::new("de", "bewegt sich"),
        ],
        descriptions: vec![LangText::new(
            "en",
            "Flag indicating whether the asset is currently moving.",
        )],
        see: vec![],
        characteristic: boolean_characteristic(),
        example_value: Some(ScalarValue::Bool(true)),
        optional: false,
        not_in_payload: false,
        is_abstract: false,
        payload_name: None,
    }
}

fn position() -> Property {
    Property {
        urn: "urn:samm:com.example.movement:1.0.0#position",
        preferred_names: vec![
            LangText::new("en", "position"),
            LangText::new("de", "Position"),
        ],
        descriptions: vec![LangText::new(
            "en",
            "Indicates a position of the asset in space.",
        )],
        see: vec![],
        characteristic: Characteristic {
            urn: "urn:samm:com.example.movement:1.0.0#SpatialPositionCharacteristic",
            preferred_names: vec![LangText::new("en", "spatial position characteristic")],
            descriptions: vec![LangText::new(
                "en",
                "Represents a single position in space with latitude, longitude and altitude.",
            )],
            see: vec![],
            data_type: Some(DataType::Entity(
                "urn:samm:com.example.movement:1.0.0#SpatialPosition",
            )),
            kind: CharacteristicKind::SingleEntity,
        },
        example_value: None,
        optional: false,
        not_in_payload: false,
        is_abstract: false,
        payload_name: None,
    }
}

fn speed() -> Property {
    Property {
        urn: "urn:samm:com.example.movement:1.0.0#speed",
        preferred_names: vec![
            LangText::new("en", "speed"),
            LangText::new("de", "Geschwindigkeit"),
        ],
        descriptions: vec![LangText::new("en", "Current speed of the asset.")],
        see: vec![],
        characteristic: Characteristic {
            urn: "urn:samm:com.example.movement:1.0.0#Speed",
            preferred_names: vec![LangText::new("en", "speed")],
            descriptions: vec![LangText::new(
                "en",
                "Scalar speed value measured in kilometres per hour.",
            )],
            see: vec![],
            data_type: Some(DataType::Scalar(XsdType::Float)),
            kind: CharacteristicKind::Measurement {
                unit: "urn:samm:org.eclipse.esmf.samm:unit:2.1.0#kilometrePerHour",
            },
        },
        example_value: Some(ScalarValue::Float(0.5)),
        optional: false,
        not_in_payload: false,
        is_abstract: false,
        payload_name: None,
    }
}

fn speed_limit_warning() -> Property {
    Property {
        urn: "urn:samm:com.example.movement:1.0.0#speedLimitWarning",
        preferred_names: vec![
            LangText::new("en", "speed limit warning"),
            LangText::new("de", "Geschwindigkeitsbegrenzungswarnung"),
        ],
        descriptions: vec![LangText::new(
            "en",
            "Indicates if the speed limit is adhered to.",
        )],
        see: vec![],
        characteristic: Characteristic {
            urn: "urn:samm:com.example.movement:1.0.0#TrafficLight",
            preferred_names: vec![LangText::new("en", "warning level")],
            descriptions: vec![LangText::new(
                "en",
                "Represents if speed of position change is within specification (green), \
                 within tolerance (yellow), or outside specification (red).",
            )],
            see: vec![],
            data_type: Some(DataType::Scalar(XsdType::String)),
            kind: CharacteristicKind::Enumeration {
                values: vec![
                    ScalarValue::Str("green"),
                    ScalarValue::Str("yellow"),
                    ScalarValue::Str("red"),
                ],
            },
        },
        example_value: Some(ScalarValue::Str("green")),
        optional: false,
        not_in_payload: false,
        is_abstract: false,
        payload_name: None,
    }
}

fn entities() -> Vec<Entity> {
    vec![Entity {
        urn: "urn:samm:com.example.movement:1.0.0#SpatialPosition",
        preferred_names: vec![
            LangText::new("en", "spatial position"),
            LangText::new("de", "räumliche Position"),
        ],
        descriptions: vec![LangText::new("en", "Position in space, described along three axes.")],
        see: vec![],
        properties: vec![latitude(), longitude(), altitude()],
        is_abstract: false,
        extends: None,
    }]
}

fn latitude() -> Property {
    Property {
        urn: "urn:samm:com.example.movement:1.0.0#latitude",
        preferred_names: vec![LangText::new("en", "latitude")],
        descriptions: vec![LangText::new("en", "Latitude coordinate in space (WGS84).")],
        see: vec![],
        characteristic: coordinate_characteristic(),
        example_value: Some(ScalarValue::Float(9.1781)),
        optional: false,
        not_in_payload: false,
        is_abstract: false,
        payload_name: None,
    }
}

fn longitude() -> Property {
    Property {
        urn: "urn:samm:com.example.movement:1.0.0#longitude",
        preferred_names: vec![LangText::new("en", "longitude")],
        descriptions: vec![LangText::new("en", "Longitude coordinate in space (WGS84).")],
        see: vec![],
        characteristic: coordinate_characteristic(),
        example_value: Some(ScalarValue::Float(48.80835)),
        optional: false,
        not_in_payload: false,
        is_abstract: false,
        payload_name: None,
    }
}

fn altitude() -> Property {
    Property {
        urn: "urn:samm:com.example.movement:1.0.0#altitude",
        preferred_names: vec![LangText::new("en", "altitude")],
        descriptions: vec![LangText::new(
            "en",
            "Height above mean sea level of the position.",
        )],
        see: vec![],
        characteristic: Characteristic {
            urn: "urn:samm:com.example.movement:1.0.0#MetresAboveMeanSeaLevel",
            preferred_names: vec![LangText::new("en", "metres above mean sea level")],
            descriptions: vec![LangText::new(
                "en",
                "Height above sea level expressed in metres.",
            )],
            see: vec![],
            data_type: Some(DataType::Scalar(XsdType::Float)),
            kind: CharacteristicKind::Measurement {
                unit: "urn:samm:org.eclipse.esmf.samm:unit:2.1.0#metre",
            },
        },
        example_value: Some(ScalarValue::Float(153.3)),
        optional: true,
        not_in_payload: false,
        is_abstract: false,
        payload_name: None,
    }
}

/// The `samm-c:Boolean` standard library characteristic.
fn boolean_characteristic() -> Characteristic {
    Characteristic {
        urn: vocabulary::SAMM_C_BOOLEAN,
        preferred_names: vec![LangText::new("en", "Boolean")],
        descriptions: vec![LangText::new(
            "en",
            "Represents a boolean value (i.e. a \"flag\").",
        )],
        see: vec![],
        data_type: Some(DataType::Scalar(XsdType::Boolean)),
        kind: CharacteristicKind::Single,
    }
}

/// The shared coordinate characteristic used by latitude and longitude.
fn coordinate_characteristic() -> Characteristic {
    Characteristic {
        urn: "urn:samm:com.example.movement:1.0.0#Coordinate",
        preferred_names: vec![LangText::new("en", "coordinate")],
        descriptions: vec![LangText::new(
            "en",
            "A coordinate along one axis, measured in degrees.",
        )],
        see: vec![],
        data_type: Some(DataType::Scalar(XsdType::Double)),
        kind: CharacteristicKind::Measurement {
            unit: "urn:samm:org.eclipse.esmf.samm:unit:2.1.0#degreeUnitOfAngle",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NS: &str = "urn:samm:com.example.movement:1.0.0#";

    #[test]
    fn urns_live_in_the_model_namespace() {
        let model = model();
        for prop in model.aspect.properties.iter() {
            assert!(
                prop.urn.starts_with(NS),
                "property URN outside namespace: {}",
                prop.urn
            );
        }
    }

    #[test]
    fn inventory_counts() {
        let model = model();
        assert_eq!(model.aspect.properties.len(), 4);
        assert_eq!(model.entity_count(), 1);
        // Boolean, SpatialPositionCharacteristic, Speed, TrafficLight,
        // Coordinate (shared by latitude/longitude), MetresAboveMeanSeaLevel.
        assert_eq!(model.characteristic_count(), 6);
        assert_eq!(model.units.len(), 3);
    }

    #[test]
    fn every_declared_unit_is_referenced() {
        let model = model();
        for unit in &model.units {
            let referenced = model.characteristics().iter().any(|c| match &c.kind {
                CharacteristicKind::Measurement { unit: u } => *u == unit.urn,
                CharacteristicKind::Quantifiable { unit: Some(u) } => *u == unit.urn,
                _ => false,
            });
            assert!(referenced, "unreferenced unit: {}", unit.urn);
        }
    }

    #[test]
    fn language_tags_cover_english_and_german() {
        assert_eq!(model().language_tags(), vec!["de", "en"]);
    }
}
