//! Verifies that the shape the generator emits composes against the
//! `samm-runtime` contracts, by hand-expanding the Movement output.

use core::str::FromStr;

use samm_runtime::{
    CharacteristicDesc, InvalidEnumValue, LangString, PropertyContainer, PropertyDesc,
    StaticMetaClass, StaticProperty,
};

/// Hand-expanded equivalent of the generated `TrafficLight` enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TrafficLight {
    Green,
    Yellow,
    Red,
}

impl TrafficLight {
    const fn as_str(self) -> &'static str {
        match self {
            TrafficLight::Green => "green",
            TrafficLight::Yellow => "yellow",
            TrafficLight::Red => "red",
        }
    }
}

impl FromStr for TrafficLight {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "green" => Ok(TrafficLight::Green),
            "yellow" => Ok(TrafficLight::Yellow),
            "red" => Ok(TrafficLight::Red),
            other => Err(InvalidEnumValue::new("TrafficLight", other)),
        }
    }
}

/// Hand-expanded equivalent of the generated `Movement` struct.
#[derive(Clone, Debug, PartialEq)]
struct Movement {
    is_moving: bool,
    speed: f32,
    speed_limit_warning: TrafficLight,
}

/// Hand-expanded equivalent of the generated `MetaMovement` companion.
struct MetaMovement;

impl MetaMovement {
    pub const PROPERTY_IS_MOVING: StaticProperty<Movement, bool> =
        StaticProperty::new(PropertyDesc {
            urn: "urn:samm:com.example.movement:1.0.0#isMoving",
            name: "isMoving",
            payload_name: None,
            optional: false,
            not_in_payload: false,
            is_abstract: false,
            example_value: Some("true"),
            characteristic: CharacteristicDesc {
                urn: "urn:samm:org.eclipse.esmf.samm:characteristic:2.1.0#Boolean",
                name: "Boolean",
                data_type_urn: Some("http://www.w3.org/2001/XMLSchema#boolean"),
            },
        });

    pub const PROPERTY_SPEED: StaticProperty<Movement, f32> =
        StaticProperty::new(PropertyDesc {
            urn: "urn:samm:com.example.movement:1.0.0#speed",
            name: "speed",
            payload_name: None,
            optional: false,
            not_in_payload: false,
            is_abstract: false,
            example_value: Some("0.5"),
            characteristic: CharacteristicDesc {
                urn: "urn:samm:com.example.movement:1.0.0#Speed",
                name: "Speed",
                data_type_urn: Some("http://www.w3.org/2001/XMLSchema#float"),
            },
        });

    const DECLARED_PROPERTIES: &'static [PropertyDesc] = &[
        Self::PROPERTY_IS_MOVING.desc(),
        Self::PROPERTY_SPEED.desc(),
    ];
}

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
        vec![
            LangString::new("en", "movement"),
            LangString::new("de", "Bewegung"),
        ]
    }
}

impl PropertyContainer for MetaMovement {
    fn declared_properties() -> &'static [PropertyDesc] {
        Self::DECLARED_PROPERTIES
    }
}

#[test]
fn meta_class_contract_composes() {
    assert_eq!(MetaMovement::name(), "Movement");
    assert_eq!(
        MetaMovement::model_urn(),
        "urn:samm:com.example.movement:1.0.0#Movement"
    );
    assert_eq!(MetaMovement::preferred_names().len(), 2);
    assert_eq!(MetaMovement::declared_properties().len(), 2);
    assert_eq!(MetaMovement::all_properties().len(), 2);
    assert_eq!(
        MetaMovement::declared_properties()[0].effective_payload_name(),
        "isMoving"
    );
}

#[test]
fn typed_descriptors_expose_the_model_data() {
    assert_eq!(MetaMovement::PROPERTY_SPEED.name(), "speed");
    assert_eq!(MetaMovement::PROPERTY_SPEED.example_value(), Some("0.5"));
    assert_eq!(
        MetaMovement::PROPERTY_SPEED.characteristic().name,
        "Speed"
    );
    assert!(!MetaMovement::PROPERTY_IS_MOVING.is_optional());
}

#[test]
fn enum_round_trip_matches_the_generated_shape() {
    let value = Movement {
        is_moving: true,
        speed: 0.5,
        speed_limit_warning: TrafficLight::Green,
    };
    assert!(value.is_moving);
    assert_eq!(value.speed, 0.5);
    assert_eq!(value.speed_limit_warning.as_str(), "green");
    assert_eq!(
        TrafficLight::from_str("red"),
        Ok(TrafficLight::Red)
    );
    let err = TrafficLight::from_str("purple");
    assert_eq!(
        err.map(TrafficLight::as_str),
        Err(InvalidEnumValue::new("TrafficLight", "purple"))
    );
}
