//! The SensorCatalog aspect — a device inventory exercising the full
//! characteristic catalog.
//!
//! Covers collections, traits with range/length/regex/encoding/language/
//! locale/fixed-point constraints, structured values, `Either`, states,
//! codes, abstract entity extension, an operation, and an event.

use std::sync::OnceLock;

use crate::model::{
    Aspect, AspectModel, BoundDefinition, Characteristic, CharacteristicKind, Constraint,
    DataType, Encoding, Entity, Event, LangText, ModelNamespace, Operation, Property,
    ScalarValue, XsdType,
};
use crate::units;
use crate::vocabulary;

/// Returns the SensorCatalog aspect model.
#[must_use]
pub fn model() -> &'static AspectModel {
    static MODEL: OnceLock<AspectModel> = OnceLock::new();
    MODEL.get_or_init(|| AspectModel {
        meta_model_version: vocabulary::SAMM_VERSION,
        namespace: ModelNamespace {
            namespace: "com.example.sensors",
            version: "1.0.0",
        },
        aspect: aspect(),
        entities: entities(),
        units: vec![units::percent(), units::degree_celsius()],
    })
}

fn aspect() -> Aspect {
    Aspect {
        urn: "urn:samm:com.example.sensors:1.0.0#SensorCatalog",
        preferred_names: vec![
            LangText::new("en", "sensor catalog"),
            LangText::new("de", "Sensorkatalog"),
        ],
        descriptions: vec![
            LangText::new(
                "en",
                "Catalog of the sensors installed on a device, including their \
                 current readings and calibration state.",
            ),
            LangText::new(
                "de",
                "Katalog der auf einem Gerät installierten Sensoren inklusive \
                 aktueller Messwerte und Kalibrierungszustand.",
            ),
        ],
        see: vec!["https://example.com/docs/sensor-catalog"],
        properties: vec![
            sensors(),
            firmware_version(),
            status(),
            reading(),
            accuracy(),
            display_language(),
            raw_data(),
            temperature(),
        ],
        operations: vec![calibrate()],
        events: vec![sensor_added()],
    }
}

fn sensors() -> Property {
    Property {
        urn: "urn:samm:com.example.sensors:1.0.0#sensors",
        preferred_names: vec![
            LangText::new("en", "sensors"),
            LangText::new("de", "Sensoren"),
        ],
        descriptions: vec![LangText::new("en", "The sensors installed on the device.")],
        see: vec![],
        characteristic: Characteristic {
            urn: "urn:samm:com.example.sensors:1.0.0#SensorList",
            preferred_names: vec![LangText::new("en", "sensor list")],
            descriptions: vec![LangText::new(
                "en",
                "Ordered list of sensor entries; a sensor may appear more than once.",
            )],
            see: vec![],
            data_type: Some(DataType::Entity("urn:samm:com.example.sensors:1.0.0#Sensor")),
            kind: CharacteristicKind::Collection {
                element: Some(Box::new(sensor_entity_characteristic())),
                ordered: true,
                unique: false,
            },
        },
        example_value: None,
        optional: false,
        not_in_payload: false,
        is_abstract: false,
        payload_name: None,
    }
}

fn firmware_version() -> Property {
    Property {
        urn: "urn:samm:com.example.sensors:1.0.0#firmwareVersion",
        preferred_names: vec![LangText::new("en", "firmware version")],
        descriptions: vec![LangText::new(
            "en",
            "Version of the firmware the sensor hub is running.",
        )],
        see: vec![],
        characteristic: Characteristic {
            urn: "urn:samm:com.example.sensors:1.0.0#FirmwareVersion",
            preferred_names: vec![LangText::new("en", "firmware version")],
            descriptions: vec![LangText::new(
                "en",
                "Semantic version string, deconstructed into major, minor and micro parts.",
            )],
            see: vec![],
            data_type: Some(DataType::Scalar(XsdType::String)),
            kind: CharacteristicKind::StructuredValue {
                deconstruction_rule: "(\\d+)\\.(\\d+)\\.(\\d+)",
                elements: vec![
                    "urn:samm:com.example.sensors:1.0.0#versionMajor",
                    "urn:samm:com.example.sensors:1.0.0#versionMinor",
                    "urn:samm:com.example.sensors:1.0.0#versionMicro",
                ],
            },
        },
        example_value: Some(ScalarValue::Str("2.1.0")),
        optional: false,
        not_in_payload: false,
        is_abstract: false,
        payload_name: None,
    }
}

fn status() -> Property {
    Property {
        urn: "urn:samm:com.example.sensors:1.0.0#status",
        preferred_names: vec![
            LangText::new("en", "status"),
            LangText::new("de", "Status"),
        ],
        descriptions: vec![LangText::new("en", "Operational state of the sensor hub.")],
        see: vec![],
        characteristic: Characteristic {
            urn: "urn:samm:com.example.sensors:1.0.0#SensorStatus",
            preferred_names: vec![LangText::new("en", "sensor status")],
            descriptions: vec![LangText::new(
                "en",
                "The hub is online, offline, or degraded. New hubs start offline.",
            )],
            see: vec![],
            data_type: Some(DataType::Scalar(XsdType::String)),
            kind: CharacteristicKind::State {
                values: vec![
                    ScalarValue::Str("online"),
                    ScalarValue::Str("offline"),
                    ScalarValue::Str("degraded"),
                ],
                default_value: ScalarValue::Str("offline"),
            },
        },
        example_value: None,
        optional: false,
        not_in_payload: false,
        is_abstract: false,
        payload_name: None,
    }
}

fn reading() -> Property {
    Property {
        urn: "urn:samm:com.example.sensors:1.0.0#reading",
        preferred_names: vec![LangText::new("en", "reading")],
        descriptions: vec![LangText::new(
            "en",
            "The most recent reading: a numeric value, or an error code when \
             the measurement failed.",
        )],
        see: vec![],
        characteristic: Characteristic {
            urn: "urn:samm:com.example.sensors:1.0.0#SensorReading",
            preferred_names: vec![LangText::new("en", "sensor reading")],
            descriptions: vec![LangText::new(
                "en",
                "Either a numeric reading or an error code.",
            )],
            see: vec![],
            data_type: None,
            kind: CharacteristicKind::Either {
                left: Box::new(Characteristic {
                    urn: "urn:samm:com.example.sensors:1.0.0#NumericReading",
                    preferred_names: vec![LangText::new("en", "numeric reading")],
                    descriptions: vec![LangText::new(
                        "en",
                        "Scalar reading in the sensor's native unit.",
                    )],
                    see: vec![],
                    data_type: Some(DataType::Scalar(XsdType::Float)),
                    kind: CharacteristicKind::Quantifiable { unit: None },
                }),
                right: Box::new(Characteristic {
                    urn: "urn:samm:com.example.sensors:1.0.0#ErrorCode",
                    preferred_names: vec![LangText::new("en", "error code")],
                    descriptions: vec![LangText::new(
                        "en",
                        "Vendor-specific error code reported instead of a reading.",
                    )],
                    see: vec![],
                    data_type: Some(DataType::Scalar(XsdType::String)),
                    kind: CharacteristicKind::Code,
                }),
            },
        },
        example_value: None,
        optional: false,
        not_in_payload: false,
        is_abstract: false,
        payload_name: None,
    }
}

fn accuracy() -> Property {
    Property {
        urn: "urn:samm:com.example.sensors:1.0.0#accuracy",
        preferred_names: vec![LangText::new("en", "accuracy")],
        descriptions: vec![LangText::new(
            "en",
            "Measurement accuracy as a percentage between 0 and 100.",
        )],
        see: vec![],
        characteristic: Characteristic {
            urn: "urn:samm:com.example.sensors:1.0.0#AccuracyTrait",
            preferred_names: vec![LangText::new("en", "accuracy trait")],
            descriptions: vec![LangText::new(
                "en",
                "Restricts the accuracy percentage to the interval [0, 100].",
            )],
            see: vec![],
            data_type: None,
            kind: CharacteristicKind::Trait {
                base: Box::new(accuracy_percent_characteristic()),
                constraints: vec![Constraint::Range {
                    min: Some(ScalarValue::Float(0.0)),
                    max: Some(ScalarValue::Float(100.0)),
                    lower: BoundDefinition::AtLeast,
                    upper: BoundDefinition::AtMost,
                }],
            },
        },
        example_value: Some(ScalarValue::Float(99.5)),
        optional: false,
        not_in_payload: false,
        is_abstract: false,
        payload_name: None,
    }
}

fn display_language() -> Property {
    Property {
        urn: "urn:samm:com.example.sensors:1.0.0#displayLanguage",
        preferred_names: vec![LangText::new("en", "display language")],
        descriptions: vec![LangText::new(
            "en",
            "Language used on the device display.",
        )],
        see: vec![],
        characteristic: Characteristic {
            urn: "urn:samm:com.example.sensors:1.0.0#DisplayLanguage",
            preferred_names: vec![LangText::new("en", "display language")],
            descriptions: vec![LangText::new(
                "en",
                "Text restricted to the German language.",
            )],
            see: vec![],
            data_type: None,
            kind: CharacteristicKind::Trait {
                base: Box::new(text_characteristic()),
                constraints: vec![Constraint::Language("de")],
            },
        },
        example_value: Some(ScalarValue::Str("de")),
        optional: true,
        not_in_payload: false,
        is_abstract: false,
        payload_name: None,
    }
}

fn raw_data() -> Property {
    Property {
        urn: "urn:samm:com.example.sensors:1.0.0#rawData",
        preferred_names: vec![LangText::new("en", "raw data")],
        descriptions: vec![LangText::new(
            "en",
            "Base64-encoded raw sample buffer; kept out of the payload and \
             retrieved through a separate channel.",
        )],
        see: vec![],
        characteristic: Characteristic {
            urn: "urn:samm:com.example.sensors:1.0.0#RawSensorData",
            preferred_names: vec![LangText::new("en", "raw sensor data")],
            descriptions: vec![LangText::new(
                "en",
                "Base64 text of at most 1024 characters.",
            )],
            see: vec![],
            data_type: None,
            kind: CharacteristicKind::Trait {
                base: Box::new(text_characteristic()),
                constraints: vec![
                    Constraint::Encoding(Encoding::Base64),
                    Constraint::Length {
                        min: None,
                        max: Some(1024),
                    },
                ],
            },
        },
        example_value: None,
        optional: false,
        not_in_payload: true,
        is_abstract: false,
        payload_name: None,
    }
}

fn temperature() -> Property {
    Property {
        urn: "urn:samm:com.example.sensors:1.0.0#temperature",
        preferred_names: vec![
            LangText::new("en", "temperature"),
            LangText::new("de", "Temperatur"),
        ],
        descriptions: vec![LangText::new(
            "en",
            "Ambient temperature at the sensor hub.",
        )],
        see: vec![],
        characteristic: Characteristic {
            urn: "urn:samm:com.example.sensors:1.0.0#CalibratedTemperature",
            preferred_names: vec![LangText::new("en", "calibrated temperature")],
            descriptions: vec![LangText::new(
                "en",
                "Temperature with three integer digits and two decimal places.",
            )],
            see: vec![],
            data_type: None,
            kind: CharacteristicKind::Trait {
                base: Box::new(Characteristic {
                    urn: "urn:samm:com.example.sensors:1.0.0#TemperatureMeasurement",
                    preferred_names: vec![LangText::new("en", "temperature measurement")],
                    descriptions: vec![LangText::new(
                        "en",
                        "Temperature measured in degrees Celsius.",
                    )],
                    see: vec![],
                    data_type: Some(DataType::Scalar(XsdType::Decimal)),
                    kind: CharacteristicKind::Measurement {
                        unit: "urn:samm:org.eclipse.esmf.samm:unit:2.1.0#degreeCelsius",
                    },
                }),
                constraints: vec![Constraint::FixedPoint {
                    scale: 2,
                    integer: 3,
                }],
            },
        },
        example_value: Some(ScalarValue::Float(23.5)),
        optional: true,
        not_in_payload: false,
        is_abstract: false,
        payload_name: Some("temp"),
    }
}

fn calibrate() -> Operation {
    Operation {
        urn: "urn:samm:com.example.sensors:1.0.0#calibrate",
        preferred_names: vec![LangText::new("en", "calibrate")],
        descriptions: vec![LangText::new(
            "en",
            "Runs a calibration cycle against a target accuracy.",
        )],
        see: vec![],
        input: vec![Property {
            urn: "urn:samm:com.example.sensors:1.0.0#targetAccuracy",
            preferred_names: vec![LangText::new("en", "target accuracy")],
            descriptions: vec![LangText::new(
                "en",
                "Accuracy percentage the calibration should reach.",
            )],
            see: vec![],
            characteristic: accuracy_percent_characteristic(),
            example_value: None,
            optional: false,
            not_in_payload: false,
            is_abstract: false,
            payload_name: None,
        }],
        output: Some(Property {
            urn: "urn:samm:com.example.sensors:1.0.0#calibrationSucceeded",
            preferred_names: vec![LangText::new("en", "calibration succeeded")],
            descriptions: vec![LangText::new(
                "en",
                "Whether the calibration cycle reached the target accuracy.",
            )],
            see: vec![],
            characteristic: boolean_characteristic(),
            example_value: None,
            optional: false,
            not_in_payload: false,
            is_abstract: false,
            payload_name: None,
        }),
    }
}

fn sensor_added() -> Event {
    Event {
        urn: "urn:samm:com.example.sensors:1.0.0#sensorAdded",
        preferred_names: vec![LangText::new("en", "sensor added")],
        descriptions: vec![LangText::new(
            "en",
            "Emitted when a sensor is added to the catalog.",
        )],
        see: vec![],
        parameters: vec![Property {
            urn: "urn:samm:com.example.sensors:1.0.0#addedSensor",
            preferred_names: vec![LangText::new("en", "added sensor")],
            descriptions: vec![LangText::new("en", "The sensor that was added.")],
            see: vec![],
            characteristic: sensor_entity_characteristic(),
            example_value: None,
            optional: false,
            not_in_payload: false,
            is_abstract: false,
            payload_name: None,
        }],
    }
}

fn entities() -> Vec<Entity> {
    vec![device_base(), sensor()]
}

fn device_base() -> Entity {
    Entity {
        urn: "urn:samm:com.example.sensors:1.0.0#DeviceBase",
        preferred_names: vec![LangText::new("en", "device base")],
        descriptions: vec![LangText::new(
            "en",
            "Abstract base for all addressable devices; carries the serial number.",
        )],
        see: vec![],
        properties: vec![Property {
            urn: "urn:samm:com.example.sensors:1.0.0#serialNumber",
            preferred_names: vec![
                LangText::new("en", "serial number"),
                LangText::new("de", "Seriennummer"),
            ],
            descriptions: vec![LangText::new(
                "en",
                "Manufacturer-assigned serial number.",
            )],
            see: vec![],
            characteristic: Characteristic {
                urn: "urn:samm:com.example.sensors:1.0.0#SerialNumberTrait",
                preferred_names: vec![LangText::new("en", "serial number trait")],
                descriptions: vec![LangText::new(
                    "en",
                    "Nine characters: two uppercase letters, a dash, six digits.",
                )],
                see: vec![],
                data_type: None,
                kind: CharacteristicKind::Trait {
                    base: Box::new(text_characteristic()),
                    constraints: vec![
                        Constraint::RegularExpression("^[A-Z]{2}-\\d{6}$"),
                        Constraint::Length {
                            min: Some(9),
                            max: Some(9),
                        },
                    ],
                },
            },
            example_value: Some(ScalarValue::Str("SN-000142")),
            optional: false,
            not_in_payload: false,
            is_abstract: false,
            payload_name: None,
        }],
        is_abstract: true,
        extends: None,
    }
}

fn sensor() -> Entity {
    Entity {
        urn: "urn:samm:com.example.sensors:1.0.0#Sensor",
        preferred_names: vec![
            LangText::new("en", "sensor"),
            LangText::new("de", "Sensor"),
        ],
        descriptions: vec![LangText::new(
            "en",
            "A single sensor with its type, last reading time and display name.",
        )],
        see: vec![],
        properties: vec![
            Property {
                urn: "urn:samm:com.example.sensors:1.0.0#sensorType",
                preferred_names: vec![LangText::new("en", "sensor type")],
                descriptions: vec![LangText::new(
                    "en",
                    "The physical quantity the sensor measures.",
                )],
                see: vec![],
                characteristic: Characteristic {
                    urn: "urn:samm:com.example.sensors:1.0.0#SensorTypeEnumeration",
                    preferred_names: vec![LangText::new("en", "sensor type enumeration")],
                    descriptions: vec![LangText::new(
                        "en",
                        "The supported sensor types.",
                    )],
                    see: vec![],
                    data_type: Some(DataType::Scalar(XsdType::String)),
                    kind: CharacteristicKind::Enumeration {
                        values: vec![
                            ScalarValue::Str("temperature"),
                            ScalarValue::Str("pressure"),
                            ScalarValue::Str("humidity"),
                        ],
                    },
                },
                example_value: Some(ScalarValue::Str("temperature")),
                optional: false,
                not_in_payload: false,
                is_abstract: false,
                payload_name: None,
            },
            Property {
                urn: "urn:samm:com.example.sensors:1.0.0#lastReading",
                preferred_names: vec![LangText::new("en", "last reading")],
                descriptions: vec![LangText::new(
                    "en",
                    "Point in time of the most recent reading.",
                )],
                see: vec![],
                characteristic: timestamp_characteristic(),
                example_value: None,
                optional: true,
                not_in_payload: false,
                is_abstract: false,
                payload_name: None,
            },
            Property {
                urn: "urn:samm:com.example.sensors:1.0.0#displayName",
                preferred_names: vec![LangText::new("en", "display name")],
                descriptions: vec![LangText::new(
                    "en",
                    "Localized human-readable name of the sensor.",
                )],
                see: vec![],
                characteristic: Characteristic {
                    urn: "urn:samm:com.example.sensors:1.0.0#LocalizedName",
                    preferred_names: vec![LangText::new("en", "localized name")],
                    descriptions: vec![LangText::new(
                        "en",
                        "Multi-language text restricted to the de-DE locale.",
                    )],
                    see: vec![],
                    data_type: None,
                    kind: CharacteristicKind::Trait {
                        base: Box::new(multi_language_text_characteristic()),
                        constraints: vec![Constraint::Locale("de-DE")],
                    },
                },
                example_value: None,
                optional: true,
                not_in_payload: false,
                is_abstract: false,
                payload_name: None,
            },
        ],
        is_abstract: false,
        extends: Some("urn:samm:com.example.sensors:1.0.0#DeviceBase"),
    }
}

/// The `SingleEntity` characteristic shared by the collection element and the
/// `sensorAdded` event parameter.
fn sensor_entity_characteristic() -> Characteristic {
    Characteristic {
        urn: "urn:samm:com.example.sensors:1.0.0#SensorEntity",
        preferred_names: vec![LangText::new("en", "sensor entity")],
        descriptions: vec![LangText::new("en", "A single sensor instance.")],
        see: vec![],
        data_type: Some(DataType::Entity("urn:samm:com.example.sensors:1.0.0#Sensor")),
        kind: CharacteristicKind::SingleEntity,
    }
}

fn accuracy_percent_characteristic() -> Characteristic {
    Characteristic {
        urn: "urn:samm:com.example.sensors:1.0.0#AccuracyPercent",
        preferred_names: vec![LangText::new("en", "accuracy percent")],
        descriptions: vec![LangText::new(
            "en",
            "Accuracy expressed as a percentage.",
        )],
        see: vec![],
        data_type: Some(DataType::Scalar(XsdType::Float)),
        kind: CharacteristicKind::Quantifiable {
            unit: Some("urn:samm:org.eclipse.esmf.samm:unit:2.1.0#percent"),
        },
    }
}

/// The `samm-c:Text` standard library characteristic.
fn text_characteristic() -> Characteristic {
    Characteristic {
        urn: vocabulary::SAMM_C_TEXT,
        preferred_names: vec![LangText::new("en", "Text")],
        descriptions: vec![LangText::new(
            "en",
            "Describes a property which contains plain text.",
        )],
        see: vec![],
        data_type: Some(DataType::Scalar(XsdType::String)),
        kind: CharacteristicKind::Single,
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

/// The `samm-c:Timestamp` standard library characteristic.
fn timestamp_characteristic() -> Characteristic {
    Characteristic {
        urn: vocabulary::SAMM_C_TIMESTAMP,
        preferred_names: vec![LangText::new("en", "Timestamp")],
        descriptions: vec![LangText::new(
            "en",
            "Describes a property which contains the date and time with an optional timezone.",
        )],
        see: vec![],
        data_type: Some(DataType::Scalar(XsdType::DateTime)),
        kind: CharacteristicKind::Single,
    }
}

/// The `samm-c:MultiLanguageText` standard library characteristic.
fn multi_language_text_characteristic() -> Characteristic {
    Characteristic {
        urn: vocabulary::SAMM_C_MULTI_LANGUAGE_TEXT,
        preferred_names: vec![LangText::new("en", "Multi-Language Text")],
        descriptions: vec![LangText::new(
            "en",
            "Describes a property which contains plain text in multiple languages.",
        )],
        see: vec![],
        data_type: Some(DataType::Scalar(XsdType::LangString)),
        kind: CharacteristicKind::Single,
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn inventory_counts() {
        let model = model();
        assert_eq!(model.aspect.properties.len(), 8);
        assert_eq!(model.aspect.operations.len(), 1);
        assert_eq!(model.aspect.events.len(), 1);
        assert_eq!(model.entity_count(), 2);
        assert_eq!(model.units.len(), 2);
    }

    #[test]
    fn abstract_entity_is_extended_by_concrete_one() {
        let model = model();
        let base = model
            .find_entity("urn:samm:com.example.sensors:1.0.0#DeviceBase")
            .map(|e| e.is_abstract);
        assert_eq!(base, Some(true));
        let sensor = model
            .find_entity("urn:samm:com.example.sensors:1.0.0#Sensor")
            .and_then(|e| e.extends);
        assert_eq!(
            sensor,
            Some("urn:samm:com.example.sensors:1.0.0#DeviceBase")
        );
    }

    #[test]
    fn structured_value_rule_matches_its_example() {
        let model = model();
        let prop = model
            .find_property("urn:samm:com.example.sensors:1.0.0#firmwareVersion")
            .map(|p| &p.characteristic.kind);
        match prop {
            Some(CharacteristicKind::StructuredValue {
                deconstruction_rule,
                elements,
            }) => {
                // Three capture groups, three elements.
                let groups = deconstruction_rule.matches('(').count();
                assert_eq!(groups, elements.len());
            }
            other => panic!("firmwareVersion is not a StructuredValue: {other:?}"),
        }
    }

    #[test]
    fn payload_name_override_is_present() {
        let model = model();
        let prop = model
            .find_property("urn:samm:com.example.sensors:1.0.0#temperature")
            .map(Property::effective_payload_name);
        assert_eq!(prop, Some("temp"));
    }

    #[test]
    fn shared_characteristics_are_deduplicated() {
        let model = model();
        let urns: Vec<&str> = model.characteristics().iter().map(|c| c.urn).collect();
        let mut deduped = urns.clone();
        deduped.dedup();
        assert_eq!(urns, deduped);
        // AccuracyPercent is used by both `accuracy` (as trait base) and the
        // calibrate operation input; it must appear exactly once.
        let count = urns
            .iter()
            .filter(|u| u.ends_with("#AccuracyPercent"))
            .count();
        assert_eq!(count, 1);
    }
}
