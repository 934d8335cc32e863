//! Static property descriptors.

use core::marker::PhantomData;

/// Erased descriptor data of a generated property.
///
/// All fields are `'static` so generated code can declare descriptors as
/// `const` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDesc {
    /// Full URN of the property.
    pub urn: &'static str,
    /// Element name (the URN fragment).
    pub name: &'static str,
    /// Payload key override, if the model declares one.
    pub payload_name: Option<&'static str>,
    /// Whether the property may be absent from the payload.
    pub optional: bool,
    /// Whether the property is excluded from the payload entirely.
    pub not_in_payload: bool,
    /// Whether the property is abstract.
    pub is_abstract: bool,
    /// Lexical form of the example value, if declared.
    pub example_value: Option<&'static str>,
    /// Descriptor of the property's characteristic.
    pub characteristic: CharacteristicDesc,
}

impl PropertyDesc {
    /// Returns the key under which the property appears in the payload.
    #[must_use]
    pub const fn effective_payload_name(&self) -> &'static str {
        match self.payload_name {
            Some(name) => name,
            None => self.name,
        }
    }
}

/// Erased descriptor of a generated characteristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacteristicDesc {
    /// Full URN of the characteristic.
    pub urn: &'static str,
    /// Element name (the URN fragment).
    pub name: &'static str,
    /// Full URN/IRI of the value's data type, if the characteristic has one.
    pub data_type_urn: Option<&'static str>,
}

/// An opaque, typed property descriptor.
///
/// The type parameters tie the descriptor to its containing class `C` and
/// the Rust type `T` of the property's value; they exist purely as a typing
/// contract and carry no data.
#[derive(Debug)]
pub struct StaticProperty<C, T> {
    desc: PropertyDesc,
    _marker: PhantomData<fn() -> (C, T)>,
}

impl<C, T> StaticProperty<C, T> {
    /// Creates a typed descriptor from its erased data.
    #[must_use]
    pub const fn new(desc: PropertyDesc) -> Self {
        Self {
            desc,
            _marker: PhantomData,
        }
    }

    /// Returns the erased descriptor data.
    #[must_use]
    pub const fn desc(&self) -> PropertyDesc {
        self.desc
    }

    /// Returns the full URN of the property.
    #[must_use]
    pub const fn urn(&self) -> &'static str {
        self.desc.urn
    }

    /// Returns the element name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.desc.name
    }

    /// Returns the key under which the property appears in the payload.
    #[must_use]
    pub const fn payload_name(&self) -> &'static str {
        self.desc.effective_payload_name()
    }

    /// Whether the property may be absent from the payload.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        self.desc.optional
    }

    /// Whether the property is excluded from the payload entirely.
    #[must_use]
    pub const fn is_not_in_payload(&self) -> bool {
        self.desc.not_in_payload
    }

    /// Whether the property is abstract.
    #[must_use]
    pub const fn is_abstract(&self) -> bool {
        self.desc.is_abstract
    }

    /// Returns the lexical form of the example value, if declared.
    #[must_use]
    pub const fn example_value(&self) -> Option<&'static str> {
        self.desc.example_value
    }

    /// Returns the descriptor of the property's characteristic.
    #[must_use]
    pub const fn characteristic(&self) -> CharacteristicDesc {
        self.desc.characteristic
    }
}

// Manual impls: derives would add unwanted `C: Clone` style bounds on the
// phantom parameters.
impl<C, T> Clone for StaticProperty<C, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, T> Copy for StaticProperty<C, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    struct Movement;

    const IS_MOVING: StaticProperty<Movement, bool> = StaticProperty::new(PropertyDesc {
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

    #[test]
    fn typed_descriptor_exposes_its_data() {
        assert_eq!(IS_MOVING.name(), "isMoving");
        assert_eq!(IS_MOVING.payload_name(), "isMoving");
        assert!(!IS_MOVING.is_optional());
        assert_eq!(IS_MOVING.example_value(), Some("true"));
        assert_eq!(IS_MOVING.characteristic().name, "Boolean");
    }

    #[test]
    fn payload_name_override_wins() {
        const TEMP: StaticProperty<Movement, f64> = StaticProperty::new(PropertyDesc {
            payload_name: Some("temp"),
            name: "temperature",
            urn: "urn:samm:com.example.sensors:1.0.0#temperature",
            optional: true,
            not_in_payload: false,
            is_abstract: false,
            example_value: None,
            characteristic: CharacteristicDesc {
                urn: "urn:samm:com.example.sensors:1.0.0#CalibratedTemperature",
                name: "CalibratedTemperature",
                data_type_urn: Some("http://www.w3.org/2001/XMLSchema#decimal"),
            },
        });
        assert_eq!(TEMP.payload_name(), "temp");
    }
}
