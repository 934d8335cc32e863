//! The subset of the unit catalog referenced by the sample models.
//!
//! Units live in the `unit:` namespace. Only the entries the shipped models
//! need are encoded; the full catalog is out of scope.

use crate::model::Unit;

/// `unit:metre` — SI base unit of length.
#[must_use]
pub fn metre() -> Unit {
    Unit {
        urn: "urn:samm:org.eclipse.esmf.samm:unit:2.1.0#metre",
        name: "metre",
        symbol: Some("m"),
        code: Some("MTR"),
        reference_unit: None,
        conversion_factor: None,
        quantity_kinds: vec!["length"],
    }
}

/// `unit:kilometrePerHour` — derived unit of velocity.
#[must_use]
pub fn kilometre_per_hour() -> Unit {
    Unit {
        urn: "urn:samm:org.eclipse.esmf.samm:unit:2.1.0#kilometrePerHour",
        name: "kilometre per hour",
        symbol: Some("km/h"),
        code: Some("KMH"),
        reference_unit: Some("urn:samm:org.eclipse.esmf.samm:unit:2.1.0#metrePerSecond"),
        conversion_factor: Some("0.277778"),
        quantity_kinds: vec!["velocity"],
    }
}

/// `unit:degreeUnitOfAngle` — unit of plane angle.
#[must_use]
pub fn degree_unit_of_angle() -> Unit {
    Unit {
        urn: "urn:samm:org.eclipse.esmf.samm:unit:2.1.0#degreeUnitOfAngle",
        name: "degree [unit of angle]",
        symbol: Some("°"),
        code: Some("DD"),
        reference_unit: Some("urn:samm:org.eclipse.esmf.samm:unit:2.1.0#radian"),
        conversion_factor: Some("0.0174533"),
        quantity_kinds: vec!["angle (plane angle)"],
    }
}

/// `unit:percent` — dimensionless ratio.
#[must_use]
pub fn percent() -> Unit {
    Unit {
        urn: "urn:samm:org.eclipse.esmf.samm:unit:2.1.0#percent",
        name: "percent",
        symbol: Some("%"),
        code: Some("P1"),
        reference_unit: None,
        conversion_factor: None,
        quantity_kinds: vec!["dimensionless"],
    }
}

/// `unit:degreeCelsius` — unit of temperature.
#[must_use]
pub fn degree_celsius() -> Unit {
    Unit {
        urn: "urn:samm:org.eclipse.esmf.samm:unit:2.1.0#degreeCelsius",
        name: "degree Celsius",
        symbol: Some("°C"),
        code: Some("CEL"),
        reference_unit: Some("urn:samm:org.eclipse.esmf.samm:unit:2.1.0#kelvin"),
        conversion_factor: None,
        quantity_kinds: vec!["temperature"],
    }
}
