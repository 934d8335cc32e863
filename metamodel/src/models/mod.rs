//! Sample aspect models encoded as static data.
//!
//! Each submodule assembles one complete [`AspectModel`](crate::AspectModel)
//! and caches it behind a `OnceLock`. These models double as the reference
//! fixtures for the code generator and the conformance suite:
//!
//! - [`movement`] — the canonical Movement aspect: booleans, measurements
//!   with units, an entity-valued position, and an enumeration.
//! - [`sensor_catalog`] — exercises the rest of the characteristic catalog:
//!   collections, traits with constraints, structured values, `Either`,
//!   states, codes, entity inheritance, operations, and events.

pub mod movement;
pub mod sensor_catalog;

/// Returns every shipped sample model, in stable order.
#[must_use]
pub fn all() -> Vec<&'static crate::AspectModel> {
    vec![movement::model(), sensor_catalog::model()]
}
