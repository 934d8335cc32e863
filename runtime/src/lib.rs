//! Runtime support types for generated SAMM aspect model classes.
//!
//! Generated code (see `samm-codegen`) links against this crate: every
//! generated aspect or entity struct has a `Meta*` companion implementing
//! [`StaticMetaClass`] and [`PropertyContainer`], with one [`StaticProperty`]
//! constant per property. Applications use [`ModelElement`],
//! [`DefaultCharacteristic`], and [`MultiLanguageText`] to assemble
//! descriptive metadata at runtime.
//!
//! ```
//! use samm_runtime::ModelElement;
//!
//! let element = ModelElement::new("Movement")
//!     .with_preferred_name("en", "movement")
//!     .with_description("en", "Aspect for movement information.");
//! assert_eq!(element.preferred_names().get("en"), Some("movement"));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod either;
pub mod element;
pub mod error;
pub mod lang;
pub mod property;
pub mod traits;

pub use either::Either;
pub use element::{DefaultCharacteristic, ModelElement};
pub use error::InvalidEnumValue;
pub use lang::{LangString, MultiLanguageText};
pub use property::{CharacteristicDesc, PropertyDesc, StaticProperty};
pub use traits::{PropertyContainer, StaticMetaClass};
