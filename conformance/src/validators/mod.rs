//! Conformance validators.
//!
//! - [`inventory`] — model invariants: URN uniqueness and syntax, language
//!   tag discipline, characteristic and constraint well-formedness
//! - [`turtle`] — structural checks on emitted Turtle
//! - [`rust_source`] — generated Rust source standards

pub mod inventory;
pub mod rust_source;
pub mod turtle;
