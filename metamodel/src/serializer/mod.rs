//! Serializers for aspect models.
//!
//! Two output formats are supported:
//! - **Turtle** ([`turtle`]) — the aspect model itself in SAMM's Turtle
//!   syntax, for RDF tooling and human review
//! - **Payload** ([`payload`]) — an example JSON payload of the aspect, with
//!   declared example values filled in

pub mod payload;
pub mod turtle;
