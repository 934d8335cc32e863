//! Core aspect model element types.
//!
//! These types represent a SAMM aspect model as typed Rust data. All instances
//! are built as owned `Vec`s and referenced via borrows; sample models are
//! assembled once and cached behind `OnceLock` (see [`crate::models`]).
//!
//! Elements reference each other by URN (`&'static str`), never by pointer;
//! nesting is used only where the meta-model itself nests (a property owns its
//! characteristic, a trait owns its base characteristic).

use crate::vocabulary;

/// A human-readable string tagged with a BCP-47 language code.
///
/// Collections of `LangText` represent the multi-language preferred names and
/// descriptions of a model element. Within one collection a language tag
/// identifies at most one entry; the conformance inventory validator enforces
/// this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LangText {
    /// The text value.
    pub value: &'static str,
    /// BCP-47 language tag (e.g., `"en"`, `"de"`, `"en-US"`).
    pub language_tag: &'static str,
}

impl LangText {
    /// Creates a language-tagged text entry.
    #[must_use]
    pub const fn new(language_tag: &'static str, value: &'static str) -> Self {
        Self {
            value,
            language_tag,
        }
    }
}

/// The closed set of XSD scalar types used by aspect models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum XsdType {
    /// `xsd:string`.
    String,
    /// `xsd:boolean`.
    Boolean,
    /// `xsd:decimal`.
    Decimal,
    /// `xsd:integer`.
    Integer,
    /// `xsd:int`.
    Int,
    /// `xsd:long`.
    Long,
    /// `xsd:short`.
    Short,
    /// `xsd:byte`.
    Byte,
    /// `xsd:unsignedInt`.
    UnsignedInt,
    /// `xsd:unsignedLong`.
    UnsignedLong,
    /// `xsd:nonNegativeInteger`.
    NonNegativeInteger,
    /// `xsd:positiveInteger`.
    PositiveInteger,
    /// `xsd:float`.
    Float,
    /// `xsd:double`.
    Double,
    /// `xsd:dateTime`.
    DateTime,
    /// `xsd:date`.
    Date,
    /// `xsd:time`.
    Time,
    /// `xsd:duration`.
    Duration,
    /// `xsd:anyURI`.
    AnyUri,
    /// `samm:curie` — a compact URI reference.
    Curie,
    /// `rdf:langString` — a language-tagged string.
    LangString,
}

impl XsdType {
    /// Returns the full IRI of the datatype.
    #[must_use]
    pub fn as_iri(self) -> &'static str {
        match self {
            XsdType::String => vocabulary::XSD_STRING,
            XsdType::Boolean => vocabulary::XSD_BOOLEAN,
            XsdType::Decimal => vocabulary::XSD_DECIMAL,
            XsdType::Integer => vocabulary::XSD_INTEGER,
            XsdType::Int => vocabulary::XSD_INT,
            XsdType::Long => vocabulary::XSD_LONG,
            XsdType::Short => vocabulary::XSD_SHORT,
            XsdType::Byte => vocabulary::XSD_BYTE,
            XsdType::UnsignedInt => vocabulary::XSD_UNSIGNED_INT,
            XsdType::UnsignedLong => vocabulary::XSD_UNSIGNED_LONG,
            XsdType::NonNegativeInteger => vocabulary::XSD_NON_NEGATIVE_INTEGER,
            XsdType::PositiveInteger => vocabulary::XSD_POSITIVE_INTEGER,
            XsdType::Float => vocabulary::XSD_FLOAT,
            XsdType::Double => vocabulary::XSD_DOUBLE,
            XsdType::DateTime => vocabulary::XSD_DATE_TIME,
            XsdType::Date => vocabulary::XSD_DATE,
            XsdType::Time => vocabulary::XSD_TIME,
            XsdType::Duration => vocabulary::XSD_DURATION,
            XsdType::AnyUri => vocabulary::XSD_ANY_URI,
            XsdType::Curie => vocabulary::SAMM_CURIE,
            XsdType::LangString => vocabulary::RDF_LANG_STRING,
        }
    }

    /// Returns the prefixed Turtle form of the datatype (e.g., `"xsd:string"`).
    #[must_use]
    pub fn as_prefixed(self) -> &'static str {
        match self {
            XsdType::String => "xsd:string",
            XsdType::Boolean => "xsd:boolean",
            XsdType::Decimal => "xsd:decimal",
            XsdType::Integer => "xsd:integer",
            XsdType::Int => "xsd:int",
            XsdType::Long => "xsd:long",
            XsdType::Short => "xsd:short",
            XsdType::Byte => "xsd:byte",
            XsdType::UnsignedInt => "xsd:unsignedInt",
            XsdType::UnsignedLong => "xsd:unsignedLong",
            XsdType::NonNegativeInteger => "xsd:nonNegativeInteger",
            XsdType::PositiveInteger => "xsd:positiveInteger",
            XsdType::Float => "xsd:float",
            XsdType::Double => "xsd:double",
            XsdType::DateTime => "xsd:dateTime",
            XsdType::Date => "xsd:date",
            XsdType::Time => "xsd:time",
            XsdType::Duration => "xsd:duration",
            XsdType::AnyUri => "xsd:anyURI",
            XsdType::Curie => "samm:curie",
            XsdType::LangString => "rdf:langString",
        }
    }

    /// Returns true if the type is numeric (integer or floating point).
    #[must_use]
    pub fn is_numeric(self) -> bool {
        !matches!(
            self,
            XsdType::String
                | XsdType::Boolean
                | XsdType::DateTime
                | XsdType::Date
                | XsdType::Time
                | XsdType::Duration
                | XsdType::AnyUri
                | XsdType::Curie
                | XsdType::LangString
        )
    }
}

/// The value type a characteristic describes: an XSD scalar or an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// An XSD scalar datatype.
    Scalar(XsdType),
    /// A reference to an [`Entity`] by its full URN.
    Entity(&'static str),
}

/// A literal value used as an example value or an enumeration value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ScalarValue {
    /// A string literal.
    Str(&'static str),
    /// An integer literal.
    Int(i64),
    /// A floating point literal.
    Float(f64),
    /// A boolean literal.
    Bool(bool),
}

impl ScalarValue {
    /// Renders the bare lexical form of the value (no quoting, no datatype).
    #[must_use]
    pub fn lexical(&self) -> String {
        match self {
            ScalarValue::Str(s) => (*s).to_string(),
            ScalarValue::Int(n) => n.to_string(),
            ScalarValue::Float(x) => x.to_string(),
            ScalarValue::Bool(b) => b.to_string(),
        }
    }
}

/// Character encodings accepted by the encoding constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Encoding {
    /// US-ASCII.
    UsAscii,
    /// ISO-8859-1.
    Iso8859_1,
    /// UTF-8.
    Utf8,
    /// UTF-16.
    Utf16,
    /// Base64 (for binary payloads carried as text).
    Base64,
}

impl Encoding {
    /// Returns the canonical charset name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Encoding::UsAscii => "US-ASCII",
            Encoding::Iso8859_1 => "ISO-8859-1",
            Encoding::Utf8 => "UTF-8",
            Encoding::Utf16 => "UTF-16",
            Encoding::Base64 => "BASE64",
        }
    }
}

/// How a range constraint treats its boundary value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum BoundDefinition {
    /// No bound on this end.
    Open,
    /// Inclusive lower bound.
    AtLeast,
    /// Exclusive lower bound.
    GreaterThan,
    /// Inclusive upper bound.
    AtMost,
    /// Exclusive upper bound.
    LessThan,
}

impl BoundDefinition {
    /// Returns the meta-model name of the bound definition.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            BoundDefinition::Open => "OPEN",
            BoundDefinition::AtLeast => "AT_LEAST",
            BoundDefinition::GreaterThan => "GREATER_THAN",
            BoundDefinition::AtMost => "AT_MOST",
            BoundDefinition::LessThan => "LESS_THAN",
        }
    }
}

/// A restriction on the value space of a characteristic.
///
/// Constraints never appear on their own; they are attached to a base
/// characteristic through [`CharacteristicKind::Trait`].
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// Restricts a numeric value to an interval.
    Range {
        /// Lower boundary value, if bounded below.
        min: Option<ScalarValue>,
        /// Upper boundary value, if bounded above.
        max: Option<ScalarValue>,
        /// Treatment of the lower boundary.
        lower: BoundDefinition,
        /// Treatment of the upper boundary.
        upper: BoundDefinition,
    },
    /// Restricts the length of a string or the size of a collection.
    Length {
        /// Minimum length, if any.
        min: Option<u64>,
        /// Maximum length, if any.
        max: Option<u64>,
    },
    /// Restricts a string value to a regular expression.
    RegularExpression(&'static str),
    /// Restricts the character encoding of a string value.
    Encoding(Encoding),
    /// Restricts a language-tagged value to one language (BCP-47 tag).
    Language(&'static str),
    /// Restricts a language-tagged value to one locale (IETF BCP 47 locale).
    Locale(&'static str),
    /// Restricts a decimal value to a fixed number of integer and scale digits.
    FixedPoint {
        /// Number of digits to the right of the decimal point.
        scale: u32,
        /// Number of digits to the left of the decimal point.
        integer: u32,
    },
}

impl Constraint {
    /// Returns the `samm-c` class name of the constraint (e.g.,
    /// `"RangeConstraint"`).
    #[must_use]
    pub fn class_name(&self) -> &'static str {
        match self {
            Constraint::Range { .. } => "RangeConstraint",
            Constraint::Length { .. } => "LengthConstraint",
            Constraint::RegularExpression(_) => "RegularExpressionConstraint",
            Constraint::Encoding(_) => "EncodingConstraint",
            Constraint::Language(_) => "LanguageConstraint",
            Constraint::Locale(_) => "LocaleConstraint",
            Constraint::FixedPoint { .. } => "FixedPointConstraint",
        }
    }
}

/// The specific shape of a characteristic.
///
/// Together with [`Characteristic::data_type`] this determines how a
/// property's raw value is semantically interpreted and which Rust type the
/// code generator assigns to the property's field.
#[derive(Debug, Clone, PartialEq)]
pub enum CharacteristicKind {
    /// A plain characteristic with no additional structure (e.g., `Text`,
    /// `Boolean`, `Timestamp` from the standard library).
    Single,
    /// A value with an optional physical unit.
    Quantifiable {
        /// URN of the unit, if declared.
        unit: Option<&'static str>,
    },
    /// A measured value; the unit is mandatory.
    Measurement {
        /// URN of the unit.
        unit: &'static str,
    },
    /// A closed set of allowed values.
    Enumeration {
        /// The allowed values, in declaration order.
        values: Vec<ScalarValue>,
    },
    /// An enumeration that describes states, with a designated default.
    State {
        /// The allowed values, in declaration order.
        values: Vec<ScalarValue>,
        /// The default state; must be one of `values`.
        default_value: ScalarValue,
    },
    /// A group of values of a common element characteristic.
    Collection {
        /// Characteristic of the collection elements, if constrained.
        element: Option<Box<Characteristic>>,
        /// Whether element order is significant.
        ordered: bool,
        /// Whether duplicate elements are disallowed.
        unique: bool,
    },
    /// A string value with a well-defined internal structure, deconstructed
    /// by a regular expression into element properties.
    ///
    /// The number of capture groups in `deconstruction_rule` equals
    /// `elements.len()`; each capture group maps to the element property URN
    /// at the same position.
    StructuredValue {
        /// Regular expression with one capture group per element.
        deconstruction_rule: &'static str,
        /// URNs of the element properties, in capture-group order.
        elements: Vec<&'static str>,
    },
    /// A disjunction of two alternative characteristics. Carries no data
    /// type of its own; each alternative brings its own.
    Either {
        /// Characteristic of the left alternative.
        left: Box<Characteristic>,
        /// Characteristic of the right alternative.
        right: Box<Characteristic>,
    },
    /// A value that is an instance of a single entity.
    SingleEntity,
    /// An opaque code value (e.g., an error code) with no further semantics.
    Code,
    /// A base characteristic with one or more constraints layered on top.
    Trait {
        /// The constrained base characteristic.
        base: Box<Characteristic>,
        /// The constraints; at least one.
        constraints: Vec<Constraint>,
    },
}

impl CharacteristicKind {
    /// Returns the `samm-c` class name of the characteristic kind.
    #[must_use]
    pub fn class_name(&self) -> &'static str {
        match self {
            CharacteristicKind::Single => "Characteristic",
            CharacteristicKind::Quantifiable { .. } => "Quantifiable",
            CharacteristicKind::Measurement { .. } => "Measurement",
            CharacteristicKind::Enumeration { .. } => "Enumeration",
            CharacteristicKind::State { .. } => "State",
            CharacteristicKind::Collection {
                ordered, unique, ..
            } => match (*ordered, *unique) {
                (true, true) => "SortedSet",
                (true, false) => "List",
                (false, true) => "Set",
                (false, false) => "Collection",
            },
            CharacteristicKind::StructuredValue { .. } => "StructuredValue",
            CharacteristicKind::Either { .. } => "Either",
            CharacteristicKind::SingleEntity => "SingleEntity",
            CharacteristicKind::Code => "Code",
            CharacteristicKind::Trait { .. } => "Trait",
        }
    }
}

/// A characteristic: the semantic interpretation of a property's value.
#[derive(Debug, Clone, PartialEq)]
pub struct Characteristic {
    /// Full URN. Standard-library characteristics carry `samm-c` URNs;
    /// model-defined characteristics carry URNs in the model namespace.
    pub urn: &'static str,
    /// Multi-language preferred names.
    pub preferred_names: Vec<LangText>,
    /// Multi-language descriptions.
    pub descriptions: Vec<LangText>,
    /// Reference URLs.
    pub see: Vec<&'static str>,
    /// The value type. `None` only for kinds that delegate the type to
    /// nested characteristics (`Either`) or that have no scalar type.
    pub data_type: Option<DataType>,
    /// The specific shape.
    pub kind: CharacteristicKind,
}

impl Characteristic {
    /// Returns the element name (the URN fragment).
    #[must_use]
    pub fn name(&self) -> &'static str {
        fragment(self.urn)
    }

    /// Returns true if the characteristic comes from the `samm-c` standard
    /// library rather than from a model namespace.
    #[must_use]
    pub fn is_standard_library(&self) -> bool {
        self.urn.starts_with(vocabulary::PREFIX_SAMM_C)
    }

    /// Returns the effective data type, resolving through `Trait` bases.
    #[must_use]
    pub fn effective_data_type(&self) -> Option<DataType> {
        match &self.kind {
            CharacteristicKind::Trait { base, .. } => base.effective_data_type(),
            _ => self.data_type,
        }
    }

    /// Visits this characteristic and every characteristic nested below it,
    /// in declaration order.
    pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a Characteristic)) {
        f(self);
        match &self.kind {
            CharacteristicKind::Collection {
                element: Some(el), ..
            } => el.visit(f),
            CharacteristicKind::Either { left, right } => {
                left.visit(f);
                right.visit(f);
            }
            CharacteristicKind::Trait { base, .. } => base.visit(f),
            _ => {}
        }
    }
}

/// A property descriptor: a named slot of an aspect, entity, operation, or
/// event, together with the characteristic of its value.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Full URN.
    pub urn: &'static str,
    /// Multi-language preferred names.
    pub preferred_names: Vec<LangText>,
    /// Multi-language descriptions.
    pub descriptions: Vec<LangText>,
    /// Reference URLs.
    pub see: Vec<&'static str>,
    /// Characteristic of the property's value.
    pub characteristic: Characteristic,
    /// Example value, if declared.
    pub example_value: Option<ScalarValue>,
    /// Whether the property may be absent from the payload.
    pub optional: bool,
    /// Whether the property is excluded from the runtime payload entirely.
    pub not_in_payload: bool,
    /// Whether the property is abstract (declared on an abstract entity and
    /// given a characteristic only by extending entities).
    pub is_abstract: bool,
    /// Payload key override; defaults to the element name.
    pub payload_name: Option<&'static str>,
}

impl Property {
    /// Returns the element name (the URN fragment).
    #[must_use]
    pub fn name(&self) -> &'static str {
        fragment(self.urn)
    }

    /// Returns the key under which the property appears in the payload:
    /// the declared payload name, or the element name.
    #[must_use]
    pub fn effective_payload_name(&self) -> &'static str {
        self.payload_name.unwrap_or_else(|| self.name())
    }
}

/// An entity: a named, structured value type with properties.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Full URN.
    pub urn: &'static str,
    /// Multi-language preferred names.
    pub preferred_names: Vec<LangText>,
    /// Multi-language descriptions.
    pub descriptions: Vec<LangText>,
    /// Reference URLs.
    pub see: Vec<&'static str>,
    /// Properties declared directly on this entity.
    pub properties: Vec<Property>,
    /// Whether the entity is abstract (instantiable only through extension).
    pub is_abstract: bool,
    /// URN of the extended entity, if any. The target must be abstract.
    pub extends: Option<&'static str>,
}

impl Entity {
    /// Returns the element name (the URN fragment).
    #[must_use]
    pub fn name(&self) -> &'static str {
        fragment(self.urn)
    }
}

/// An operation offered by an aspect.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    /// Full URN.
    pub urn: &'static str,
    /// Multi-language preferred names.
    pub preferred_names: Vec<LangText>,
    /// Multi-language descriptions.
    pub descriptions: Vec<LangText>,
    /// Reference URLs.
    pub see: Vec<&'static str>,
    /// Input parameters.
    pub input: Vec<Property>,
    /// Output, if the operation returns a value.
    pub output: Option<Property>,
}

impl Operation {
    /// Returns the element name (the URN fragment).
    #[must_use]
    pub fn name(&self) -> &'static str {
        fragment(self.urn)
    }
}

/// An event emitted by an aspect.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Full URN.
    pub urn: &'static str,
    /// Multi-language preferred names.
    pub preferred_names: Vec<LangText>,
    /// Multi-language descriptions.
    pub descriptions: Vec<LangText>,
    /// Reference URLs.
    pub see: Vec<&'static str>,
    /// Event parameters.
    pub parameters: Vec<Property>,
}

impl Event {
    /// Returns the element name (the URN fragment).
    #[must_use]
    pub fn name(&self) -> &'static str {
        fragment(self.urn)
    }
}

/// The top-level aspect: the root element of an aspect model.
#[derive(Debug, Clone, PartialEq)]
pub struct Aspect {
    /// Full URN.
    pub urn: &'static str,
    /// Multi-language preferred names.
    pub preferred_names: Vec<LangText>,
    /// Multi-language descriptions.
    pub descriptions: Vec<LangText>,
    /// Reference URLs.
    pub see: Vec<&'static str>,
    /// Properties of the aspect, in payload order.
    pub properties: Vec<Property>,
    /// Operations of the aspect.
    pub operations: Vec<Operation>,
    /// Events of the aspect.
    pub events: Vec<Event>,
}

impl Aspect {
    /// Returns the element name (the URN fragment).
    #[must_use]
    pub fn name(&self) -> &'static str {
        fragment(self.urn)
    }
}

/// A physical unit referenced by quantifiable characteristics.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    /// Full URN (in the `unit` namespace).
    pub urn: &'static str,
    /// Human-readable name (e.g., `"kilometre per hour"`).
    pub name: &'static str,
    /// Symbol (e.g., `"km/h"`), if the unit has one.
    pub symbol: Option<&'static str>,
    /// UNECE common code, if assigned.
    pub code: Option<&'static str>,
    /// URN of the reference unit for derived units.
    pub reference_unit: Option<&'static str>,
    /// Conversion factor to the reference unit, as a lexical decimal.
    pub conversion_factor: Option<&'static str>,
    /// Names of the quantity kinds the unit measures (e.g., `"velocity"`).
    pub quantity_kinds: Vec<&'static str>,
}

impl Unit {
    /// Returns the element name (the URN fragment).
    #[must_use]
    pub fn name_fragment(&self) -> &'static str {
        fragment(self.urn)
    }
}

/// The versioned namespace a model's elements live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelNamespace {
    /// Dot-separated namespace (e.g., `"com.example.movement"`).
    pub namespace: &'static str,
    /// Namespace version (e.g., `"1.0.0"`).
    pub version: &'static str,
}

impl ModelNamespace {
    /// Returns the URN prefix of the namespace, ending in `#`.
    #[must_use]
    pub fn urn_prefix(&self) -> String {
        format!("urn:samm:{}:{}#", self.namespace, self.version)
    }
}

/// A complete aspect model: namespace, aspect, entities, and units.
#[derive(Debug, Clone, PartialEq)]
pub struct AspectModel {
    /// Version of the meta-model the model conforms to (e.g., `"2.1.0"`).
    pub meta_model_version: &'static str,
    /// The model namespace.
    pub namespace: ModelNamespace,
    /// The root aspect.
    pub aspect: Aspect,
    /// Entities referenced by the model, in declaration order.
    pub entities: Vec<Entity>,
    /// Units referenced by the model, in declaration order.
    pub units: Vec<Unit>,
}

impl AspectModel {
    /// Returns every property in the model: aspect properties, entity
    /// properties, operation inputs/outputs, and event parameters, in
    /// declaration order.
    #[must_use]
    pub fn all_properties(&self) -> Vec<&Property> {
        let mut props: Vec<&Property> = Vec::new();
        props.extend(self.aspect.properties.iter());
        for op in &self.aspect.operations {
            props.extend(op.input.iter());
            if let Some(out) = &op.output {
                props.push(out);
            }
        }
        for ev in &self.aspect.events {
            props.extend(ev.parameters.iter());
        }
        for entity in &self.entities {
            props.extend(entity.properties.iter());
        }
        props
    }

    /// Returns every distinct characteristic reachable from the model, in
    /// declaration order. Characteristics are deduplicated by URN.
    #[must_use]
    pub fn characteristics(&self) -> Vec<&Characteristic> {
        let mut seen: Vec<&'static str> = Vec::new();
        let mut out: Vec<&Characteristic> = Vec::new();
        for prop in self.all_properties() {
            prop.characteristic.visit(&mut |c| {
                if !seen.contains(&c.urn) {
                    seen.push(c.urn);
                    out.push(c);
                }
            });
        }
        out
    }

    /// Looks up a property by its full URN. Returns `None` if not found.
    #[must_use]
    pub fn find_property(&self, urn: &str) -> Option<&Property> {
        self.all_properties().into_iter().find(|p| p.urn == urn)
    }

    /// Looks up an entity by its full URN. Returns `None` if not found.
    #[must_use]
    pub fn find_entity(&self, urn: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.urn == urn)
    }

    /// Looks up a unit by its full URN. Returns `None` if not found.
    #[must_use]
    pub fn find_unit(&self, urn: &str) -> Option<&Unit> {
        self.units.iter().find(|u| u.urn == urn)
    }

    /// Returns the total number of properties in the model.
    #[must_use]
    pub fn property_count(&self) -> usize {
        self.all_properties().len()
    }

    /// Returns the number of entities in the model.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Returns the number of distinct characteristics in the model.
    #[must_use]
    pub fn characteristic_count(&self) -> usize {
        self.characteristics().len()
    }

    /// Returns the sorted set of language tags used anywhere in the model.
    #[must_use]
    pub fn language_tags(&self) -> Vec<&'static str> {
        let mut tags: Vec<&'static str> = Vec::new();
        let mut add = |texts: &[LangText]| {
            for t in texts {
                if !tags.contains(&t.language_tag) {
                    tags.push(t.language_tag);
                }
            }
        };
        add(&self.aspect.preferred_names);
        add(&self.aspect.descriptions);
        for prop in self.all_properties() {
            add(&prop.preferred_names);
            add(&prop.descriptions);
        }
        for entity in &self.entities {
            add(&entity.preferred_names);
            add(&entity.descriptions);
        }
        for c in self.characteristics() {
            add(&c.preferred_names);
            add(&c.descriptions);
        }
        tags.sort_unstable();
        tags
    }
}

/// Extracts the element name from a full URN (the part after `#`).
#[must_use]
pub fn fragment(urn: &str) -> &str {
    urn.rsplit('#').next().unwrap_or(urn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_extraction() {
        assert_eq!(
            fragment("urn:samm:com.example.movement:1.0.0#Movement"),
            "Movement"
        );
        assert_eq!(fragment("no-fragment"), "no-fragment");
    }

    #[test]
    fn effective_payload_name_falls_back_to_element_name() {
        let prop = Property {
            urn: "urn:samm:com.example.movement:1.0.0#isMoving",
            preferred_names: vec![],
            descriptions: vec![],
            see: vec![],
            characteristic: Characteristic {
                urn: crate::vocabulary::SAMM_C_BOOLEAN,
                preferred_names: vec![],
                descriptions: vec![],
                see: vec![],
                data_type: Some(DataType::Scalar(XsdType::Boolean)),
                kind: CharacteristicKind::Single,
            },
            example_value: None,
            optional: false,
            not_in_payload: false,
            is_abstract: false,
            payload_name: None,
        };
        assert_eq!(prop.effective_payload_name(), "isMoving");
    }

    #[test]
    fn trait_resolves_effective_data_type_through_base() {
        let c = Characteristic {
            urn: "urn:samm:com.example.sensors:1.0.0#AccuracyTrait",
            preferred_names: vec![],
            descriptions: vec![],
            see: vec![],
            data_type: None,
            kind: CharacteristicKind::Trait {
                base: Box::new(Characteristic {
                    urn: "urn:samm:com.example.sensors:1.0.0#AccuracyPercent",
                    preferred_names: vec![],
                    descriptions: vec![],
                    see: vec![],
                    data_type: Some(DataType::Scalar(XsdType::Float)),
                    kind: CharacteristicKind::Quantifiable { unit: None },
                }),
                constraints: vec![Constraint::Range {
                    min: Some(ScalarValue::Float(0.0)),
                    max: Some(ScalarValue::Float(100.0)),
                    lower: BoundDefinition::AtLeast,
                    upper: BoundDefinition::AtMost,
                }],
            },
        };
        assert_eq!(
            c.effective_data_type(),
            Some(DataType::Scalar(XsdType::Float))
        );
    }

    #[test]
    fn collection_class_names_follow_order_and_uniqueness() {
        let mk = |ordered, unique| CharacteristicKind::Collection {
            element: None,
            ordered,
            unique,
        };
        assert_eq!(mk(false, false).class_name(), "Collection");
        assert_eq!(mk(true, false).class_name(), "List");
        assert_eq!(mk(false, true).class_name(), "Set");
        assert_eq!(mk(true, true).class_name(), "SortedSet");
    }
}
