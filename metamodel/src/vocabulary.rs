//! Meta-model vocabulary constants.
//!
//! URN prefixes of the SAMM meta-model namespaces and the full IRIs of the
//! XSD datatypes used by aspect models. All element URNs in sample models and
//! serializer output are built from these constants.

/// Version of the SAMM meta-model this crate encodes.
pub const SAMM_VERSION: &str = "2.1.0";

/// `samm:` — the core meta-model namespace.
pub const PREFIX_SAMM: &str = "urn:samm:org.eclipse.esmf.samm:meta-model:2.1.0#";
/// `samm-c:` — the characteristic catalog namespace.
pub const PREFIX_SAMM_C: &str = "urn:samm:org.eclipse.esmf.samm:characteristic:2.1.0#";
/// `samm-e:` — the shared entity namespace.
pub const PREFIX_SAMM_E: &str = "urn:samm:org.eclipse.esmf.samm:entity:2.1.0#";
/// `unit:` — the unit catalog namespace.
pub const PREFIX_UNIT: &str = "urn:samm:org.eclipse.esmf.samm:unit:2.1.0#";

// Standard-library characteristics referenced by the sample models.
/// `samm-c:Text`.
pub const SAMM_C_TEXT: &str = "urn:samm:org.eclipse.esmf.samm:characteristic:2.1.0#Text";
/// `samm-c:Boolean`.
pub const SAMM_C_BOOLEAN: &str = "urn:samm:org.eclipse.esmf.samm:characteristic:2.1.0#Boolean";
/// `samm-c:Timestamp`.
pub const SAMM_C_TIMESTAMP: &str = "urn:samm:org.eclipse.esmf.samm:characteristic:2.1.0#Timestamp";
/// `samm-c:MultiLanguageText`.
pub const SAMM_C_MULTI_LANGUAGE_TEXT: &str =
    "urn:samm:org.eclipse.esmf.samm:characteristic:2.1.0#MultiLanguageText";

// W3C namespaces.
/// XSD namespace.
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
/// RDF namespace.
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

// XSD datatypes.
/// `xsd:string`.
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
/// `xsd:boolean`.
pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
/// `xsd:decimal`.
pub const XSD_DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
/// `xsd:integer`.
pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
/// `xsd:int`.
pub const XSD_INT: &str = "http://www.w3.org/2001/XMLSchema#int";
/// `xsd:long`.
pub const XSD_LONG: &str = "http://www.w3.org/2001/XMLSchema#long";
/// `xsd:short`.
pub const XSD_SHORT: &str = "http://www.w3.org/2001/XMLSchema#short";
/// `xsd:byte`.
pub const XSD_BYTE: &str = "http://www.w3.org/2001/XMLSchema#byte";
/// `xsd:unsignedInt`.
pub const XSD_UNSIGNED_INT: &str = "http://www.w3.org/2001/XMLSchema#unsignedInt";
/// `xsd:unsignedLong`.
pub const XSD_UNSIGNED_LONG: &str = "http://www.w3.org/2001/XMLSchema#unsignedLong";
/// `xsd:nonNegativeInteger`.
pub const XSD_NON_NEGATIVE_INTEGER: &str =
    "http://www.w3.org/2001/XMLSchema#nonNegativeInteger";
/// `xsd:positiveInteger`.
pub const XSD_POSITIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#positiveInteger";
/// `xsd:float`.
pub const XSD_FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";
/// `xsd:double`.
pub const XSD_DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
/// `xsd:dateTime`.
pub const XSD_DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
/// `xsd:date`.
pub const XSD_DATE: &str = "http://www.w3.org/2001/XMLSchema#date";
/// `xsd:time`.
pub const XSD_TIME: &str = "http://www.w3.org/2001/XMLSchema#time";
/// `xsd:duration`.
pub const XSD_DURATION: &str = "http://www.w3.org/2001/XMLSchema#duration";
/// `xsd:anyURI`.
pub const XSD_ANY_URI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";
/// `samm:curie`.
pub const SAMM_CURIE: &str = "urn:samm:org.eclipse.esmf.samm:meta-model:2.1.0#curie";
/// `rdf:langString`.
pub const RDF_LANG_STRING: &str =
    "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
