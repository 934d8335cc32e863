//! Aspect model URN handling.
//!
//! Every model element is identified by a URN of the form:
//!
//! ```text
//! urn:samm:<namespace>:<version>#<element>
//! ```
//!
//! where `<namespace>` is a dot-separated reverse-domain name, optionally
//! followed by a colon-separated section for meta-model namespaces
//! (e.g., `org.eclipse.esmf.samm:characteristic`), `<version>` is a
//! `major.minor.micro` triple, and `<element>` is the element name.

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// Error produced when parsing a model URN fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrnParseError {
    /// The input does not start with `urn:samm:`.
    #[error("URN must start with `urn:samm:`: `{0}`")]
    MissingScheme(String),
    /// The input has no namespace/version sections after the scheme.
    #[error("URN is missing its namespace and version sections: `{0}`")]
    MissingSection(String),
    /// A namespace segment is empty or contains invalid characters.
    #[error("invalid namespace segment `{0}`")]
    InvalidNamespace(String),
    /// The version is not a `major.minor.micro` triple.
    #[error("invalid version `{0}`, expected `major.minor.micro`")]
    InvalidVersion(String),
    /// The URN has no `#<element>` fragment.
    #[error("URN is missing its element name: `{0}`")]
    MissingElementName(String),
    /// The element name contains invalid characters.
    #[error("invalid element name `{0}`")]
    InvalidElementName(String),
}

/// A `major.minor.micro` model version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    /// Major version.
    pub major: u32,
    /// Minor version.
    pub minor: u32,
    /// Micro version.
    pub micro: u32,
}

impl Version {
    /// Creates a version from its parts.
    #[must_use]
    pub const fn new(major: u32, minor: u32, micro: u32) -> Self {
        Self {
            major,
            minor,
            micro,
        }
    }

    /// Parses a `major.minor.micro` string.
    ///
    /// # Errors
    ///
    /// Returns [`UrnParseError::InvalidVersion`] if the input is not three
    /// dot-separated non-negative integers.
    pub fn parse(s: &str) -> Result<Self, UrnParseError> {
        let invalid = || UrnParseError::InvalidVersion(s.to_string());
        let mut parts = s.split('.');
        let major = parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(invalid)?;
        let minor = parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(invalid)?;
        let micro = parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(invalid)?;
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(Self {
            major,
            minor,
            micro,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

/// A parsed, validated aspect model URN.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelUrn {
    namespace: String,
    version: Version,
    name: String,
}

impl ModelUrn {
    /// Parses a URN string.
    ///
    /// # Errors
    ///
    /// Returns a [`UrnParseError`] describing the first violated part of the
    /// URN grammar.
    pub fn parse(input: &str) -> Result<Self, UrnParseError> {
        let rest = input
            .strip_prefix("urn:samm:")
            .ok_or_else(|| UrnParseError::MissingScheme(input.to_string()))?;

        let (body, name) = rest
            .split_once('#')
            .ok_or_else(|| UrnParseError::MissingElementName(input.to_string()))?;
        if name.is_empty() {
            return Err(UrnParseError::MissingElementName(input.to_string()));
        }
        if !is_valid_element_name(name) {
            return Err(UrnParseError::InvalidElementName(name.to_string()));
        }

        let (namespace, version_str) = body
            .rsplit_once(':')
            .ok_or_else(|| UrnParseError::MissingSection(input.to_string()))?;
        let version = Version::parse(version_str)?;

        if namespace.is_empty() {
            return Err(UrnParseError::InvalidNamespace(namespace.to_string()));
        }
        for section in namespace.split(':') {
            for segment in section.split('.') {
                if !is_valid_namespace_segment(segment) {
                    return Err(UrnParseError::InvalidNamespace(segment.to_string()));
                }
            }
        }

        Ok(Self {
            namespace: namespace.to_string(),
            version,
            name: name.to_string(),
        })
    }

    /// Returns the namespace (e.g., `"com.example.movement"`).
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the version.
    #[must_use]
    pub fn version(&self) -> Version {
        self.version
    }

    /// Returns the element name (the URN fragment).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a URN in the same namespace and version with a different
    /// element name.
    ///
    /// # Errors
    ///
    /// Returns [`UrnParseError::InvalidElementName`] if `name` is not a valid
    /// element name.
    pub fn with_name(&self, name: &str) -> Result<Self, UrnParseError> {
        if name.is_empty() || !is_valid_element_name(name) {
            return Err(UrnParseError::InvalidElementName(name.to_string()));
        }
        Ok(Self {
            namespace: self.namespace.clone(),
            version: self.version,
            name: name.to_string(),
        })
    }
}

impl fmt::Display for ModelUrn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "urn:samm:{}:{}#{}",
            self.namespace, self.version, self.name
        )
    }
}

impl FromStr for ModelUrn {
    type Err = UrnParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn is_valid_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_valid_namespace_segment(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_model_element_urn() {
        let urn = ModelUrn::parse("urn:samm:com.example.movement:1.0.0#Movement")
            .expect("valid URN");
        assert_eq!(urn.namespace(), "com.example.movement");
        assert_eq!(urn.version(), Version::new(1, 0, 0));
        assert_eq!(urn.name(), "Movement");
    }

    #[test]
    fn parses_meta_model_urn_with_section() {
        let urn =
            ModelUrn::parse("urn:samm:org.eclipse.esmf.samm:characteristic:2.1.0#Text")
                .expect("valid URN");
        assert_eq!(urn.namespace(), "org.eclipse.esmf.samm:characteristic");
        assert_eq!(urn.version(), Version::new(2, 1, 0));
        assert_eq!(urn.name(), "Text");
    }

    #[test]
    fn display_round_trips() {
        let input = "urn:samm:com.example.sensors:1.2.3#SensorCatalog";
        let urn = ModelUrn::parse(input).expect("valid URN");
        assert_eq!(urn.to_string(), input);
    }

    #[test]
    fn with_name_keeps_namespace_and_version() {
        let urn = ModelUrn::parse("urn:samm:com.example.movement:1.0.0#Movement")
            .expect("valid URN");
        let sibling = urn.with_name("isMoving").expect("valid name");
        assert_eq!(
            sibling.to_string(),
            "urn:samm:com.example.movement:1.0.0#isMoving"
        );
    }

    #[test]
    fn rejects_wrong_scheme() {
        assert!(matches!(
            ModelUrn::parse("urn:bamm:com.example:1.0.0#X"),
            Err(UrnParseError::MissingScheme(_))
        ));
    }

    #[test]
    fn rejects_missing_fragment() {
        assert!(matches!(
            ModelUrn::parse("urn:samm:com.example:1.0.0"),
            Err(UrnParseError::MissingElementName(_))
        ));
    }

    #[test]
    fn rejects_bad_version() {
        assert!(matches!(
            ModelUrn::parse("urn:samm:com.example:1.0#X"),
            Err(UrnParseError::InvalidVersion(_))
        ));
        assert!(matches!(
            ModelUrn::parse("urn:samm:com.example:1.0.x#X"),
            Err(UrnParseError::InvalidVersion(_))
        ));
    }

    #[test]
    fn rejects_bad_namespace_segment() {
        assert!(matches!(
            ModelUrn::parse("urn:samm:com..example:1.0.0#X"),
            Err(UrnParseError::InvalidNamespace(_))
        ));
        assert!(matches!(
            ModelUrn::parse("urn:samm:com.1example:1.0.0#X"),
            Err(UrnParseError::InvalidNamespace(_))
        ));
    }

    #[test]
    fn rejects_bad_element_name() {
        assert!(matches!(
            ModelUrn::parse("urn:samm:com.example:1.0.0#not-valid"),
            Err(UrnParseError::InvalidElementName(_))
        ));
    }
}
