//! Value-level rendering of the `Either` characteristic.

/// A value that is one of two alternatives.
///
/// Generated fields use this for properties whose characteristic is an
/// `Either`; the payload carries whichever alternative is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Either<L, R> {
    /// The left alternative.
    Left(L),
    /// The right alternative.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns true if this is the left alternative.
    #[must_use]
    pub const fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Returns true if this is the right alternative.
    #[must_use]
    pub const fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Returns the left value, if present.
    pub fn left(self) -> Option<L> {
        match self {
            Either::Left(value) => Some(value),
            Either::Right(_) => None,
        }
    }

    /// Returns the right value, if present.
    pub fn right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(value) => Some(value),
        }
    }

    /// Borrows both alternatives.
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(value) => Either::Left(value),
            Either::Right(value) => Either::Right(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternatives() {
        let reading: Either<f32, String> = Either::Left(21.5);
        assert!(reading.is_left());
        assert_eq!(reading.left(), Some(21.5));

        let failed: Either<f32, String> = Either::Right("E42".to_string());
        assert!(failed.is_right());
        assert_eq!(failed.right().as_deref(), Some("E42"));
    }
}
