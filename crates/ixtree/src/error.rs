use core::{fmt, fmt::Display, matches, write};

/// A precondition of an order statistics query that did not hold
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Precondition {
    /// A negative delta has been applied, so cumulative counts are no longer monotone
    NegativeCount,
    /// The requested rank is below one or above the total count
    RankOutOfRange,
}

impl Display for Precondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precondition::NegativeCount => write!(f, "a negative count has been applied"),
            Precondition::RankOutOfRange => write!(f, "rank is outside [1, total]"),
        }
    }
}

/// A type containing error variants that may arise when using the data structures
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// The index is outside the valid range of the structure
    InvalidIndex {
        /// The rejected index
        index: usize,
        /// Exclusive upper bound of valid indices
        len: usize,
    },
    /// A query was issued while its precondition does not hold
    Precondition(Precondition),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidIndex { index, len } => {
                write!(f, "index {index} is out of range for length {len}")
            }
            Error::Precondition(p) => write!(f, "precondition violated: {p}"),
        }
    }
}

impl core::error::Error for Error {}

impl From<Precondition> for Error {
    fn from(p: Precondition) -> Self {
        Error::Precondition(p)
    }
}

impl Error {
    /// Returns `true` if the error represents [Error::InvalidIndex]
    pub fn is_invalid_index(&self) -> bool {
        matches!(self, Error::InvalidIndex { .. })
    }
    /// Returns `true` if the error represents [Error::Precondition]
    pub fn is_precondition(&self) -> bool {
        matches!(self, Error::Precondition(_))
    }

    /// Checks that `index < len`, logging the rejection otherwise
    #[inline]
    pub(crate) fn check_index(index: usize, len: usize) -> Result<(), Error> {
        if index < len {
            Ok(())
        } else {
            log::debug!("rejecting index {index}, valid range is [0, {len})");
            Err(Error::InvalidIndex { index, len })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err = Error::InvalidIndex { index: 7, len: 4 };
        assert_eq!(err.to_string(), "index 7 is out of range for length 4");
        assert!(err.is_invalid_index());
        assert!(!err.is_precondition());

        let err: Error = Precondition::RankOutOfRange.into();
        assert_eq!(
            err.to_string(),
            "precondition violated: rank is outside [1, total]"
        );
        assert!(err.is_precondition());
    }

    #[test]
    fn check_index_bounds() {
        assert!(Error::check_index(0, 1).is_ok());
        assert_eq!(
            Error::check_index(1, 1),
            Err(Error::InvalidIndex { index: 1, len: 1 })
        );
        assert!(Error::check_index(0, 0).is_err());
    }
}
