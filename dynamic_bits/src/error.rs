#[cfg(feature = "std")]
use thiserror::Error;

/// Errors returned by the fallible container and cursor operations.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitsetError {
    /// An extraction asked for more bits than remain before the end.
    #[cfg_attr(
        feature = "std",
        error("requested {requested} bits but only {available} remain")
    )]
    InsufficientBits { requested: usize, available: usize },

    /// A tail length of 8 or more was passed to a raw constructor.
    #[cfg_attr(
        feature = "std",
        error("tail length {0} out of range, must be below 8")
    )]
    InvalidTailLen(u8),
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitsetError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitsetError::InsufficientBits {
                requested,
                available,
            } => {
                write!(
                    f,
                    "requested {} bits but only {} remain",
                    requested, available
                )
            }
            BitsetError::InvalidTailLen(len) => {
                write!(f, "tail length {} out of range, must be below 8", len)
            }
        }
    }
}
