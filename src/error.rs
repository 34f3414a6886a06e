//! Contract-violation errors.
//!
//! A rejected keystroke is not an error: filters signal rejection through
//! [`FilterDecision::Reject`](crate::FilterDecision::Reject). The variants
//! here describe calls that break a precondition, such as an edit range that
//! lies outside the buffer it is evaluated against.

use std::fmt;

/// Errors raised when a caller violates an input-handling contract.
///
/// Each variant carries the offending values so the mistake can be located
/// without a debugger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// The edit range ends past the end of the buffer.
    RangeOutOfBounds {
        /// Start of the proposed replacement range.
        start: usize,
        /// End of the proposed replacement range.
        end: usize,
        /// Length of the buffer in characters.
        length: usize,
    },

    /// The edit range starts after it ends.
    InvertedRange {
        /// Start of the proposed replacement range.
        start: usize,
        /// End of the proposed replacement range.
        end: usize,
    },

    /// An edit both removes a range and inserts text. Filters that judge
    /// single keystrokes require one or the other.
    MixedEdit {
        /// Start of the proposed replacement range.
        start: usize,
        /// End of the proposed replacement range.
        end: usize,
        /// Text proposed in place of the range.
        inserted: String,
    },

    /// A padding width was negative.
    NegativePadding(i64),

    /// A padding width could not be derived (NaN, infinite, or out of range).
    InvalidPadding(String),

    /// A year suffix was not exactly two ASCII digits.
    InvalidYearSuffix(String),
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RangeOutOfBounds { start, end, length } => {
                write!(
                    f,
                    "edit range {}..{} is outside a buffer of {} characters",
                    start, end, length
                )
            }

            Self::InvertedRange { start, end } => {
                write!(f, "edit range {}..{} starts after it ends", start, end)
            }

            Self::MixedEdit {
                start,
                end,
                inserted,
            } => {
                write!(
                    f,
                    "edit replaces {}..{} with \"{}\"; expected an insertion or a deletion",
                    start,
                    end,
                    inserted.escape_default()
                )
            }

            Self::NegativePadding(px) => {
                write!(f, "padding must not be negative, got {}px", px)
            }

            Self::InvalidPadding(reason) => {
                write!(f, "invalid padding: {}", reason)
            }

            Self::InvalidYearSuffix(input) => {
                write!(
                    f,
                    "invalid year suffix '{}' (expected two digits, e.g. \"24\")",
                    input.escape_default()
                )
            }
        }
    }
}

impl std::error::Error for EditError {}
