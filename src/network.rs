//! Card network classification for display.
//!
//! Picks the logo and card color while the user types. This is a prefix
//! check on the first digit only, with no BIN table and no checksum; it must
//! not be used to decide whether a card number is real.

use std::fmt;

/// Minimum number of characters before a network is shown.
pub const MIN_CLASSIFY_LEN: usize = 4;

/// The network shown on the card face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CardNetwork {
    /// Fewer than four characters typed.
    #[default]
    Undetermined,
    /// Number starts with 4.
    Visa,
    /// Any other number of four or more characters.
    Mastercard,
}

impl CardNetwork {
    /// Returns a human-readable name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Undetermined => "Undetermined",
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
        }
    }

    /// Returns true once a network has been picked.
    #[inline]
    pub const fn is_determined(&self) -> bool {
        !matches!(self, Self::Undetermined)
    }
}

impl fmt::Display for CardNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Classifies the card number typed so far.
///
/// # Example
///
/// ```
/// use card_input::network::{classify, CardNetwork};
///
/// assert_eq!(classify("411"), CardNetwork::Undetermined);
/// assert_eq!(classify("4111"), CardNetwork::Visa);
/// assert_eq!(classify("5500"), CardNetwork::Mastercard);
/// ```
pub fn classify(number: &str) -> CardNetwork {
    if number.chars().count() < MIN_CLASSIFY_LEN {
        return CardNetwork::Undetermined;
    }

    if number.starts_with('4') {
        CardNetwork::Visa
    } else {
        CardNetwork::Mastercard
    }
}
