//! Keystroke filter for `MM/YY` expiry fields.
//!
//! [`ExpiryInputFilter`] looks at one proposed edit at a time and decides
//! whether it may be committed, so the field never displays a month outside
//! `01..=12` or a year before the current one. The `/` separator is inserted
//! automatically when the first year digit is typed.
//!
//! The field is append-only: characters can only be typed at the end, and
//! only one at a time. Deletions always pass. Filters built with
//! [`digits_only`](ExpiryInputFilter::digits_only) also refuse anything but
//! ASCII digits, for fields without a numeric keyboard.
//!
//! # Example
//!
//! ```
//! use card_input::{EditProposal, ExpiryInputFilter, FilterDecision, YearSuffix};
//!
//! let filter = ExpiryInputFilter::with_year_suffix("24".parse::<YearSuffix>().unwrap());
//!
//! // Month 13 does not exist
//! let decision = filter.evaluate("1", &EditProposal::insert(1, "3")).unwrap();
//! assert_eq!(decision, FilterDecision::Reject);
//!
//! // The separator is added for the user
//! let decision = filter.evaluate("05", &EditProposal::insert(2, "2")).unwrap();
//! assert_eq!(decision, FilterDecision::Accept("/2".into()));
//!
//! // 05/23 is in the past
//! let decision = filter.evaluate("05/2", &EditProposal::insert(4, "3")).unwrap();
//! assert!(decision.is_rejected());
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::Datelike;

use crate::edit::{char_len, EditProposal, FilterDecision};
use crate::error::EditError;

/// Maximum length of an expiry buffer (`MM/YY`).
pub const EXPIRY_MAX_LEN: usize = 5;

/// The last two digits of a year, e.g. `"24"` for 2024.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearSuffix {
    tens: char,
    ones: char,
}

impl YearSuffix {
    /// Parses a two-digit suffix such as `"24"`.
    pub fn new(input: &str) -> Result<Self, EditError> {
        let mut chars = input.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(tens), Some(ones), None) if tens.is_ascii_digit() && ones.is_ascii_digit() => {
                Ok(Self { tens, ones })
            }
            _ => Err(EditError::InvalidYearSuffix(input.to_string())),
        }
    }

    /// The suffix of a calendar year. Negative years use their absolute value.
    pub fn from_year(year: i32) -> Self {
        let yy = year.unsigned_abs() % 100;
        Self {
            tens: digit_char(yy / 10),
            ones: digit_char(yy % 10),
        }
    }

    /// The suffix of the current year in local time.
    pub fn current() -> Self {
        Self::from_year(chrono::Local::now().year())
    }

    /// First digit, the lower bound for the first year digit typed.
    #[inline]
    pub const fn tens(&self) -> char {
        self.tens
    }

    /// Second digit.
    #[inline]
    pub const fn ones(&self) -> char {
        self.ones
    }

    /// Returns true if the two-digit year `tens ones` sorts before this one.
    #[inline]
    fn is_after(&self, tens: char, ones: char) -> bool {
        (tens, ones) < (self.tens, self.ones)
    }
}

impl fmt::Display for YearSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.tens, self.ones)
    }
}

impl FromStr for YearSuffix {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for YearSuffix {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for YearSuffix {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(&s).map_err(serde::de::Error::custom)
    }
}

fn digit_char(d: u32) -> char {
    char::from_digit(d, 10).unwrap_or('0')
}

/// Why a keystroke was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RejectReason {
    /// The buffer already holds `MM/YY`.
    BufferFull,
    /// More than one character was inserted at once (paste).
    MultipleCharacters,
    /// The insertion is not at the end of the buffer.
    NotAtEnd,
    /// A non-digit was typed into a [`digits_only`](ExpiryInputFilter::digits_only) filter.
    NotADigit(char),
    /// No month starts with this digit.
    InvalidMonthStart(char),
    /// Month `00`.
    MonthZero,
    /// Month above 12.
    MonthAboveTwelve(char),
    /// The year would be before the current one.
    YearInPast,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferFull => write!(f, "expiry already complete"),
            Self::MultipleCharacters => write!(f, "only one character may be typed at a time"),
            Self::NotAtEnd => write!(f, "characters can only be added at the end"),
            Self::NotADigit(c) => write!(f, "'{}' is not a digit", c.escape_default()),
            Self::InvalidMonthStart(c) => {
                write!(f, "no month starts with '{}'", c.escape_default())
            }
            Self::MonthZero => write!(f, "month 00 does not exist"),
            Self::MonthAboveTwelve(c) => {
                write!(f, "month 1{} does not exist", c.escape_default())
            }
            Self::YearInPast => write!(f, "year is in the past"),
        }
    }
}

/// What the next character of an `MM/YY` buffer means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    FirstMonthDigit,
    SecondMonthDigit,
    /// First year digit; the `/` is injected in front of it.
    Separator,
    LastYearDigit,
    Free,
}

impl Slot {
    fn at(index: usize) -> Self {
        match index {
            0 => Self::FirstMonthDigit,
            1 => Self::SecondMonthDigit,
            2 => Self::Separator,
            4 => Self::LastYearDigit,
            _ => Self::Free,
        }
    }
}

/// Per-keystroke filter for an `MM/YY` expiry field.
///
/// The current year suffix is captured when the filter is built and reused
/// for every keystroke; build one filter per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryInputFilter {
    year: YearSuffix,
    digits_only: bool,
}

impl Default for ExpiryInputFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpiryInputFilter {
    /// Creates a filter bounded by the current year.
    pub fn new() -> Self {
        Self::with_year_suffix(YearSuffix::current())
    }

    /// Creates a filter bounded by a fixed year.
    pub const fn with_year_suffix(year: YearSuffix) -> Self {
        Self {
            year,
            digits_only: false,
        }
    }

    /// Also rejects every typed character that is not an ASCII digit.
    ///
    /// Without this, slot rules compare characters only, so `'/'` passes as
    /// a first month digit and `'a'` as a first year digit.
    pub const fn digits_only(self) -> Self {
        Self {
            digits_only: true,
            ..self
        }
    }

    /// Returns true if non-digits are rejected.
    #[inline]
    pub const fn is_digits_only(&self) -> bool {
        self.digits_only
    }

    /// The earliest acceptable year.
    #[inline]
    pub const fn year_suffix(&self) -> YearSuffix {
        self.year
    }

    /// Decides whether `proposal` may be applied to `buffer`.
    ///
    /// Returns `Err` when the proposal's range lies outside `buffer`, or
    /// when it both deletes and inserts.
    pub fn evaluate(
        &self,
        buffer: &str,
        proposal: &EditProposal,
    ) -> Result<FilterDecision, EditError> {
        proposal.check_bounds(buffer)?;
        proposal.check_single_edit()?;

        match self.decide(buffer, proposal) {
            Ok(text) => Ok(FilterDecision::Accept(text)),
            Err(reason) => {
                tracing::trace!(
                    index = proposal.replace_start(),
                    %reason,
                    "expiry keystroke rejected"
                );
                Ok(FilterDecision::Reject)
            }
        }
    }

    /// Like [`evaluate`](Self::evaluate), but reports why an edit would be
    /// rejected. `Ok(None)` means the edit is accepted.
    pub fn explain(
        &self,
        buffer: &str,
        proposal: &EditProposal,
    ) -> Result<Option<RejectReason>, EditError> {
        proposal.check_bounds(buffer)?;
        proposal.check_single_edit()?;
        Ok(self.decide(buffer, proposal).err())
    }

    fn decide(&self, buffer: &str, proposal: &EditProposal) -> Result<String, RejectReason> {
        if proposal.is_deletion() {
            return Ok(String::new());
        }

        let len = char_len(buffer);
        if len >= EXPIRY_MAX_LEN {
            return Err(RejectReason::BufferFull);
        }

        let mut inserted = proposal.inserted().chars();
        let (Some(c), None) = (inserted.next(), inserted.next()) else {
            return Err(RejectReason::MultipleCharacters);
        };

        let index = proposal.replace_start();
        if index != len {
            return Err(RejectReason::NotAtEnd);
        }
        if self.digits_only && !c.is_ascii_digit() {
            return Err(RejectReason::NotADigit(c));
        }

        // The insertion is at the end, so `last` is the character before it.
        let last = buffer.chars().last();

        match Slot::at(index) {
            Slot::FirstMonthDigit if c > '1' => Err(RejectReason::InvalidMonthStart(c)),
            Slot::SecondMonthDigit => match (last, c) {
                (Some('0'), '0') => Err(RejectReason::MonthZero),
                (Some('1'), c) if c > '2' => Err(RejectReason::MonthAboveTwelve(c)),
                _ => Ok(c.to_string()),
            },
            Slot::Separator if c < self.year.tens() => Err(RejectReason::YearInPast),
            Slot::Separator => Ok(format!("/{}", c)),
            Slot::LastYearDigit => match last {
                Some(tens) if self.year.is_after(tens, c) => Err(RejectReason::YearInPast),
                _ => Ok(c.to_string()),
            },
            Slot::FirstMonthDigit | Slot::Free => Ok(c.to_string()),
        }
    }
}
