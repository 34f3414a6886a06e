//! Edit proposals and filter decisions.
//!
//! An input field hands the library a snapshot of its current text plus a
//! description of the edit the user is about to make. Filters answer with a
//! [`FilterDecision`]; the field commits it (or not) with
//! [`EditProposal::apply`].
//!
//! All positions are character indices, never byte offsets.
//!
//! # Example
//!
//! ```
//! use card_input::{EditProposal, FilterDecision};
//!
//! let typed = EditProposal::insert(2, "5");
//! let committed = typed.apply("12", &FilterDecision::Accept("5".into()));
//! assert_eq!(committed, "125");
//!
//! let rejected = typed.apply("12", &FilterDecision::Reject);
//! assert_eq!(rejected, "12");
//! ```

use std::fmt;

use crate::error::EditError;

/// A single pending edit: replace `replace_start..replace_end` of the
/// pre-edit buffer with `inserted`.
///
/// Insertions have an empty range, deletions have empty `inserted`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EditProposal {
    inserted: String,
    replace_start: usize,
    replace_end: usize,
}

impl EditProposal {
    /// Creates a proposal replacing `start..end` with `inserted`.
    pub fn replace(start: usize, end: usize, inserted: impl Into<String>) -> Self {
        Self {
            inserted: inserted.into(),
            replace_start: start,
            replace_end: end,
        }
    }

    /// Creates a proposal inserting `text` at `at`.
    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self::replace(at, at, text)
    }

    /// Creates a proposal deleting `start..end`.
    pub fn delete(start: usize, end: usize) -> Self {
        Self::replace(start, end, String::new())
    }

    /// Appends one character at the end of `buffer`, the way a keystroke does.
    pub fn keystroke(buffer: &str, key: char) -> Self {
        Self::insert(char_len(buffer), key.to_string())
    }

    /// Deletes the last character of `buffer`. On an empty buffer this is an
    /// empty deletion at 0.
    pub fn backspace(buffer: &str) -> Self {
        let len = char_len(buffer);
        Self::delete(len.saturating_sub(1), len)
    }

    /// The text the user is trying to insert.
    #[inline]
    pub fn inserted(&self) -> &str {
        &self.inserted
    }

    /// Start of the replaced range in the pre-edit buffer.
    #[inline]
    pub const fn replace_start(&self) -> usize {
        self.replace_start
    }

    /// End of the replaced range in the pre-edit buffer.
    #[inline]
    pub const fn replace_end(&self) -> usize {
        self.replace_end
    }

    /// Returns true if nothing is inserted.
    #[inline]
    pub fn is_deletion(&self) -> bool {
        self.inserted.is_empty()
    }

    /// Checks that the replaced range lies within `buffer`.
    pub fn check_bounds(&self, buffer: &str) -> Result<(), EditError> {
        if self.replace_start > self.replace_end {
            return Err(EditError::InvertedRange {
                start: self.replace_start,
                end: self.replace_end,
            });
        }

        let length = char_len(buffer);
        if self.replace_end > length {
            return Err(EditError::RangeOutOfBounds {
                start: self.replace_start,
                end: self.replace_end,
                length,
            });
        }

        Ok(())
    }

    /// Checks that the proposal is a pure insertion or a pure deletion.
    ///
    /// Replacing a selection with typed text is both at once; keystroke
    /// filters cannot judge it.
    pub fn check_single_edit(&self) -> Result<(), EditError> {
        if self.replace_end > self.replace_start && !self.inserted.is_empty() {
            return Err(EditError::MixedEdit {
                start: self.replace_start,
                end: self.replace_end,
                inserted: self.inserted.clone(),
            });
        }
        Ok(())
    }

    /// Commits `decision` to a copy of `buffer`.
    ///
    /// An accepted decision replaces the proposal's range with the decided
    /// text (which may differ from [`inserted`](Self::inserted)). A rejected
    /// decision leaves the buffer unchanged. Indices past the end of the
    /// buffer are clamped; call [`check_bounds`](Self::check_bounds) first
    /// to catch them.
    pub fn apply(&self, buffer: &str, decision: &FilterDecision) -> String {
        let replacement = match decision {
            FilterDecision::Accept(text) => text.as_str(),
            FilterDecision::Reject => return buffer.to_string(),
        };

        let start = byte_offset(buffer, self.replace_start);
        let end = byte_offset(buffer, self.replace_end.max(self.replace_start));

        let mut result =
            String::with_capacity(buffer.len() - (end - start) + replacement.len());
        result.push_str(&buffer[..start]);
        result.push_str(replacement);
        result.push_str(&buffer[end..]);
        result
    }
}

impl fmt::Display for EditProposal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{} <- \"{}\"",
            self.replace_start,
            self.replace_end,
            self.inserted.escape_default()
        )
    }
}

/// A filter's verdict on an [`EditProposal`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FilterDecision {
    /// Commit the edit, inserting this text in place of the proposed one.
    ///
    /// A deletion is accepted as `Accept(String::new())`.
    Accept(String),
    /// Leave the buffer unchanged.
    Reject,
}

impl FilterDecision {
    /// Returns true for [`FilterDecision::Accept`].
    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accept(_))
    }

    /// Returns true for [`FilterDecision::Reject`].
    #[inline]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Reject)
    }

    /// The text to splice into the buffer, using the empty string for a
    /// rejection.
    ///
    /// This is the encoding text-input toolkits expect from an input filter:
    /// returning nothing in place of an insertion drops the keystroke.
    pub fn replacement(&self) -> &str {
        match self {
            Self::Accept(text) => text,
            Self::Reject => "",
        }
    }
}

/// Number of characters in `s`.
#[inline]
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte offset of the character at `index`, or `s.len()` past the end.
pub(crate) fn byte_offset(s: &str, index: usize) -> usize {
    s.char_indices().nth(index).map_or(s.len(), |(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_insert_at_end() {
        let p = EditProposal::insert(2, "5");
        assert_eq!(p.apply("12", &FilterDecision::Accept("5".into())), "125");
    }

    #[test]
    fn test_apply_transformed_text() {
        let p = EditProposal::insert(2, "2");
        assert_eq!(p.apply("05", &FilterDecision::Accept("/2".into())), "05/2");
    }

    #[test]
    fn test_apply_reject_keeps_buffer() {
        let p = EditProposal::insert(0, "9");
        assert_eq!(p.apply("", &FilterDecision::Reject), "");
    }

    #[test]
    fn test_apply_delete_last() {
        let p = EditProposal::backspace("05/2");
        assert_eq!(p.replace_start(), 3);
        assert_eq!(p.replace_end(), 4);
        assert_eq!(p.apply("05/2", &FilterDecision::Accept(String::new())), "05/");
    }

    #[test]
    fn test_apply_replace_middle() {
        let p = EditProposal::replace(1, 3, "xy");
        assert_eq!(p.apply("abcd", &FilterDecision::Accept("xy".into())), "axyd");
    }

    #[test]
    fn test_apply_multibyte() {
        let p = EditProposal::insert(1, "é");
        assert_eq!(p.apply("aü", &FilterDecision::Accept("é".into())), "aéü");
    }

    #[test]
    fn test_keystroke_and_backspace() {
        let k = EditProposal::keystroke("123", '4');
        assert_eq!(k, EditProposal::insert(3, "4"));

        let b = EditProposal::backspace("");
        assert_eq!(b, EditProposal::delete(0, 0));
        assert!(b.is_deletion());
    }

    #[test]
    fn test_check_bounds() {
        assert!(EditProposal::insert(0, "1").check_bounds("").is_ok());
        assert!(EditProposal::delete(4, 5).check_bounds("12/25").is_ok());

        assert_eq!(
            EditProposal::insert(3, "1").check_bounds("12"),
            Err(EditError::RangeOutOfBounds {
                start: 3,
                end: 3,
                length: 2
            })
        );

        assert_eq!(
            EditProposal::replace(2, 1, "").check_bounds("12"),
            Err(EditError::InvertedRange { start: 2, end: 1 })
        );
    }

    #[test]
    fn test_check_single_edit() {
        assert!(EditProposal::insert(2, "5").check_single_edit().is_ok());
        assert!(EditProposal::delete(0, 2).check_single_edit().is_ok());
        assert!(EditProposal::replace(1, 1, "").check_single_edit().is_ok());
        assert_eq!(
            EditProposal::replace(0, 2, "1").check_single_edit(),
            Err(EditError::MixedEdit {
                start: 0,
                end: 2,
                inserted: "1".into()
            })
        );
    }

    #[test]
    fn test_decision_replacement() {
        assert_eq!(FilterDecision::Accept("/2".into()).replacement(), "/2");
        assert_eq!(FilterDecision::Reject.replacement(), "");
        assert!(FilterDecision::Accept(String::new()).is_accepted());
        assert!(FilterDecision::Reject.is_rejected());
    }

    #[test]
    fn test_display() {
        assert_eq!(EditProposal::insert(2, "5").to_string(), "2..2 <- \"5\"");
    }
}
