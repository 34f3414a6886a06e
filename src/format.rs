//! Card number display formatting.
//!
//! Card number fields keep only digits in their text. The visual gap between
//! groups of four is a layout annotation: a [`PaddingSpan`] on the last
//! digit of each completed group, telling the renderer to add trailing space
//! after that glyph. Copying the field's text therefore yields bare digits.
//!
//! Spans are recomputed from scratch on every pass; stale spans are never
//! carried over.
//!
//! # Example
//!
//! ```
//! use card_input::format::{CardNumberFormatter, PaddingSpan};
//!
//! let formatter = CardNumberFormatter::new(10).with_max_length(16);
//! let formatted = formatter.reformat("41111111111111112222");
//!
//! assert_eq!(formatted.text(), "4111111111111111");
//! assert_eq!(
//!     formatted.spans(),
//!     &[
//!         PaddingSpan::new(3, 10),
//!         PaddingSpan::new(7, 10),
//!         PaddingSpan::new(11, 10),
//!     ]
//! );
//! assert_eq!(formatted.render(" "), "4111 1111 1111 1111");
//! ```

use std::num::NonZeroUsize;

use crate::edit::{byte_offset, char_len};

/// Number of characters per visual group.
pub const GROUP_SIZE: usize = 4;

/// Default maximum length of a card number field.
pub const DEFAULT_MAX_LENGTH: usize = 16;

/// Extra trailing space rendered after the character at `start`.
///
/// Covers the half-open range `start..end`, which is always one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaddingSpan {
    start: usize,
    end: usize,
    padding_px: u32,
}

impl PaddingSpan {
    /// Creates a span over the single character at `index`.
    #[inline]
    pub const fn new(index: usize, padding_px: u32) -> Self {
        Self {
            start: index,
            end: index + 1,
            padding_px,
        }
    }

    /// First covered character.
    #[inline]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// One past the last covered character.
    #[inline]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Extra trailing width in pixels.
    #[inline]
    pub const fn padding_px(&self) -> u32 {
        self.padding_px
    }

    /// Horizontal advance of the covered glyph: its own width plus padding.
    #[inline]
    pub fn advance(&self, glyph_width: f32) -> f32 {
        glyph_width + self.padding_px as f32
    }

    /// Returns true if the two spans cover a common character.
    #[inline]
    pub const fn overlaps(&self, other: &PaddingSpan) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A card number buffer together with its layout spans.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormattedNumber {
    text: String,
    spans: Vec<PaddingSpan>,
}

impl FormattedNumber {
    /// The (possibly truncated) text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Spans in ascending order.
    #[inline]
    pub fn spans(&self) -> &[PaddingSpan] {
        &self.spans
    }

    /// Splits into text and spans.
    pub fn into_parts(self) -> (String, Vec<PaddingSpan>) {
        (self.text, self.spans)
    }

    /// Renders the text with `separator` after every padded character.
    ///
    /// Useful where spans cannot be drawn, such as terminals and logs.
    pub fn render(&self, separator: &str) -> String {
        render_with_separator(&self.text, &self.spans, separator)
    }
}

/// Renders `text` with `separator` after each character that starts one of
/// `spans`, which must be in ascending order.
pub fn render_with_separator(text: &str, spans: &[PaddingSpan], separator: &str) -> String {
    let mut result = String::with_capacity(text.len() + spans.len() * separator.len());
    let mut spans = spans.iter().peekable();

    for (i, c) in text.chars().enumerate() {
        result.push(c);
        if spans.next_if(|span| span.start == i).is_some() {
            result.push_str(separator);
        }
    }

    result
}

/// Computes grouping spans for a card number field.
///
/// Mirrors a text-change watcher: configure once per field, then call
/// [`reformat_in_place`](Self::reformat_in_place) after every committed edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardNumberFormatter {
    padding_px: u32,
    max_length: Option<NonZeroUsize>,
}

impl CardNumberFormatter {
    /// Creates a formatter with the given padding and no length limit.
    pub const fn new(padding_px: u32) -> Self {
        Self {
            padding_px,
            max_length: None,
        }
    }

    /// Limits the field to `max_length` characters. Zero removes the limit.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = NonZeroUsize::new(max_length);
        self
    }

    /// Changes the padding; takes effect on the next pass.
    pub fn set_padding_px(&mut self, padding_px: u32) {
        self.padding_px = padding_px;
    }

    /// Changes the length limit; takes effect on the next pass.
    pub fn set_max_length(&mut self, max_length: Option<NonZeroUsize>) {
        self.max_length = max_length;
    }

    /// Current padding in pixels.
    #[inline]
    pub const fn padding_px(&self) -> u32 {
        self.padding_px
    }

    /// Current length limit.
    #[inline]
    pub const fn max_length(&self) -> Option<NonZeroUsize> {
        self.max_length
    }

    /// Formats a snapshot of `buffer`.
    pub fn reformat(&self, buffer: &str) -> FormattedNumber {
        let mut text = buffer.to_string();
        let mut spans = Vec::new();
        self.reformat_in_place(&mut text, &mut spans);
        FormattedNumber { text, spans }
    }

    /// Formats `buffer` in place, replacing everything in `spans`.
    ///
    /// Existing spans are discarded before `buffer` is truncated, so spans
    /// that covered the removed tail can never survive.
    pub fn reformat_in_place(&self, buffer: &mut String, spans: &mut Vec<PaddingSpan>) {
        spans.clear();

        let mut length = char_len(buffer);
        if let Some(max) = self.max_length {
            if length > max.get() {
                buffer.truncate(byte_offset(buffer, max.get()));
                length = max.get();
            }
        }

        spans.extend(group_spans(length, self.padding_px));

        tracing::debug!(length, spans = spans.len(), "card number reformatted");
    }
}

impl Default for CardNumberFormatter {
    /// No padding, 16 characters.
    fn default() -> Self {
        Self::new(0).with_max_length(DEFAULT_MAX_LENGTH)
    }
}

/// Formats `buffer` with the given padding and optional length limit.
///
/// # Example
///
/// ```
/// use card_input::format::reformat;
///
/// let formatted = reformat("411111111", 8, None);
/// let starts: Vec<usize> = formatted.spans().iter().map(|s| s.start()).collect();
/// assert_eq!(starts, vec![3, 7]);
/// ```
pub fn reformat(buffer: &str, padding_px: u32, max_length: Option<usize>) -> FormattedNumber {
    CardNumberFormatter::new(padding_px)
        .with_max_length(max_length.unwrap_or(0))
        .reformat(buffer)
}

/// One span on the last character of each completed group, except a group
/// that ends the text.
fn group_spans(length: usize, padding_px: u32) -> impl Iterator<Item = PaddingSpan> {
    let boundaries = length.saturating_sub(1) / GROUP_SIZE;
    (1..=boundaries).map(move |i| PaddingSpan::new(i * GROUP_SIZE - 1, padding_px))
}
