//! WebAssembly bindings for card input fields.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { JsExpiryFilter, format_card_number, classify_network } from 'card_input';
//!
//! await init();
//!
//! const filter = new JsExpiryFilter();
//! input.addEventListener('beforeinput', (e) => {
//!     const { selectionStart: start, selectionEnd: end, value } = input;
//!     const text = filter.evaluate(value, e.data ?? '', start, end);
//!     if (e.data && text === '') e.preventDefault();
//! });
//!
//! format_card_number("4111111111111111", " ");  // "4111 1111 1111 1111"
//! classify_network("4111");                     // "Visa"
//! ```

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::{EditProposal, ExpiryInputFilter, YearSuffix};

/// An `MM/YY` keystroke filter for one input element.
#[wasm_bindgen]
pub struct JsExpiryFilter {
    inner: ExpiryInputFilter,
}

#[wasm_bindgen]
impl JsExpiryFilter {
    /// Creates a filter bounded by the current year.
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsExpiryFilter {
        JsExpiryFilter {
            inner: ExpiryInputFilter::new(),
        }
    }

    /// Creates a filter bounded by a two-digit year such as `"24"`.
    #[wasm_bindgen(js_name = withYear)]
    pub fn with_year(year: &str) -> Result<JsExpiryFilter, JsValue> {
        let suffix = YearSuffix::new(year).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(JsExpiryFilter {
            inner: ExpiryInputFilter::with_year_suffix(suffix),
        })
    }

    /// Returns the text to insert in place of `inserted`; an empty string
    /// for an insertion means the keystroke is refused.
    ///
    /// Throws when `start..end` lies outside `buffer`.
    pub fn evaluate(
        &self,
        buffer: &str,
        inserted: &str,
        start: usize,
        end: usize,
    ) -> Result<String, JsValue> {
        let proposal = EditProposal::replace(start, end, inserted);
        self.inner
            .evaluate(buffer, &proposal)
            .map(|decision| decision.replacement().to_string())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for JsExpiryFilter {
    fn default() -> Self {
        Self::new()
    }
}

/// Truncates to 16 characters and inserts `separator` between groups of four.
#[wasm_bindgen]
pub fn format_card_number(card_number: &str, separator: &str) -> String {
    crate::CardNumberFormatter::default()
        .reformat(card_number)
        .render(separator)
}

/// Returns the start index of each padded character, for renderers that
/// draw the gaps themselves.
#[wasm_bindgen]
pub fn padding_positions(card_number: &str) -> js_sys::Uint32Array {
    let positions: Vec<u32> = crate::CardNumberFormatter::default()
        .reformat(card_number)
        .spans()
        .iter()
        .map(|span| span.start() as u32)
        .collect();
    js_sys::Uint32Array::from(positions.as_slice())
}

/// Network name for logo selection: "Undetermined", "Visa", or "Mastercard".
#[wasm_bindgen]
pub fn classify_network(card_number: &str) -> String {
    crate::classify(card_number).name().to_string()
}

/// Masked card-face template filled with the typed characters.
#[wasm_bindgen]
pub fn card_preview(card_number: &str) -> String {
    crate::card_preview(card_number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_reads_current_year() {
        let filter = JsExpiryFilter::new();
        assert_eq!(filter.inner.year_suffix(), YearSuffix::current());
        assert_eq!(filter.evaluate("05", "", 1, 2).unwrap(), "");
        assert_eq!(filter.evaluate("", "1", 0, 0).unwrap(), "1");
    }

    #[test]
    fn test_formatting_helpers() {
        assert_eq!(format_card_number("4111111111111111", "-"), "4111-1111-1111-1111");
        assert_eq!(classify_network("4111"), "Visa");
        assert_eq!(card_preview("41"), "41** **** **** ****");
    }
}
