//! Fuzz target for card number grouping.
//!
//! Tests that reformatting never panics and that spans always fit the text.

#![no_main]

use libfuzzer_sys::fuzz_target;
use card_input::{reformat, CardNumberFormatter};

fuzz_target!(|data: (&str, u8, u32)| {
    let (text, max_length, padding) = data;

    let out = reformat(text, padding, Some(max_length as usize));
    let len = out.text().chars().count();
    assert!(max_length == 0 || len <= max_length as usize);
    for span in out.spans() {
        assert!(span.end() < len, "span {:?} past text of {} chars", span, len);
    }
    let _ = out.render(" ");
    let _ = out.render("");

    // Second pass changes nothing
    let formatter = CardNumberFormatter::new(padding).with_max_length(max_length as usize);
    let mut buffer = text.to_string();
    let mut spans = Vec::new();
    formatter.reformat_in_place(&mut buffer, &mut spans);
    let once = (buffer.clone(), spans.clone());
    formatter.reformat_in_place(&mut buffer, &mut spans);
    assert_eq!((buffer, spans), once);
});
