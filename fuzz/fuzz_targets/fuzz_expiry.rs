//! Fuzz target for the expiry keystroke filter.
//!
//! Arbitrary proposals must either be refused with an error or produce a
//! buffer that stays within MM/YY.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use card_input::{EditProposal, ExpiryInputFilter, YearSuffix, EXPIRY_MAX_LEN};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    year: u8,
    buffer: &'a str,
    inserted: &'a str,
    start: u8,
    end: u8,
    keys: &'a str,
}

fuzz_target!(|input: Input<'_>| {
    let filter = ExpiryInputFilter::with_year_suffix(YearSuffix::from_year(input.year as i32));

    // Arbitrary ranges: an error, never a panic
    let proposal = EditProposal::replace(input.start as usize, input.end as usize, input.inserted);
    if let Ok(decision) = filter.evaluate(input.buffer, &proposal) {
        let _ = proposal.apply(input.buffer, &decision);
    }
    let _ = filter.explain(input.buffer, &proposal);

    // Typed keys never overflow the field
    let mut buffer = String::new();
    for key in input.keys.chars() {
        let proposal = EditProposal::keystroke(&buffer, key);
        let decision = filter
            .evaluate(&buffer, &proposal)
            .expect("keystroke proposals are always in bounds");
        buffer = proposal.apply(&buffer, &decision);
        assert!(buffer.chars().count() <= EXPIRY_MAX_LEN, "overflow: {}", buffer);
    }
});
