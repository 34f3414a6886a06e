//! Fuzz target for the card form.
//!
//! Drives a form with arbitrary edits; nothing may panic.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use card_input::{CardForm, CardNumberFormatter, EditProposal, ExpiryInputFilter, YearSuffix};

#[derive(Debug, Arbitrary)]
enum Action {
    TypeNumber(String),
    BackspaceNumber,
    EditNumber { start: u8, end: u8, text: String },
    TypeExpiry(String),
    BackspaceExpiry,
    EditExpiry { start: u8, end: u8, text: String },
    Name(String),
    Cvv(String),
    FocusCvv(bool),
    Flip,
    Save,
}

fuzz_target!(|actions: Vec<Action>| {
    let mut form = CardForm::with_parts(
        ExpiryInputFilter::with_year_suffix(YearSuffix::from_year(2024)),
        CardNumberFormatter::new(12).with_max_length(16),
    );

    for action in actions {
        match action {
            Action::TypeNumber(keys) => {
                let _ = form.type_card_number(&keys);
            }
            Action::BackspaceNumber => {
                let _ = form.backspace_card_number();
            }
            Action::EditNumber { start, end, text } => {
                let _ = form.edit_card_number(&EditProposal::replace(start as usize, end as usize, text));
            }
            Action::TypeExpiry(keys) => {
                let _ = form.type_expiry(&keys);
            }
            Action::BackspaceExpiry => {
                let _ = form.backspace_expiry();
            }
            Action::EditExpiry { start, end, text } => {
                let _ = form.edit_expiry(&EditProposal::replace(start as usize, end as usize, text));
            }
            Action::Name(name) => form.set_holder_name(name),
            Action::Cvv(cvv) => form.set_cvv(cvv),
            Action::FocusCvv(focused) => {
                let _ = form.focus_cvv(focused);
            }
            Action::Flip => {
                let _ = form.flip();
            }
            Action::Save => {
                let saved = form.save();
                assert!(saved.saved && form.is_saved());
            }
        }

        assert!(form.card_number().chars().count() <= 16);
        let _ = form.formatted_number();
        let _ = form.snapshot();
    }
});
