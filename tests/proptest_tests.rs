//! Property-based tests using proptest.
//!
//! These tests check invariants over arbitrary keystroke sequences and
//! buffers, rather than the handful of cases the unit tests pin down.

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use card_input::{
    format::GROUP_SIZE, CardNumberFormatter, EditProposal, ExpiryInputFilter, FilterDecision,
    YearSuffix, EXPIRY_MAX_LEN,
};

// =============================================================================
// STRATEGIES
// =============================================================================

/// Any two-digit year suffix.
fn year_strategy() -> impl Strategy<Value = YearSuffix> {
    (0i32..100).prop_map(YearSuffix::from_year)
}

/// Keystrokes a user might send to an expiry field: mostly digits, some noise.
fn key_strategy() -> impl Strategy<Value = char> {
    prop_oneof![
        8 => prop::char::range('0', '9'),
        1 => Just('/'),
        1 => prop::char::range('a', 'z'),
    ]
}

/// Checks that a buffer produced by typing alone is a valid `MM/YY` prefix.
fn check_typed_prefix(state: &str, year: YearSuffix) -> Result<(), TestCaseError> {
    let chars: Vec<char> = state.chars().collect();

    if let Some(&m1) = chars.first() {
        prop_assert!(m1 == '0' || m1 == '1', "bad month start: {}", state);
    }
    if chars.len() >= 2 {
        let month: u32 = state[..2].parse().unwrap();
        prop_assert!((1..=12).contains(&month), "bad month: {}", state);
    }
    // Typing the first year digit adds two characters at once
    prop_assert_ne!(chars.len(), 3);
    if chars.len() >= 4 {
        prop_assert_eq!(chars[2], '/');
        prop_assert!(chars[3] >= year.tens(), "year decade in past: {}", state);
    }
    if chars.len() == EXPIRY_MAX_LEN {
        prop_assert!(&state[3..] >= year.to_string().as_str(), "year in past: {}", state);
    }
    Ok(())
}

/// A mix of typed keys and backspaces.
#[derive(Debug, Clone)]
enum Action {
    Key(char),
    Backspace,
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        5 => key_strategy().prop_map(Action::Key),
        1 => Just(Action::Backspace),
    ]
}

/// Runs `actions` against an empty expiry field.
fn run(filter: &ExpiryInputFilter, actions: &[Action]) -> Vec<String> {
    let mut buffer = String::new();
    let mut states = Vec::with_capacity(actions.len());

    for action in actions {
        let proposal = match action {
            Action::Key(c) => EditProposal::keystroke(&buffer, *c),
            Action::Backspace => EditProposal::backspace(&buffer),
        };
        let decision = filter.evaluate(&buffer, &proposal).unwrap();
        buffer = proposal.apply(&buffer, &decision);
        states.push(buffer.clone());
    }

    states
}

// =============================================================================
// EXPIRY FILTER PROPERTIES
// =============================================================================

proptest! {
    /// Property: The expiry buffer never grows past MM/YY.
    #[test]
    fn expiry_never_exceeds_max_len(
        year in year_strategy(),
        actions in prop::collection::vec(action_strategy(), 0..40),
    ) {
        let filter = ExpiryInputFilter::with_year_suffix(year);
        for state in run(&filter, &actions) {
            prop_assert!(state.chars().count() <= EXPIRY_MAX_LEN, "buffer too long: {}", state);
        }
    }

    /// Property: Typing digits (no backspace) only ever displays a valid
    /// month, a separator at index 2, and a year not before the current one.
    #[test]
    fn typing_digits_produces_valid_prefixes(
        year in year_strategy(),
        keys in prop::collection::vec(prop::char::range('0', '9'), 0..20),
    ) {
        let filter = ExpiryInputFilter::with_year_suffix(year);
        let actions: Vec<Action> = keys.into_iter().map(Action::Key).collect();

        for state in run(&filter, &actions) {
            check_typed_prefix(&state, year)?;
        }
    }

    /// Property: A digits-only filter keeps the same guarantee when noise
    /// keys are mixed in.
    #[test]
    fn digits_only_typing_produces_valid_prefixes(
        year in year_strategy(),
        keys in prop::collection::vec(key_strategy(), 0..20),
    ) {
        let filter = ExpiryInputFilter::with_year_suffix(year).digits_only();
        let actions: Vec<Action> = keys.into_iter().map(Action::Key).collect();

        for state in run(&filter, &actions) {
            check_typed_prefix(&state, year)?;
        }
    }

    /// Property: Deletions are accepted for every in-bounds range.
    #[test]
    fn deletions_always_accepted(
        year in year_strategy(),
        buffer in "[0-9/]{0,5}",
        a in 0usize..=5,
        b in 0usize..=5,
    ) {
        let len = buffer.chars().count();
        let (start, end) = (a.min(b).min(len), a.max(b).min(len));
        let filter = ExpiryInputFilter::with_year_suffix(year);

        let decision = filter.evaluate(&buffer, &EditProposal::delete(start, end)).unwrap();
        prop_assert_eq!(decision, FilterDecision::Accept(String::new()));
    }

    /// Property: Multi-character insertions are always rejected.
    #[test]
    fn paste_always_rejected(
        year in year_strategy(),
        buffer in "[0-9]{0,4}",
        pasted in "[0-9]{2,8}",
    ) {
        let filter = ExpiryInputFilter::with_year_suffix(year);
        let at = buffer.chars().count();
        let decision = filter.evaluate(&buffer, &EditProposal::insert(at, pasted)).unwrap();
        prop_assert!(decision.is_rejected());
    }

    /// Property: Evaluation returns an error, not a panic, for any range
    /// or mixed edit.
    #[test]
    fn evaluate_never_panics(
        buffer in ".{0,8}",
        inserted in ".{0,3}",
        start in 0usize..12,
        end in 0usize..12,
    ) {
        let filter = ExpiryInputFilter::with_year_suffix(YearSuffix::from_year(2024));
        let in_bounds = start <= end && end <= buffer.chars().count();
        let mixed = end > start && !inserted.is_empty();
        let proposal = EditProposal::replace(start, end, inserted);
        prop_assert_eq!(filter.evaluate(&buffer, &proposal).is_ok(), in_bounds && !mixed);
    }
}

// =============================================================================
// FORMATTER PROPERTIES
// =============================================================================

proptest! {
    /// Property: Spans are ascending, never overlap, and sit on the last
    /// character of a completed group.
    #[test]
    fn spans_aligned_and_disjoint(
        number in "[0-9]{0,32}",
        padding in 0u32..64,
    ) {
        let out = CardNumberFormatter::new(padding).reformat(&number);
        let len = out.text().chars().count();

        prop_assert_eq!(out.spans().len(), len.saturating_sub(1) / GROUP_SIZE);
        for span in out.spans() {
            prop_assert_eq!(span.end(), span.start() + 1);
            prop_assert_eq!(span.start() % GROUP_SIZE, GROUP_SIZE - 1);
            prop_assert!(span.end() < len, "span at end of text: {:?}", span);
            prop_assert_eq!(span.padding_px(), padding);
        }
        for pair in out.spans().windows(2) {
            prop_assert!(!pair[0].overlaps(&pair[1]));
            prop_assert!(pair[0].start() < pair[1].start());
        }
    }

    /// Property: Reformatting is idempotent.
    #[test]
    fn reformat_idempotent(
        number in "[0-9]{0,32}",
        max_length in 0usize..24,
    ) {
        let formatter = CardNumberFormatter::new(8).with_max_length(max_length);
        let mut text = number.clone();
        let mut spans = Vec::new();

        formatter.reformat_in_place(&mut text, &mut spans);
        let once = (text.clone(), spans.clone());
        formatter.reformat_in_place(&mut text, &mut spans);

        prop_assert_eq!((text, spans), once);
    }

    /// Property: Truncation keeps a prefix no longer than the limit.
    #[test]
    fn truncation_keeps_prefix(
        number in "[0-9]{0,32}",
        max_length in 1usize..24,
    ) {
        let out = CardNumberFormatter::new(0).with_max_length(max_length).reformat(&number);
        prop_assert!(out.text().len() <= max_length);
        prop_assert!(number.starts_with(out.text()));
        if number.len() <= max_length {
            prop_assert_eq!(out.text(), number.as_str());
        }
    }

    /// Property: Rendering adds exactly one separator per span.
    #[test]
    fn render_adds_one_separator_per_span(number in "[0-9]{0,19}") {
        let out = CardNumberFormatter::new(0).reformat(&number);
        let rendered = out.render(" ");
        prop_assert_eq!(rendered.len(), number.len() + out.spans().len());
        prop_assert_eq!(rendered.replace(' ', ""), number);
    }
}
