//! Card face preview.
//!
//! The front of the card shows a masked template that fills in as the user
//! types, one `*` slot at a time.

/// Card face template before anything is typed.
pub const PLACEHOLDER: &str = "**** **** **** ****";

const SLOT: char = '*';

/// Fills the placeholder's slots with the characters of `number`.
///
/// Characters past the last slot are dropped.
///
/// # Example
///
/// ```
/// use card_input::preview::card_preview;
///
/// assert_eq!(card_preview(""), "**** **** **** ****");
/// assert_eq!(card_preview("411111"), "4111 11** **** ****");
/// assert_eq!(card_preview("41111111111111119999"), "4111 1111 1111 1111");
/// ```
pub fn card_preview(number: &str) -> String {
    let mut typed = number.chars();

    PLACEHOLDER
        .chars()
        .map(|c| match c {
            SLOT => typed.next().unwrap_or(SLOT),
            other => other,
        })
        .collect()
}

/// Number of characters the preview can show.
pub fn preview_capacity() -> usize {
    PLACEHOLDER.chars().filter(|&c| c == SLOT).count()
}
