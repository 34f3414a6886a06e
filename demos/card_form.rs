//! Card form walkthrough.
//!
//! Run with: `cargo run --example card_form`

use card_input::{
    CardForm, CardNumberFormatter, EditProposal, ExpiryInputFilter, PaddingWidth, YearSuffix,
};

fn main() {
    println!("=== Card Input Form ===\n");

    let year = YearSuffix::current();
    let filter = ExpiryInputFilter::with_year_suffix(year);

    // -------------------------------------------------------------------------
    // Expiry keystrokes
    // -------------------------------------------------------------------------
    println!("--- Expiry field (current year {}) ---\n", year);

    let attempts = [
        ("", '1', "first month digit"),
        ("", '7', "no month starts with 7"),
        ("1", '3', "month 13"),
        ("1", '2', "month 12"),
        ("12", '/', "typed separator"),
        ("12", '9', "first year digit"),
    ];

    for (buffer, key, description) in attempts {
        let proposal = EditProposal::keystroke(buffer, key);
        match filter.explain(buffer, &proposal) {
            Ok(None) => {
                let decision = filter.evaluate(buffer, &proposal).unwrap();
                println!(
                    "  {:<24} {:>5} + '{}' -> {}",
                    description,
                    format!("\"{}\"", buffer),
                    key,
                    proposal.apply(buffer, &decision)
                );
            }
            Ok(Some(reason)) => {
                println!(
                    "  {:<24} {:>5} + '{}' -> rejected ({})",
                    description,
                    format!("\"{}\"", buffer),
                    key,
                    reason
                );
            }
            Err(e) => println!("  {}: error: {}", description, e),
        }
    }
    println!();

    // -------------------------------------------------------------------------
    // Card number grouping
    // -------------------------------------------------------------------------
    println!("--- Card number grouping ---\n");

    let padding = PaddingWidth::from_em(9.0, 0.75).unwrap();
    let formatter = CardNumberFormatter::new(padding.px()).with_max_length(16);
    println!("  Padding: {}px after each group\n", padding.px());

    for number in ["4111", "41111", "411111111111", "41111111111111112222"] {
        let out = formatter.reformat(number);
        let spans: Vec<String> = out
            .spans()
            .iter()
            .map(|s| format!("{}..{}", s.start(), s.end()))
            .collect();
        println!("  Input:  {}", number);
        println!("    Text:     {}", out.text());
        println!("    Rendered: {}", out.render(" "));
        println!("    Spans:    [{}]", spans.join(", "));
        println!();
    }

    // -------------------------------------------------------------------------
    // Whole form
    // -------------------------------------------------------------------------
    println!("--- Filling the form ---\n");

    let mut form = CardForm::with_parts(filter, formatter);
    form.set_holder_name("Ada Lovelace");

    for key in "4111111111111111".chars() {
        let proposal = EditProposal::keystroke(form.card_number(), key);
        form.edit_card_number(&proposal).unwrap();
        if form.card_number().len() % 4 == 0 {
            println!(
                "  {:<16}  {:<12} {}",
                form.card_number(),
                form.network().to_string(),
                form.preview()
            );
        }
    }

    let accepted = form.type_expiry("1739").unwrap();
    println!("\n  Expiry typed \"1739\": {} keys accepted -> {}", accepted, form.expiry());

    println!("  Face before CVV: {:?}", form.face());
    form.focus_cvv(true);
    form.set_cvv("123");
    println!("  Face during CVV: {:?}", form.face());
    form.focus_cvv(false);
    println!("  Face after CVV:  {:?}", form.face());

    let saved = form.save();
    println!("\n  Saved: {}", form.is_saved());
    println!("  Snapshot: {:#?}", saved);
}
