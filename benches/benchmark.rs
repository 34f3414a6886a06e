//! Benchmarks for card_input per-keystroke work.
//!
//! Run with: cargo bench

use card_input::{
    card_preview, classify, CardForm, CardNumberFormatter, EditProposal, ExpiryInputFilter,
    YearSuffix,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const VISA_16: &str = "4111111111111111";
const LONG_PASTE: &str = "4111111111111111411111111111111141111111";

fn filter() -> ExpiryInputFilter {
    ExpiryInputFilter::with_year_suffix(YearSuffix::from_year(2024))
}

/// Benchmark single expiry keystrokes at each slot
fn bench_expiry_keystroke(c: &mut Criterion) {
    let mut group = c.benchmark_group("expiry_keystroke");
    let f = filter();

    let cases = [
        ("first_month_digit", "", EditProposal::insert(0, "1")),
        ("second_month_digit", "1", EditProposal::insert(1, "2")),
        ("separator", "12", EditProposal::insert(2, "2")),
        ("last_year_digit", "12/2", EditProposal::insert(4, "9")),
        ("rejected_paste", "", EditProposal::insert(0, "12/29")),
        ("deletion", "12/29", EditProposal::delete(4, 5)),
    ];

    for (name, buffer, proposal) in cases.iter() {
        group.bench_function(*name, |b| {
            b.iter(|| f.evaluate(black_box(buffer), black_box(proposal)))
        });
    }

    group.finish();
}

/// Benchmark typing a whole expiry, committing each accepted key
fn bench_expiry_typing(c: &mut Criterion) {
    let f = filter();

    c.bench_function("expiry_type_12_29", |b| {
        b.iter(|| {
            let mut buffer = String::new();
            for key in black_box("1229").chars() {
                let proposal = EditProposal::keystroke(&buffer, key);
                if let Ok(decision) = f.evaluate(&buffer, &proposal) {
                    buffer = proposal.apply(&buffer, &decision);
                }
            }
            buffer
        })
    });
}

/// Benchmark span computation for growing inputs
fn bench_reformat(c: &mut Criterion) {
    let mut group = c.benchmark_group("reformat");
    let formatter = CardNumberFormatter::new(12).with_max_length(16);
    let unlimited = CardNumberFormatter::new(12).with_max_length(0);

    for len in [4usize, 8, 16, 40].iter() {
        let input = &LONG_PASTE[..*len];
        group.throughput(Throughput::Elements(*len as u64));

        group.bench_with_input(BenchmarkId::new("truncated", len), input, |b, input| {
            b.iter(|| formatter.reformat(black_box(input)))
        });

        group.bench_with_input(BenchmarkId::new("unlimited", len), input, |b, input| {
            b.iter(|| unlimited.reformat(black_box(input)))
        });
    }

    group.bench_function("in_place_reuse", |b| {
        let mut buffer = String::with_capacity(LONG_PASTE.len());
        let mut spans = Vec::with_capacity(8);
        b.iter(|| {
            buffer.clear();
            buffer.push_str(black_box(LONG_PASTE));
            formatter.reformat_in_place(&mut buffer, &mut spans);
            spans.len()
        })
    });

    group.finish();
}

/// Benchmark the card face helpers run after every number edit
fn bench_card_face(c: &mut Criterion) {
    let mut group = c.benchmark_group("card_face");

    group.bench_function("classify", |b| b.iter(|| classify(black_box(VISA_16))));

    group.bench_function("preview_partial", |b| {
        b.iter(|| card_preview(black_box("411111")))
    });

    group.bench_function("preview_full", |b| {
        b.iter(|| card_preview(black_box(VISA_16)))
    });

    let formatted = CardNumberFormatter::new(0).reformat(VISA_16);
    group.bench_function("render", |b| b.iter(|| black_box(&formatted).render(" ")));

    group.finish();
}

/// Benchmark filling a whole form
fn bench_form(c: &mut Criterion) {
    c.bench_function("form_fill", |b| {
        b.iter(|| {
            let mut form = CardForm::with_parts(filter(), CardNumberFormatter::new(12));
            form.set_holder_name("Ada Lovelace");
            let _ = form.type_card_number(black_box(VISA_16));
            let _ = form.type_expiry(black_box("0729"));
            form.focus_cvv(true);
            form.set_cvv("123");
            form.snapshot()
        })
    });
}

criterion_group!(
    benches,
    bench_expiry_keystroke,
    bench_expiry_typing,
    bench_reformat,
    bench_card_face,
    bench_form,
);

criterion_main!(benches);
