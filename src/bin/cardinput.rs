//! CLI tool for exercising card input fields from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Type keys into an expiry field, one at a time
//! cardinput expiry 0527
//!
//! # Pin the current year, refuse non-digits
//! cardinput expiry 1224 --year 24 --digits-only
//!
//! # Group a card number
//! cardinput format 4111111111111111 --padding 12
//!
//! # Network and card face preview
//! cardinput network 4111
//! cardinput preview 411111
//!
//! # Derive a padding width
//! cardinput padding em 1.5 --scale 9.0
//! ```
//!
//! Set `RUST_LOG=card_input=trace` (or pass `--verbose`) to see every
//! filter decision.

use card_input::{
    classify, card_preview, CardNumberFormatter, EditProposal, ExpiryInputFilter, FormattedNumber,
    PaddingWidth, YearSuffix,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "cardinput")]
#[command(author, version, about = "Card number and expiry input formatting tool")]
struct Cli {
    /// Log every filter decision
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Type keys into an MM/YY expiry field
    Expiry {
        /// Keys to type, in order
        keys: String,

        /// Two-digit current year (defaults to today's)
        #[arg(short, long)]
        year: Option<String>,

        /// Reject every key that is not a digit
        #[arg(long)]
        digits_only: bool,
    },

    /// Compute grouping for a card number
    Format {
        /// Card number as typed
        card_number: String,

        /// Padding after each group, in pixels
        #[arg(short, long, default_value = "0")]
        padding: u32,

        /// Maximum length (0 for no limit)
        #[arg(short, long, default_value = "16")]
        max_length: usize,

        /// Separator used for the text rendition
        #[arg(short, long, default_value = " ")]
        separator: String,
    },

    /// Classify the card network
    Network {
        /// Card number (or partial number)
        card_number: String,
    },

    /// Show the masked card face
    Preview {
        /// Card number (or partial number)
        card_number: String,
    },

    /// Derive a padding width in pixels
    Padding {
        /// Unit of VALUE
        unit: PaddingUnit,

        /// Padding amount in UNIT
        #[arg(allow_negative_numbers = true)]
        value: f32,

        /// Glyph width (em) or scaled density (sp)
        #[arg(long, default_value = "1.0")]
        scale: f32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaddingUnit {
    Px,
    Em,
    Sp,
}

#[derive(Serialize)]
struct KeyStep {
    key: char,
    accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    buffer: String,
}

#[derive(Serialize)]
struct FormatReport<'a> {
    #[serde(flatten)]
    formatted: &'a FormattedNumber,
    rendered: String,
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Commands::Expiry {
            keys,
            year,
            digits_only,
        } => {
            cmd_expiry(&keys, year.as_deref(), digits_only, cli.output);
        }
        Commands::Format {
            card_number,
            padding,
            max_length,
            separator,
        } => {
            cmd_format(&card_number, padding, max_length, &separator, cli.output);
        }
        Commands::Network { card_number } => {
            cmd_network(&card_number, cli.output);
        }
        Commands::Preview { card_number } => {
            cmd_preview(&card_number, cli.output);
        }
        Commands::Padding { unit, value, scale } => {
            cmd_padding(unit, value, scale, cli.output);
        }
    }
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("card_input=trace"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("card_input=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn cmd_expiry(keys: &str, year: Option<&str>, digits_only: bool, output: OutputFormat) {
    let mut filter = match year {
        Some(y) => match YearSuffix::new(y) {
            Ok(suffix) => ExpiryInputFilter::with_year_suffix(suffix),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(2);
            }
        },
        None => ExpiryInputFilter::new(),
    };
    if digits_only {
        filter = filter.digits_only();
    }
    tracing::debug!(year = %filter.year_suffix(), "expiry filter ready");

    let mut buffer = String::new();
    let mut steps = Vec::with_capacity(keys.len());

    for key in keys.chars() {
        let proposal = EditProposal::keystroke(&buffer, key);
        let decision = match filter.evaluate(&buffer, &proposal) {
            Ok(decision) => decision,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        };
        let reason = if decision.is_rejected() {
            filter
                .explain(&buffer, &proposal)
                .ok()
                .flatten()
                .map(|r| r.to_string())
        } else {
            None
        };
        buffer = proposal.apply(&buffer, &decision);
        steps.push(KeyStep {
            key,
            accepted: decision.is_accepted(),
            reason,
            buffer: buffer.clone(),
        });
    }

    match output {
        OutputFormat::Text => {
            for step in &steps {
                match (&step.reason, step.accepted) {
                    (_, true) => println!("'{}'  accepted  {}", step.key, step.buffer),
                    (Some(reason), false) => {
                        println!("'{}'  rejected  {} ({})", step.key, step.buffer, reason)
                    }
                    (None, false) => println!("'{}'  rejected  {}", step.key, step.buffer),
                }
            }
            println!("Result: {}", buffer);
        }
        OutputFormat::Json => print_json(&steps),
    }
}

fn cmd_format(
    card_number: &str,
    padding: u32,
    max_length: usize,
    separator: &str,
    output: OutputFormat,
) {
    let formatted = CardNumberFormatter::new(padding)
        .with_max_length(max_length)
        .reformat(card_number);
    let rendered = formatted.render(separator);

    match output {
        OutputFormat::Text => {
            println!("Text: {}", formatted.text());
            println!("Rendered: {}", rendered);
            for span in formatted.spans() {
                println!(
                    "Span: {}..{} +{}px",
                    span.start(),
                    span.end(),
                    span.padding_px()
                );
            }
        }
        OutputFormat::Json => print_json(&FormatReport {
            formatted: &formatted,
            rendered,
        }),
    }
}

fn cmd_network(card_number: &str, output: OutputFormat) {
    let network = classify(card_number);
    match output {
        OutputFormat::Text => println!("Network: {}", network),
        OutputFormat::Json => print_json(&network),
    }
}

fn cmd_preview(card_number: &str, output: OutputFormat) {
    let preview = card_preview(card_number);
    match output {
        OutputFormat::Text => println!("{}", preview),
        OutputFormat::Json => print_json(&preview),
    }
}

fn cmd_padding(unit: PaddingUnit, value: f32, scale: f32, output: OutputFormat) {
    let result = match unit {
        PaddingUnit::Px => PaddingWidth::from_px(value.trunc() as i64),
        PaddingUnit::Em => PaddingWidth::from_em(scale, value),
        PaddingUnit::Sp => PaddingWidth::from_sp(value, scale),
    };

    match result {
        Ok(width) => match output {
            OutputFormat::Text => println!("Padding: {}px", width.px()),
            OutputFormat::Json => print_json(&width),
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
