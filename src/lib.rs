//! # card_input
//!
//! Keystroke filtering and display formatting for card-entry fields.
//!
//! ## Features
//!
//! - `MM/YY` expiry filter that refuses invalid months and past years as they
//!   are typed, and inserts the `/` itself
//! - Card number grouping as layout spans, so the field text stays digits only
//! - Demo-level network classification and a masked card-face preview
//! - A headless card form model tying the pieces together
//! - Multiple interfaces: library, CLI, WASM
//!
//! ## Quick Start
//!
//! ```rust
//! use card_input::{EditProposal, ExpiryInputFilter, FilterDecision, YearSuffix};
//!
//! let filter = ExpiryInputFilter::with_year_suffix("24".parse::<YearSuffix>().unwrap());
//!
//! // First month digit can only be 0 or 1
//! let decision = filter.evaluate("", &EditProposal::insert(0, "7")).unwrap();
//! assert_eq!(decision, FilterDecision::Reject);
//!
//! // Typing the first year digit adds the separator
//! let decision = filter.evaluate("05", &EditProposal::insert(2, "2")).unwrap();
//! assert_eq!(decision.replacement(), "/2");
//! ```
//!
//! ## Card Number Formatting
//!
//! ```rust
//! use card_input::CardNumberFormatter;
//!
//! let formatter = CardNumberFormatter::new(12).with_max_length(16);
//! let formatted = formatter.reformat("4111111111111111");
//!
//! // Text is untouched, spans mark the group ends
//! assert_eq!(formatted.text(), "4111111111111111");
//! let starts: Vec<usize> = formatted.spans().iter().map(|s| s.start()).collect();
//! assert_eq!(starts, vec![3, 7, 11]);
//! ```
//!
//! ## Card Face
//!
//! ```rust
//! use card_input::{classify, card_preview, CardNetwork};
//!
//! assert_eq!(classify("41"), CardNetwork::Undetermined);
//! assert_eq!(classify("4111"), CardNetwork::Visa);
//! assert_eq!(card_preview("4111"), "4111 **** **** ****");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialize/Deserialize for value types |
//! | `cli` | Command-line tool |
//! | `wasm` | WebAssembly support |
//!
//! ## Scope
//!
//! The network classification is a first-digit check meant for picking a
//! logo. There is no Luhn check, no BIN table, and no handling of card data
//! beyond the text of the fields.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod edit;
pub mod error;
pub mod expiry;
pub mod form;
pub mod format;
pub mod network;
pub mod padding;
pub mod preview;

#[cfg(feature = "wasm")]
mod wasm;

// Re-export main types at crate root
pub use edit::{EditProposal, FilterDecision};
pub use error::EditError;
pub use expiry::{ExpiryInputFilter, RejectReason, YearSuffix, EXPIRY_MAX_LEN};
pub use form::{CardFace, CardForm, FormSnapshot};
pub use format::{reformat, CardNumberFormatter, FormattedNumber, PaddingSpan};
pub use network::{classify, CardNetwork};
pub use padding::PaddingWidth;
pub use preview::card_preview;
