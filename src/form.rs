//! Headless model of a card entry form.
//!
//! [`CardForm`] holds what a card entry screen shows: holder name, number,
//! expiry, CVV, and which face of the card is turned toward the user. Edits
//! to the expiry go through an [`ExpiryInputFilter`]; edits to the number are
//! committed and then reformatted by a [`CardNumberFormatter`]. Rendering and
//! animation belong to the UI layer.
//!
//! # Example
//!
//! ```
//! use card_input::form::{CardFace, CardForm};
//! use card_input::{CardNetwork, CardNumberFormatter, ExpiryInputFilter, YearSuffix};
//!
//! let filter = ExpiryInputFilter::with_year_suffix("24".parse::<YearSuffix>().unwrap());
//! let mut form = CardForm::with_parts(filter, CardNumberFormatter::default());
//!
//! form.type_card_number("4111111111111111").unwrap();
//! assert_eq!(form.network(), CardNetwork::Visa);
//! assert_eq!(form.formatted_number(), "4111 1111 1111 1111");
//!
//! // "3" cannot start a month and is dropped
//! let accepted = form.type_expiry("30925").unwrap();
//! assert_eq!(accepted, 4);
//! assert_eq!(form.expiry(), "09/25");
//!
//! form.focus_cvv(true);
//! assert_eq!(form.face(), CardFace::Back);
//! ```

use crate::edit::{EditProposal, FilterDecision};
use crate::error::EditError;
use crate::expiry::ExpiryInputFilter;
use crate::format::{render_with_separator, CardNumberFormatter, PaddingSpan};
use crate::network::{classify, CardNetwork};
use crate::preview::card_preview;

/// Side of the card facing the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CardFace {
    /// Number, holder name, and expiry.
    #[default]
    Front,
    /// CVV.
    Back,
}

impl CardFace {
    /// The other side.
    #[inline]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }
}

/// Everything a card face needs to draw itself.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormSnapshot {
    /// Holder name as typed.
    pub holder_name: String,
    /// Masked number template, see [`card_preview`].
    pub number_preview: String,
    /// Network for logo and color.
    pub network: CardNetwork,
    /// Expiry as typed, `MM/YY` when complete.
    pub expiry: String,
    /// Number of CVV characters typed.
    pub cvv_length: usize,
    /// Visible face.
    pub face: CardFace,
    /// Whether the card was saved and not edited since.
    pub saved: bool,
}

/// State of a card entry form.
#[derive(Debug, Clone)]
pub struct CardForm {
    holder_name: String,
    number: String,
    spans: Vec<PaddingSpan>,
    expiry: String,
    cvv: String,
    face: CardFace,
    saved: bool,
    expiry_filter: ExpiryInputFilter,
    formatter: CardNumberFormatter,
}

impl Default for CardForm {
    fn default() -> Self {
        Self::new()
    }
}

impl CardForm {
    /// Creates an empty form bounded by the current year, with a 16-digit
    /// number field.
    pub fn new() -> Self {
        Self::with_parts(ExpiryInputFilter::new(), CardNumberFormatter::default())
    }

    /// Creates an empty form using the given filter and formatter.
    pub fn with_parts(expiry_filter: ExpiryInputFilter, formatter: CardNumberFormatter) -> Self {
        Self {
            holder_name: String::new(),
            number: String::new(),
            spans: Vec::new(),
            expiry: String::new(),
            cvv: String::new(),
            face: CardFace::Front,
            saved: false,
            expiry_filter,
            formatter,
        }
    }

    // ------------------------------------------------------------------
    // Expiry
    // ------------------------------------------------------------------

    /// Applies one edit to the expiry field if the filter accepts it.
    ///
    /// Returns whether the buffer changed.
    pub fn edit_expiry(&mut self, proposal: &EditProposal) -> Result<bool, EditError> {
        let decision = self.expiry_filter.evaluate(&self.expiry, proposal)?;
        if decision.is_rejected() {
            return Ok(false);
        }

        let next = proposal.apply(&self.expiry, &decision);
        let changed = next != self.expiry;
        self.expiry = next;
        self.saved &= !changed;
        Ok(changed)
    }

    /// Types `keys` into the expiry field one keystroke at a time.
    ///
    /// Returns how many keystrokes were accepted.
    pub fn type_expiry(&mut self, keys: &str) -> Result<usize, EditError> {
        let mut accepted = 0;
        for key in keys.chars() {
            let proposal = EditProposal::keystroke(&self.expiry, key);
            if self.edit_expiry(&proposal)? {
                accepted += 1;
            }
        }
        Ok(accepted)
    }

    /// Deletes the last expiry character.
    pub fn backspace_expiry(&mut self) -> Result<bool, EditError> {
        let proposal = EditProposal::backspace(&self.expiry);
        self.edit_expiry(&proposal)
    }

    // ------------------------------------------------------------------
    // Card number
    // ------------------------------------------------------------------

    /// Commits one edit to the number field and reformats it.
    ///
    /// Returns whether the buffer changed.
    pub fn edit_card_number(&mut self, proposal: &EditProposal) -> Result<bool, EditError> {
        proposal.check_bounds(&self.number)?;

        let decision = FilterDecision::Accept(proposal.inserted().to_string());
        let mut next = proposal.apply(&self.number, &decision);
        self.formatter.reformat_in_place(&mut next, &mut self.spans);

        let changed = next != self.number;
        self.number = next;
        self.saved &= !changed;
        Ok(changed)
    }

    /// Types `keys` into the number field one keystroke at a time.
    ///
    /// Returns how many keystrokes changed the field; keystrokes past the
    /// length limit are truncated away and do not count.
    pub fn type_card_number(&mut self, keys: &str) -> Result<usize, EditError> {
        let mut accepted = 0;
        for key in keys.chars() {
            let proposal = EditProposal::keystroke(&self.number, key);
            if self.edit_card_number(&proposal)? {
                accepted += 1;
            }
        }
        Ok(accepted)
    }

    /// Deletes the last number character.
    pub fn backspace_card_number(&mut self) -> Result<bool, EditError> {
        let proposal = EditProposal::backspace(&self.number);
        self.edit_card_number(&proposal)
    }

    // ------------------------------------------------------------------
    // Plain fields and card face
    // ------------------------------------------------------------------

    /// Replaces the holder name.
    pub fn set_holder_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.saved &= name == self.holder_name;
        self.holder_name = name;
    }

    /// Replaces the CVV.
    pub fn set_cvv(&mut self, cvv: impl Into<String>) {
        let cvv = cvv.into();
        self.saved &= cvv == self.cvv;
        self.cvv = cvv;
    }

    /// Marks the card as saved and returns what was saved.
    ///
    /// Nothing is stored; the flag only drives the confirmation shown to the
    /// user. Any later change to a field clears it.
    pub fn save(&mut self) -> FormSnapshot {
        self.saved = true;
        tracing::info!(network = %self.network(), "card saved");
        self.snapshot()
    }

    /// Returns true if the card was saved and not edited since.
    #[inline]
    pub const fn is_saved(&self) -> bool {
        self.saved
    }

    /// Turns the card over when the CVV field gains or loses focus.
    pub fn focus_cvv(&mut self, focused: bool) -> CardFace {
        let face = if focused { CardFace::Back } else { CardFace::Front };
        if face != self.face {
            tracing::debug!(?face, "card flipped");
            self.face = face;
        }
        self.face
    }

    /// Turns the card over.
    pub fn flip(&mut self) -> CardFace {
        self.face = self.face.flipped();
        tracing::debug!(face = ?self.face, "card flipped");
        self.face
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Holder name.
    #[inline]
    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    /// Card number digits, without separators.
    #[inline]
    pub fn card_number(&self) -> &str {
        &self.number
    }

    /// Grouping spans over [`card_number`](Self::card_number).
    #[inline]
    pub fn spans(&self) -> &[PaddingSpan] {
        &self.spans
    }

    /// Card number with a space between groups.
    pub fn formatted_number(&self) -> String {
        render_with_separator(&self.number, &self.spans, " ")
    }

    /// Expiry buffer.
    #[inline]
    pub fn expiry(&self) -> &str {
        &self.expiry
    }

    /// CVV.
    #[inline]
    pub fn cvv(&self) -> &str {
        &self.cvv
    }

    /// Visible face.
    #[inline]
    pub const fn face(&self) -> CardFace {
        self.face
    }

    /// Network for the number typed so far.
    #[inline]
    pub fn network(&self) -> CardNetwork {
        classify(&self.number)
    }

    /// Masked number template for the card face.
    #[inline]
    pub fn preview(&self) -> String {
        card_preview(&self.number)
    }

    /// Captures the drawable state.
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            holder_name: self.holder_name.clone(),
            number_preview: self.preview(),
            network: self.network(),
            expiry: self.expiry.clone(),
            cvv_length: self.cvv.chars().count(),
            face: self.face,
            saved: self.saved,
        }
    }
}
