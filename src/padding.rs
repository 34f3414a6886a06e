//! Padding width derivation for [`CardNumberFormatter`](crate::CardNumberFormatter).
//!
//! The gap between digit groups can be given directly in pixels, relative
//! to the width of a glyph in the field's font (em), or in scale-independent
//! pixels (sp). Fractional results are truncated toward zero.
//!
//! # Example
//!
//! ```
//! use card_input::padding::PaddingWidth;
//!
//! // One "x" in a 14.5px-wide font
//! assert_eq!(PaddingWidth::from_em(14.5, 1.0).unwrap().px(), 14);
//!
//! // 6sp on a 2.75x display
//! assert_eq!(PaddingWidth::from_sp(6.0, 2.75).unwrap().px(), 16);
//!
//! assert!(PaddingWidth::from_px(-1).is_err());
//! ```

use crate::error::EditError;

/// A validated, non-negative padding width in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaddingWidth(u32);

impl PaddingWidth {
    /// Padding given directly in pixels.
    pub fn from_px(px: i64) -> Result<Self, EditError> {
        if px < 0 {
            return Err(EditError::NegativePadding(px));
        }
        u32::try_from(px)
            .map(Self)
            .map_err(|_| EditError::InvalidPadding(format!("{}px does not fit in 32 bits", px)))
    }

    /// `em` times the width of one glyph in the field's font.
    pub fn from_em(glyph_width: f32, em: f32) -> Result<Self, EditError> {
        Self::scaled(glyph_width, em)
    }

    /// `sp` scale-independent pixels at the display's scaled density.
    pub fn from_sp(sp: f32, scaled_density: f32) -> Result<Self, EditError> {
        Self::scaled(sp, scaled_density)
    }

    fn scaled(value: f32, factor: f32) -> Result<Self, EditError> {
        let px = value * factor;
        if !px.is_finite() {
            return Err(EditError::InvalidPadding(format!(
                "{} x {} is not a finite width",
                value, factor
            )));
        }
        // Truncates toward zero; from_px rejects what does not fit
        Self::from_px(px.trunc() as i64)
    }

    /// Width in pixels.
    #[inline]
    pub const fn px(&self) -> u32 {
        self.0
    }
}

impl From<u32> for PaddingWidth {
    fn from(px: u32) -> Self {
        Self(px)
    }
}
