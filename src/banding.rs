//! Percentage-to-color banding for heatmap zone fills.
//!
//! A make percentage maps to one of four discrete tiers. The boundaries are
//! fixed: a value exactly on a boundary belongs to the higher tier.

use crate::color::Rgba;

/// Discrete display tier for a make percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorTier {
    /// 50% and above.
    Good,
    /// 40% up to (but not including) 50%.
    Average,
    /// 30% up to (but not including) 40%.
    BelowAverage,
    /// Below 30%.
    Poor,
}

impl ColorTier {
    /// Map a make percentage to its tier.
    ///
    /// Evaluated top-down, first match wins: `>= 50` is [`Good`],
    /// `>= 40` is [`Average`], `>= 30` is [`BelowAverage`], anything
    /// lower is [`Poor`].
    ///
    /// [`Good`]: ColorTier::Good
    /// [`Average`]: ColorTier::Average
    /// [`BelowAverage`]: ColorTier::BelowAverage
    /// [`Poor`]: ColorTier::Poor
    #[must_use]
    pub fn for_percentage(pct: f64) -> Self {
        if pct >= 50.0 {
            Self::Good
        } else if pct >= 40.0 {
            Self::Average
        } else if pct >= 30.0 {
            Self::BelowAverage
        } else {
            Self::Poor
        }
    }

    /// Fill color used when rendering a zone of this tier.
    #[must_use]
    pub const fn fill(self) -> Rgba {
        match self {
            Self::Good => Rgba::rgb(34, 197, 94),          // green
            Self::Average => Rgba::rgb(245, 158, 11),      // amber
            Self::BelowAverage => Rgba::rgb(249, 115, 22), // orange
            Self::Poor => Rgba::rgb(239, 68, 68),          // red
        }
    }
}
