// src/crack_model/regime.rs

use std::fmt;

/// Compliance branch a stress sample falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Regime {
    /// Every crack is open and frictionless.
    Open,
    /// Closed cracks slide forward (loading, before the peak).
    ForwardSliding,
    /// Closed cracks slide backwards (at or after the peak).
    ReverseSliding,
}

impl Regime {
    /// Selects the regime of sample `index` with normalized stress `normalized_stress`.
    ///
    /// Samples strictly before `peak_index` are on the loading branch and slide
    /// forward once the normalized stress reaches 1. The peak sample and every
    /// sample after it slide backwards only while the normalized stress stays
    /// strictly above 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_crack_model::Regime;
    ///
    /// assert_eq!(Regime::classify(0, 2, 1.0), Regime::ForwardSliding);
    /// assert_eq!(Regime::classify(3, 2, 1.0), Regime::Open);
    /// assert_eq!(Regime::classify(2, 2, 1.5), Regime::ReverseSliding);
    /// ```
    pub fn classify(index: usize, peak_index: usize, normalized_stress: f64) -> Self {
        if index < peak_index {
            if normalized_stress < 1.0 { Regime::Open } else { Regime::ForwardSliding }
        } else if normalized_stress > 1.0 {
            Regime::ReverseSliding
        } else {
            Regime::Open
        }
    }

    pub fn is_sliding(&self) -> bool {
        !matches!(self, Regime::Open)
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Regime::Open => write!(f, "open"),
            Regime::ForwardSliding => write!(f, "forward sliding"),
            Regime::ReverseSliding => write!(f, "reverse sliding"),
        }
    }
}
