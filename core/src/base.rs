//! Canonical nucleotide bases.

use std::fmt;

/// A canonical nucleotide base.
///
/// Only the four uppercase symbols `A`, `C`, `G`, and `T` are canonical. Gaps, ambiguity codes,
/// and soft-masked lowercase bases have no representation here and are excluded from all tallies.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum Base {
    /// Adenine.
    A = 0,
    /// Cytosine.
    C = 1,
    /// Guanine.
    G = 2,
    /// Thymine.
    T = 3,
}

impl Base {
    /// All canonical bases, in `A`, `C`, `G`, `T` order.
    pub const ALL: [Base; 4] = [Base::A, Base::C, Base::G, Base::T];

    /// Returns the character symbol of the base.
    pub fn symbol(&self) -> char {
        match self {
            Self::A => 'A',
            Self::C => 'C',
            Self::G => 'G',
            Self::T => 'T',
        }
    }

    /// Returns the base matching a raw symbol if canonical, otherwise `None`.
    ///
    /// Matching is case-sensitive, so a soft-masked lowercase base is not canonical.
    pub fn try_from_symbol(symbol: u8) -> Option<Self> {
        match symbol {
            b'A' => Some(Self::A),
            b'C' => Some(Self::C),
            b'G' => Some(Self::G),
            b'T' => Some(Self::T),
            _ => None,
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
