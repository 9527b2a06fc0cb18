//! Multiplication laws for the generator ε of a doubling pair.
//!
//! For the three Cayley–Dickson style laws the product reads
//!
//! ```text
//! (a, b)·(c, d) = (ac + γ·d̄b, da + bc̄)        γ = ε²
//! ```
//!
//! The diagonal law has no cross term at all: `(a, b)·(c, d) = (ac, bd)`.

use std::fmt::Debug;
use std::hash::Hash;

/// Square of the generator, as a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Pos,
    Neg,
    Zero,
}

impl Sign {
    pub fn as_i8(self) -> i8 {
        match self {
            Sign::Pos => 1,
            Sign::Neg => -1,
            Sign::Zero => 0,
        }
    }

    pub fn flip(self) -> Sign {
        match self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
            Sign::Zero => Sign::Zero,
        }
    }
}

/// Which of the four doubling laws a marker stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LawKind {
    Complex,
    Dual,
    SplitComplex,
    Diagonal,
}

impl LawKind {
    /// `ε²` for the Cayley–Dickson style laws; `None` for the diagonal law,
    /// which has no generator cross term.
    pub fn unit_square(self) -> Option<Sign> {
        match self {
            LawKind::Complex => Some(Sign::Neg),
            LawKind::Dual => Some(Sign::Zero),
            LawKind::SplitComplex => Some(Sign::Pos),
            LawKind::Diagonal => None,
        }
    }
}

/// Zero-sized marker selecting a doubling law at the type level.
pub trait Law: Copy + Default + Debug + Eq + Ord + Hash + Send + Sync + 'static {
    /// Variant name used when rendering values, e.g. `Complex(1, 0)`.
    const NAME: &'static str;
    const KIND: LawKind;
}

macro_rules! define_law {
    ($marker:ident, $name:literal, $kind:expr) => {
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $marker;

        impl Law for $marker {
            const NAME: &'static str = $name;
            const KIND: LawKind = $kind;
        }
    };
}

define_law!(ComplexLaw, "Complex", LawKind::Complex);
define_law!(DualLaw, "Dual", LawKind::Dual);
define_law!(SplitComplexLaw, "SplitComplex", LawKind::SplitComplex);
define_law!(DiagonalLaw, "Diagonal", LawKind::Diagonal);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_squares() {
        assert_eq!(LawKind::Complex.unit_square(), Some(Sign::Neg));
        assert_eq!(LawKind::Dual.unit_square(), Some(Sign::Zero));
        assert_eq!(LawKind::SplitComplex.unit_square(), Some(Sign::Pos));
        assert_eq!(LawKind::Diagonal.unit_square(), None);
    }

    #[test]
    fn test_sign_values() {
        assert_eq!(Sign::Pos.as_i8(), 1);
        assert_eq!(Sign::Neg.as_i8(), -1);
        assert_eq!(Sign::Zero.as_i8(), 0);
        assert_eq!(Sign::Neg.flip(), Sign::Pos);
        assert_eq!(Sign::Zero.flip(), Sign::Zero);
    }

    #[test]
    fn test_names() {
        assert_eq!(ComplexLaw::NAME, "Complex");
        assert_eq!(DualLaw::NAME, "Dual");
        assert_eq!(SplitComplexLaw::NAME, "SplitComplex");
        assert_eq!(DiagonalLaw::NAME, "Diagonal");
        assert_eq!(SplitComplexLaw::KIND, LawKind::SplitComplex);
    }
}
