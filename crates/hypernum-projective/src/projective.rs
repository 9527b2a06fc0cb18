use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use hypernum_core::facade;
use hypernum_core::{Binary, Number, Unary};

use crate::ops::ProjectiveOps;

/// An inner value, or the point at infinity reached along it.
///
/// Equality compares both fields: infinities with distinct residues are
/// distinct, there is no single canonical infinity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Projective<T> {
    value: T,
    is_infinity: bool,
}

impl<T> Projective<T> {
    pub const fn new(value: T, is_infinity: bool) -> Self {
        Self { value, is_infinity }
    }

    pub const fn finite(value: T) -> Self {
        Self::new(value, false)
    }

    /// The infinity `1/value`.
    pub const fn infinity(value: T) -> Self {
        Self::new(value, true)
    }

    /// The inner value; for an infinity, its reciprocal residue.
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn is_infinity(&self) -> bool {
        self.is_infinity
    }

    pub fn into_parts(self) -> (T, bool) {
        (self.value, self.is_infinity)
    }
}

impl<T> From<T> for Projective<T> {
    fn from(value: T) -> Self {
        Self::finite(value)
    }
}

/// Finite values order before infinities; ties break on the inner value.
impl<T: PartialOrd> PartialOrd for Projective<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.is_infinity.cmp(&other.is_infinity) {
            Ordering::Equal => self.value.partial_cmp(&other.value),
            unequal => Some(unequal),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Projective<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_infinity {
            write!(f, "Infinity({})", self.value)
        } else {
            self.value.fmt(f)
        }
    }
}

impl<T: Number> Number for Projective<T> {
    type Ops = ProjectiveOps<T>;
    type Scalar = T::Scalar;

    fn dimension() -> usize {
        T::dimension()
    }

    fn is_finite(&self) -> bool {
        !self.is_infinity && self.value.is_finite()
    }

    fn is_invertible(&self) -> bool {
        true
    }

    fn total_cmp(&self, other: &Self) -> Ordering {
        self.is_infinity
            .cmp(&other.is_infinity)
            .then_with(|| self.value.total_cmp(&other.value))
    }

    fn push_leaves(&self, out: &mut Vec<Self::Scalar>) {
        self.value.push_leaves(out);
    }

    fn from_leaves(leaves: &[Self::Scalar]) -> Option<Self> {
        T::from_leaves(leaves).map(Self::finite)
    }
}

macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $op:expr) => {
        impl<T: Number> $trait for Projective<T> {
            type Output = Self;

            #[track_caller]
            fn $method(self, rhs: Self) -> Self {
                facade::binary($op, &self, &rhs)
            }
        }

        impl<T: Number> $trait<&Projective<T>> for &Projective<T> {
            type Output = Projective<T>;

            #[track_caller]
            fn $method(self, rhs: &Projective<T>) -> Projective<T> {
                facade::binary($op, self, rhs)
            }
        }
    };
}

impl_binary_operator!(Add, add, Binary::Add);
impl_binary_operator!(Sub, sub, Binary::Subtract);
impl_binary_operator!(Mul, mul, Binary::Multiply);
impl_binary_operator!(Div, div, Binary::Divide);

impl<T: Number> Neg for Projective<T> {
    type Output = Self;

    #[track_caller]
    fn neg(self) -> Self {
        facade::unary(Unary::Negate, &self)
    }
}

impl<T: Number> Neg for &Projective<T> {
    type Output = Projective<T>;

    #[track_caller]
    fn neg(self) -> Projective<T> {
        facade::unary(Unary::Negate, self)
    }
}
