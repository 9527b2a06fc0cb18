//! `Doubling<T, L>` — the pair `(first, second)` read as `first + second·ε`.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use hypernum_core::facade;
use hypernum_core::{Binary, HyperError, Nullary, Number, Result, Unary};

use crate::law::{Law, LawKind};
use crate::ops::{self as pair_ops, DoublingOps};

/// A doubled number over the inner type `T` under the law `L`.
///
/// Values are immutable; every operation returns a new pair.
///
/// # Ordering
///
/// `PartialOrd` and [`Number::total_cmp`] are lexicographic: by `first`,
/// then by `second`. None of these algebras is an ordered field; the order
/// exists for sorting and deduplication only.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Doubling<T, L> {
    first: T,
    second: T,
    #[cfg_attr(feature = "serde", serde(skip))]
    law: PhantomData<L>,
}

impl<T, L> Doubling<T, L> {
    /// Number of components in the indexable view.
    pub const COMPONENTS: usize = 2;

    /// Create `first + second·ε`.
    pub const fn new(first: T, second: T) -> Self {
        Self { first, second, law: PhantomData }
    }

    pub fn first(&self) -> &T {
        &self.first
    }

    pub fn second(&self) -> &T {
        &self.second
    }

    /// Deconstruct back into `(first, second)`.
    pub fn into_parts(self) -> (T, T) {
        (self.first, self.second)
    }

    /// Read-only component access: `0` is `first`, `1` is `second`.
    pub fn get(&self, index: usize) -> Result<&T> {
        match index {
            0 => Ok(&self.first),
            1 => Ok(&self.second),
            _ => Err(HyperError::IndexOutOfRange { index }),
        }
    }

    /// New pair with `f` applied to each component.
    pub fn map(&self, mut f: impl FnMut(&T) -> T) -> Self {
        Self::new(f(&self.first), f(&self.second))
    }

    /// Iterate over `[first, second]`.
    pub fn iter(&self) -> std::array::IntoIter<&T, 2> {
        [&self.first, &self.second].into_iter()
    }
}

impl<T: Number, L: Law> Doubling<T, L> {
    /// Promote an inner value: `(first, 0)`.
    #[track_caller]
    pub fn from_first(first: T) -> Self {
        Self::new(first, facade::zero())
    }

    /// Apply a unary operation to `first` only.
    pub fn first_call(&self, op: Unary) -> Result<Self> {
        let first = facade::try_unary(op, &self.first)?;
        Ok(Self::new(first, self.second.clone()))
    }

    /// Apply a unary operation to `second` only.
    pub fn second_call(&self, op: Unary) -> Result<Self> {
        let second = facade::try_unary(op, &self.second)?;
        Ok(Self::new(self.first.clone(), second))
    }

    /// Replace `first` with `first ∘ operand`.
    pub fn first_call_with(&self, op: Binary, operand: &T) -> Result<Self> {
        let first = facade::try_binary(op, &self.first, operand)?;
        Ok(Self::new(first, self.second.clone()))
    }

    /// Replace `second` with `second ∘ operand`.
    pub fn second_call_with(&self, op: Binary, operand: &T) -> Result<Self> {
        let second = facade::try_binary(op, &self.second, operand)?;
        Ok(Self::new(self.first.clone(), second))
    }

    /// Apply a unary operation to both components independently.
    pub fn both_call(&self, op: Unary) -> Result<Self> {
        self.first_call(op)?.second_call(op)
    }

    /// Scale both components on the right by an inner value.
    pub fn scale(&self, factor: &T) -> Result<Self> {
        self.first_call_with(Binary::Multiply, factor)?
            .second_call_with(Binary::Multiply, factor)
    }

    /// Squared norm `aā − γ·b̄b` as an inner value.
    ///
    /// For the diagonal law this is the componentwise product `a·b`.
    pub fn norm(&self) -> Result<T> {
        pair_ops::norm::<T, L>(self)
    }

    pub fn law() -> LawKind {
        L::KIND
    }

    /// Canonical constant of this pair type.
    #[track_caller]
    pub fn constant(op: Nullary) -> Self {
        facade::nullary(op)
    }
}

impl<T: Number, L: Law> From<T> for Doubling<T, L> {
    #[track_caller]
    fn from(first: T) -> Self {
        Self::from_first(first)
    }
}

impl<T, L> Index<usize> for Doubling<T, L> {
    type Output = T;

    /// Panics on indices outside `{0, 1}`. There is no `IndexMut`: the view
    /// is read-only.
    #[track_caller]
    fn index(&self, index: usize) -> &T {
        facade::fatal(self.get(index))
    }
}

impl<'a, T, L> IntoIterator for &'a Doubling<T, L> {
    type Item = &'a T;
    type IntoIter = std::array::IntoIter<&'a T, 2>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug, L: Law> fmt::Debug for Doubling<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(L::NAME)
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

impl<T: fmt::Display, L: Law> fmt::Display for Doubling<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", L::NAME, self.first, self.second)
    }
}

impl<T: Number, L: Law> Number for Doubling<T, L> {
    type Ops = DoublingOps<T, L>;
    type Scalar = T::Scalar;

    fn dimension() -> usize {
        2 * T::dimension()
    }

    fn is_finite(&self) -> bool {
        self.first.is_finite() && self.second.is_finite()
    }

    fn is_invertible(&self) -> bool {
        match L::KIND {
            LawKind::Diagonal => self.first.is_invertible() && self.second.is_invertible(),
            _ => facade::fatal(self.norm()).is_invertible(),
        }
    }

    fn total_cmp(&self, other: &Self) -> Ordering {
        self.first
            .total_cmp(&other.first)
            .then_with(|| self.second.total_cmp(&other.second))
    }

    fn push_leaves(&self, out: &mut Vec<Self::Scalar>) {
        self.first.push_leaves(out);
        self.second.push_leaves(out);
    }

    fn from_leaves(leaves: &[Self::Scalar]) -> Option<Self> {
        let half = T::dimension();
        if leaves.len() != 2 * half {
            return None;
        }
        let (lo, hi) = leaves.split_at(half);
        Some(Self::new(T::from_leaves(lo)?, T::from_leaves(hi)?))
    }
}

// Arithmetic operators route through the dispatcher.
macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $op:expr) => {
        impl<T: Number, L: Law> $trait for Doubling<T, L> {
            type Output = Self;

            #[track_caller]
            fn $method(self, rhs: Self) -> Self {
                facade::binary($op, &self, &rhs)
            }
        }

        impl<T: Number, L: Law> $trait<&Doubling<T, L>> for &Doubling<T, L> {
            type Output = Doubling<T, L>;

            #[track_caller]
            fn $method(self, rhs: &Doubling<T, L>) -> Doubling<T, L> {
                facade::binary($op, self, rhs)
            }
        }
    };
}

impl_binary_operator!(Add, add, Binary::Add);
impl_binary_operator!(Sub, sub, Binary::Subtract);
impl_binary_operator!(Mul, mul, Binary::Multiply);
impl_binary_operator!(Div, div, Binary::Divide);

impl<T: Number, L: Law> Neg for Doubling<T, L> {
    type Output = Self;

    #[track_caller]
    fn neg(self) -> Self {
        facade::unary(Unary::Negate, &self)
    }
}

impl<T: Number, L: Law> Neg for &Doubling<T, L> {
    type Output = Doubling<T, L>;

    #[track_caller]
    fn neg(self) -> Doubling<T, L> {
        facade::unary(Unary::Negate, self)
    }
}
