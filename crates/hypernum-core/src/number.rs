//! The capability contract shared by leaves and constructed types.
//!
//! A constructed type (`Complex<T>`, `Projective<T>`, ...) implements
//! [`Number`] itself, so it can serve as the inner type of another
//! construction to any depth.

use std::cmp::Ordering;
use std::fmt;

use crate::dispatch::{Operations, ScalarOps};
use crate::scalar::Scalar;

/// Everything a construction needs from its inner type.
///
/// Values are immutable: every operation returns a new value.
pub trait Number:
    Clone + PartialEq + PartialOrd + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// The dispatcher interpreting operation requests for this type.
    type Ops: Operations<Self> + Default;

    /// Leaf scalar at the bottom of the tower.
    type Scalar: Scalar;

    /// Number of leaf scalars in one value.
    fn dimension() -> usize;

    fn is_finite(&self) -> bool;

    fn is_invertible(&self) -> bool;

    /// Explicit total order. Not a field order; only meant for sorting and
    /// deduplication.
    fn total_cmp(&self, other: &Self) -> Ordering;

    /// Append the leaves in construction order (first half before second).
    fn push_leaves(&self, out: &mut Vec<Self::Scalar>);

    /// Rebuild a value from exactly [`Number::dimension`] leaves.
    fn from_leaves(leaves: &[Self::Scalar]) -> Option<Self>;

    fn leaves(&self) -> Vec<Self::Scalar> {
        let mut out = Vec::with_capacity(Self::dimension());
        self.push_leaves(&mut out);
        out
    }
}

macro_rules! impl_number_for_scalar {
    ($ty:ty) => {
        impl Number for $ty {
            type Ops = ScalarOps<$ty>;
            type Scalar = $ty;

            #[inline]
            fn dimension() -> usize {
                1
            }

            #[inline]
            fn is_finite(&self) -> bool {
                <$ty>::is_finite(*self)
            }

            #[inline]
            fn is_invertible(&self) -> bool {
                *self != 0.0 && !<$ty>::is_nan(*self)
            }

            #[inline]
            fn total_cmp(&self, other: &Self) -> Ordering {
                <$ty>::total_cmp(self, other)
            }

            fn push_leaves(&self, out: &mut Vec<$ty>) {
                out.push(*self);
            }

            fn from_leaves(leaves: &[$ty]) -> Option<Self> {
                match leaves {
                    [x] => Some(*x),
                    _ => None,
                }
            }
        }
    };
}

impl_number_for_scalar!(f32);
impl_number_for_scalar!(f64);
