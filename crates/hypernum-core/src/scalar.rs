//! Leaf scalar types at the bottom of every tower.
//!
//! Only IEEE floats qualify: the constructions need division, square roots
//! and the transcendental functions on their leaves.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A floating-point leaf (`f32`, `f64`).
pub trait Scalar:
    Copy
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Default
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + 'static
{
    fn zero() -> Self;
    fn one() -> Self;
    fn infinity() -> Self;
    fn nan() -> Self;

    fn abs(self) -> Self;
    fn sqrt(self) -> Self;
    fn exp(self) -> Self;
    fn ln(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn sinh(self) -> Self;
    fn cosh(self) -> Self;
    fn tanh(self) -> Self;
    fn powf(self, n: Self) -> Self;
    fn recip(self) -> Self;
    fn is_nan(self) -> bool;
    fn is_finite(self) -> bool;

    /// IEEE 754 `totalOrder`.
    fn total_cmp(&self, other: &Self) -> Ordering;

    fn from_f64(v: f64) -> Self;
    fn to_f64(self) -> f64;
}

macro_rules! impl_scalar {
    ($ty:ty) => {
        impl Scalar for $ty {
            #[inline]
            fn zero() -> Self {
                0.0
            }
            #[inline]
            fn one() -> Self {
                1.0
            }
            #[inline]
            fn infinity() -> Self {
                <$ty>::INFINITY
            }
            #[inline]
            fn nan() -> Self {
                <$ty>::NAN
            }
            #[inline]
            fn abs(self) -> Self {
                <$ty>::abs(self)
            }
            #[inline]
            fn sqrt(self) -> Self {
                <$ty>::sqrt(self)
            }
            #[inline]
            fn exp(self) -> Self {
                <$ty>::exp(self)
            }
            #[inline]
            fn ln(self) -> Self {
                <$ty>::ln(self)
            }
            #[inline]
            fn sin(self) -> Self {
                <$ty>::sin(self)
            }
            #[inline]
            fn cos(self) -> Self {
                <$ty>::cos(self)
            }
            #[inline]
            fn tan(self) -> Self {
                <$ty>::tan(self)
            }
            #[inline]
            fn asin(self) -> Self {
                <$ty>::asin(self)
            }
            #[inline]
            fn acos(self) -> Self {
                <$ty>::acos(self)
            }
            #[inline]
            fn atan(self) -> Self {
                <$ty>::atan(self)
            }
            #[inline]
            fn sinh(self) -> Self {
                <$ty>::sinh(self)
            }
            #[inline]
            fn cosh(self) -> Self {
                <$ty>::cosh(self)
            }
            #[inline]
            fn tanh(self) -> Self {
                <$ty>::tanh(self)
            }
            #[inline]
            fn powf(self, n: Self) -> Self {
                <$ty>::powf(self, n)
            }
            #[inline]
            fn recip(self) -> Self {
                <$ty>::recip(self)
            }
            #[inline]
            fn is_nan(self) -> bool {
                <$ty>::is_nan(self)
            }
            #[inline]
            fn is_finite(self) -> bool {
                <$ty>::is_finite(self)
            }
            #[inline]
            fn total_cmp(&self, other: &Self) -> Ordering {
                <$ty>::total_cmp(self, other)
            }
            #[inline]
            fn from_f64(v: f64) -> Self {
                v as Self
            }
            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_scalar!(f32);
impl_scalar!(f64);

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(<f64 as Scalar>::zero(), 0.0);
        assert_eq!(<f32 as Scalar>::one(), 1.0);
        assert!(!Scalar::is_finite(<f64 as Scalar>::infinity()));
        assert!(Scalar::is_nan(<f32 as Scalar>::nan()));
    }

    #[test]
    fn test_total_cmp_orders_nan() {
        let nan = <f64 as Scalar>::nan();
        assert_eq!(Scalar::total_cmp(&1.0_f64, &nan), Ordering::Less);
        assert_eq!(Scalar::total_cmp(&-0.0_f64, &0.0), Ordering::Less);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(<f32 as Scalar>::from_f64(0.5), 0.5_f32);
        assert_eq!(Scalar::to_f64(2.0_f32), 2.0_f64);
    }
}
