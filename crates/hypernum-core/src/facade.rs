//! Dispatch facade: enum-tagged calls routed to the right dispatcher.
//!
//! Generic algorithms are written once against `T: Number` and call into
//! this module; the registry resolves the concrete dispatcher. The `try_*`
//! functions return the protocol's `Result`, the plain ones treat an error
//! as a fatal contract violation and panic.

use crate::dispatch::{operations, Operations};
use crate::number::Number;
use crate::ops::{Binary, Nullary, Primitive, Unary};
use crate::Result;

pub fn try_nullary<T: Number>(op: Nullary) -> Result<T> {
    operations::<T>().call_nullary(op)
}

pub fn try_unary<T: Number>(op: Unary, value: &T) -> Result<T> {
    operations::<T>().call_unary(op, value)
}

pub fn try_binary<T: Number>(op: Binary, lhs: &T, rhs: &T) -> Result<T> {
    operations::<T>().call_binary(op, lhs, rhs)
}

pub fn try_primitive<T: Number>(op: Primitive, value: &T) -> Result<T::Scalar> {
    operations::<T>().call_primitive(op, value)
}

#[track_caller]
pub fn nullary<T: Number>(op: Nullary) -> T {
    fatal(try_nullary(op))
}

#[track_caller]
pub fn unary<T: Number>(op: Unary, value: &T) -> T {
    fatal(try_unary(op, value))
}

#[track_caller]
pub fn binary<T: Number>(op: Binary, lhs: &T, rhs: &T) -> T {
    fatal(try_binary(op, lhs, rhs))
}

#[track_caller]
pub fn primitive<T: Number>(op: Primitive, value: &T) -> T::Scalar {
    fatal(try_primitive(op, value))
}

#[track_caller]
pub fn zero<T: Number>() -> T {
    nullary(Nullary::Zero)
}

#[track_caller]
pub fn real_one<T: Number>() -> T {
    nullary(Nullary::RealOne)
}

pub fn dimension<T: Number>() -> usize {
    T::dimension()
}

/// Unwrap a protocol result, panicking on a contract violation.
///
/// Unsupported kinds and bad component indices are static misuse: they are
/// logged and escalated, never absorbed.
#[track_caller]
pub fn fatal<V>(result: Result<V>) -> V {
    match result {
        Ok(value) => value,
        Err(err) => {
            tracing::error!(error = %err, "fatal contract violation");
            panic!("{err}");
        }
    }
}

/// `Result`-returning shorthands used when composing laws from inner calls.
pub mod checked {
    use super::*;

    pub fn zero<T: Number>() -> Result<T> {
        try_nullary(Nullary::Zero)
    }

    pub fn one<T: Number>() -> Result<T> {
        try_nullary(Nullary::RealOne)
    }

    pub fn add<T: Number>(lhs: &T, rhs: &T) -> Result<T> {
        try_binary(Binary::Add, lhs, rhs)
    }

    pub fn sub<T: Number>(lhs: &T, rhs: &T) -> Result<T> {
        try_binary(Binary::Subtract, lhs, rhs)
    }

    pub fn mul<T: Number>(lhs: &T, rhs: &T) -> Result<T> {
        try_binary(Binary::Multiply, lhs, rhs)
    }

    pub fn div<T: Number>(lhs: &T, rhs: &T) -> Result<T> {
        try_binary(Binary::Divide, lhs, rhs)
    }

    pub fn pow<T: Number>(base: &T, exponent: &T) -> Result<T> {
        try_binary(Binary::Power, base, exponent)
    }

    pub fn neg<T: Number>(value: &T) -> Result<T> {
        try_unary(Unary::Negate, value)
    }

    pub fn inv<T: Number>(value: &T) -> Result<T> {
        try_unary(Unary::Inverse, value)
    }

    pub fn conj<T: Number>(value: &T) -> Result<T> {
        try_unary(Unary::Conjugate, value)
    }

    pub fn modulus<T: Number>(value: &T) -> Result<T> {
        try_unary(Unary::Modulus, value)
    }

    pub fn double<T: Number>(value: &T) -> Result<T> {
        try_unary(Unary::Double, value)
    }

    pub fn half<T: Number>(value: &T) -> Result<T> {
        try_unary(Unary::Half, value)
    }

    pub fn square<T: Number>(value: &T) -> Result<T> {
        try_unary(Unary::Square, value)
    }

    pub fn sqrt<T: Number>(value: &T) -> Result<T> {
        try_unary(Unary::SquareRoot, value)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::HyperError;

    #[test]
    fn test_leaf_through_facade() {
        assert_eq!(zero::<f64>(), 0.0);
        assert_eq!(real_one::<f32>(), 1.0);
        assert_eq!(binary(Binary::Multiply, &3.0_f64, &4.0), 12.0);
        assert_eq!(unary(Unary::Increment, &3.0_f64), 4.0);
        assert_eq!(primitive(Primitive::AbsoluteValue, &-2.5_f64), 2.5);
        assert_eq!(dimension::<f64>(), 1);
    }

    #[test]
    fn test_checked_propagates() {
        let err = try_nullary::<f64>(Nullary::SpecialOne).unwrap_err();
        assert!(matches!(err, HyperError::Unsupported { .. }));
        assert_eq!(checked::sub(&1.0_f64, &3.0).unwrap(), -2.0);
        assert_eq!(checked::half(&1.0_f64).unwrap(), 0.5);
    }

    #[test]
    #[should_panic(expected = "not supported")]
    fn test_unsupported_is_fatal() {
        let _ = nullary::<f64>(Nullary::SpecialOne);
    }

    #[test]
    fn test_fatal_passes_values() {
        assert_eq!(fatal(Ok::<_, HyperError>(5)), 5);
    }
}
