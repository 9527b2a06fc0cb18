//! Dispatcher for projective values.
//!
//! An infinity `∞(v)` is read as `1/v`. Every rule below follows from that
//! reading, with the residue kept in the inner type.

use std::any::type_name;
use std::marker::PhantomData;

use hypernum_core::facade::{self, checked};
use hypernum_core::{Binary, Nullary, Number, Operations, Primitive, Result, Scalar, Unary};

use crate::projective::Projective;

/// Interprets every operation kind for `Projective<T>`.
pub struct ProjectiveOps<T> {
    marker: PhantomData<fn() -> T>,
}

impl<T> Default for ProjectiveOps<T> {
    fn default() -> Self {
        Self { marker: PhantomData }
    }
}

fn finite<T>(value: T) -> Result<Projective<T>> {
    Ok(Projective::finite(value))
}

fn infinite<T>(value: T) -> Result<Projective<T>> {
    Ok(Projective::infinity(value))
}

/// `(va·vb) / (vb ± va)`, i.e. `1/va ± 1/vb` read back as a residue.
fn reciprocal_sum<T: Number>(op: Binary, va: &T, vb: &T) -> Result<T> {
    let denominator = facade::try_binary(op, vb, va)?;
    checked::div(&checked::mul(va, vb)?, &denominator)
}

fn divide<T: Number>(a: &T, b: &T) -> Result<Projective<T>> {
    if b.is_invertible() {
        return finite(checked::div(a, b)?);
    }
    tracing::trace!(
        number = type_name::<T>(),
        divisor = %b,
        "division by non-invertible value promoted to infinity"
    );
    if a.is_invertible() {
        infinite(checked::div(b, a)?)
    } else {
        infinite(b.clone())
    }
}

impl<T: Number> ProjectiveOps<T> {
    fn unary_at_infinity(&self, op: Unary, v: &T) -> Result<Projective<T>> {
        match op {
            Unary::Inverse => finite(v.clone()),
            Unary::Increment | Unary::Decrement => infinite(v.clone()),
            Unary::Negate
            | Unary::Conjugate
            | Unary::Modulus
            | Unary::Square
            | Unary::SquareRoot => infinite(facade::try_unary(op, v)?),
            // 2·(1/v) = 1/(v/2)
            Unary::Double => infinite(checked::half(v)?),
            Unary::Half => infinite(checked::double(v)?),
            Unary::Exponentiate
            | Unary::Logarithm
            | Unary::Sine
            | Unary::Cosine
            | Unary::Tangent
            | Unary::ArcSine
            | Unary::ArcCosine
            | Unary::ArcTangent
            | Unary::HyperbolicSine
            | Unary::HyperbolicCosine
            | Unary::HyperbolicTangent => infinite(v.clone()),
        }
    }

    fn power(&self, base: &Projective<T>, exponent: &Projective<T>) -> Result<Projective<T>> {
        match (base.is_infinity(), exponent.is_infinity()) {
            (false, false) => finite(checked::pow(base.value(), exponent.value())?),
            // (1/v)^y = 1/(v^y)
            (true, false) => infinite(checked::pow(base.value(), exponent.value())?),
            (_, true) => {
                let log = facade::try_unary(Unary::Logarithm, base)?;
                let scaled = facade::try_binary(Binary::Multiply, &log, exponent)?;
                facade::try_unary(Unary::Exponentiate, &scaled)
            }
        }
    }
}

impl<T: Number> Operations<Projective<T>> for ProjectiveOps<T> {
    fn call_nullary(&self, op: Nullary) -> Result<Projective<T>> {
        finite(facade::try_nullary(op)?)
    }

    fn call_unary(&self, op: Unary, value: &Projective<T>) -> Result<Projective<T>> {
        let v = value.value();
        if value.is_infinity() {
            return self.unary_at_infinity(op, v);
        }
        match op {
            Unary::Inverse => infinite(v.clone()),
            _ => finite(facade::try_unary(op, v)?),
        }
    }

    fn call_binary(
        &self,
        op: Binary,
        lhs: &Projective<T>,
        rhs: &Projective<T>,
    ) -> Result<Projective<T>> {
        let (a, b) = (lhs.value(), rhs.value());
        match (op, lhs.is_infinity(), rhs.is_infinity()) {
            (Binary::Add | Binary::Subtract, false, false) => finite(facade::try_binary(op, a, b)?),
            (Binary::Add | Binary::Subtract, true, false) => infinite(a.clone()),
            (Binary::Add, false, true) => infinite(b.clone()),
            (Binary::Subtract, false, true) => infinite(checked::neg(b)?),
            (Binary::Add | Binary::Subtract, true, true) => infinite(reciprocal_sum(op, a, b)?),

            (Binary::Multiply, false, false) => finite(checked::mul(a, b)?),
            // (1/va)·b = 1/(va/b)
            (Binary::Multiply, true, false) => infinite(checked::div(a, b)?),
            (Binary::Multiply, false, true) => infinite(checked::div(b, a)?),
            (Binary::Multiply, true, true) => infinite(checked::mul(a, b)?),

            (Binary::Divide, false, false) => divide(a, b),
            (Binary::Divide, true, false) => infinite(checked::mul(a, b)?),
            (Binary::Divide, false, true) => finite(checked::mul(a, b)?),
            (Binary::Divide, true, true) => infinite(checked::div(a, b)?),

            (Binary::Power, _, _) => self.power(lhs, rhs),
        }
    }

    fn call_primitive(&self, op: Primitive, value: &Projective<T>) -> Result<T::Scalar> {
        if value.is_infinity() {
            return Ok(<T::Scalar as Scalar>::infinity());
        }
        facade::try_primitive(op, value.value())
    }
}
