//! Dispatcher for doubling pairs.
//!
//! Every law is written once against the inner type's dispatcher, so the
//! same code serves `Complex<f64>`, the quaternions, and any deeper tower.

use std::marker::PhantomData;

use hypernum_core::facade::{self, checked};
use hypernum_core::{Binary, HyperError, Nullary, Number, Operations, Primitive, Result, Scalar, Unary};

use crate::analytic;
use crate::law::{Law, LawKind, Sign};
use crate::pair::Doubling;

/// Interprets every operation kind for `Doubling<T, L>`.
pub struct DoublingOps<T, L> {
    marker: PhantomData<fn() -> (T, L)>,
}

impl<T, L> Default for DoublingOps<T, L> {
    fn default() -> Self {
        Self { marker: PhantomData }
    }
}

// ============================================================================
// Law kernels
// ============================================================================

/// `acc ± term` depending on `sign`; a zero sign drops the term unevaluated.
fn fold_signed<T: Number>(acc: T, sign: Sign, term: impl FnOnce() -> Result<T>) -> Result<T> {
    match sign {
        Sign::Pos => checked::add(&acc, &term()?),
        Sign::Neg => checked::sub(&acc, &term()?),
        Sign::Zero => Ok(acc),
    }
}

fn is_diagonal<L: Law>() -> bool {
    L::KIND == LawKind::Diagonal
}

/// `ε²` of a Cayley–Dickson law. Only called off the diagonal path.
fn gamma<L: Law>() -> Sign {
    L::KIND.unit_square().unwrap_or(Sign::Zero)
}

pub(crate) fn multiply<T: Number, L: Law>(
    x: &Doubling<T, L>,
    y: &Doubling<T, L>,
) -> Result<Doubling<T, L>> {
    let (a, b) = (x.first(), x.second());
    let (c, d) = (y.first(), y.second());

    if is_diagonal::<L>() {
        return Ok(Doubling::new(checked::mul(a, c)?, checked::mul(b, d)?));
    }

    let first = fold_signed(checked::mul(a, c)?, gamma::<L>(), || {
        checked::mul(&checked::conj(d)?, b)
    })?;
    let second = checked::add(&checked::mul(d, a)?, &checked::mul(b, &checked::conj(c)?)?)?;
    Ok(Doubling::new(first, second))
}

/// `N = aā − γ·b̄b`; `a·b` for the diagonal law.
pub(crate) fn norm<T: Number, L: Law>(x: &Doubling<T, L>) -> Result<T> {
    let (a, b) = (x.first(), x.second());
    if is_diagonal::<L>() {
        return checked::mul(a, b);
    }
    fold_signed(checked::mul(a, &checked::conj(a)?)?, gamma::<L>().flip(), || {
        checked::mul(&checked::conj(b)?, b)
    })
}

pub(crate) fn inverse<T: Number, L: Law>(x: &Doubling<T, L>) -> Result<Doubling<T, L>> {
    if is_diagonal::<L>() {
        return x.both_call(Unary::Inverse);
    }
    let inv_norm = checked::inv(&x.norm()?)?;
    let first = checked::mul(&checked::conj(x.first())?, &inv_norm)?;
    let second = checked::neg(&checked::mul(x.second(), &inv_norm)?)?;
    Ok(Doubling::new(first, second))
}

fn conjugate<T: Number, L: Law>(x: &Doubling<T, L>) -> Result<Doubling<T, L>> {
    if is_diagonal::<L>() {
        return x.both_call(Unary::Conjugate);
    }
    Ok(Doubling::new(checked::conj(x.first())?, checked::neg(x.second())?))
}

fn modulus<T: Number, L: Law>(x: &Doubling<T, L>) -> Result<Doubling<T, L>> {
    if is_diagonal::<L>() {
        return x.both_call(Unary::Modulus);
    }
    let magnitude = checked::sqrt(&checked::modulus(&x.norm()?)?)?;
    Ok(Doubling::new(magnitude, checked::zero()?))
}

fn divide<T: Number, L: Law>(x: &Doubling<T, L>, y: &Doubling<T, L>) -> Result<Doubling<T, L>> {
    if is_diagonal::<L>() {
        return x
            .first_call_with(Binary::Divide, y.first())?
            .second_call_with(Binary::Divide, y.second());
    }
    multiply(x, &inverse(y)?)
}

// ============================================================================
// Operations impl
// ============================================================================

impl<T: Number, L: Law> Operations<Doubling<T, L>> for DoublingOps<T, L> {
    fn call_nullary(&self, op: Nullary) -> Result<Doubling<T, L>> {
        let zero = || facade::try_nullary::<T>(Nullary::Zero);
        let one = || facade::try_nullary::<T>(Nullary::RealOne);
        let inner = |kind| facade::try_nullary::<T>(kind);

        let (first, second) = match (op, is_diagonal::<L>()) {
            (Nullary::Zero, _) => (zero()?, zero()?),
            (Nullary::RealOne, false) => (one()?, zero()?),
            (Nullary::RealOne, true) => (one()?, one()?),
            (Nullary::SpecialOne, false) => (zero()?, one()?),
            (Nullary::SpecialOne, true) => (one()?, checked::neg(&one()?)?),
            (Nullary::UnitsOne, false) => (inner(Nullary::UnitsOne)?, one()?),
            (Nullary::NonRealUnitsOne, false) => (inner(Nullary::NonRealUnitsOne)?, one()?),
            (Nullary::CombinedOne, false) => (zero()?, inner(Nullary::CombinedOne)?),
            // Inner units sit on the diagonal `(t, t)`; the generator is `(1, −1)`.
            (Nullary::UnitsOne | Nullary::NonRealUnitsOne, true) => {
                let units = inner(op)?;
                (checked::add(&units, &one()?)?, checked::sub(&units, &one()?)?)
            }
            (Nullary::CombinedOne, true) => {
                let combined = inner(Nullary::CombinedOne)?;
                (combined.clone(), checked::neg(&combined)?)
            }
            (Nullary::AllOne, _) => (inner(Nullary::AllOne)?, inner(Nullary::AllOne)?),
        };
        Ok(Doubling::new(first, second))
    }

    fn call_unary(&self, op: Unary, value: &Doubling<T, L>) -> Result<Doubling<T, L>> {
        match op {
            Unary::Negate | Unary::Double | Unary::Half => value.both_call(op),
            Unary::Increment | Unary::Decrement => {
                if is_diagonal::<L>() {
                    value.both_call(op)
                } else {
                    value.first_call(op)
                }
            }
            Unary::Inverse => inverse(value),
            Unary::Conjugate => conjugate(value),
            Unary::Modulus => modulus(value),
            Unary::Square => multiply(value, value),
            Unary::SquareRoot
            | Unary::Exponentiate
            | Unary::Logarithm
            | Unary::Sine
            | Unary::Cosine
            | Unary::Tangent
            | Unary::ArcSine
            | Unary::ArcCosine
            | Unary::ArcTangent
            | Unary::HyperbolicSine
            | Unary::HyperbolicCosine
            | Unary::HyperbolicTangent => analytic::apply(op, value),
        }
    }

    fn call_binary(
        &self,
        op: Binary,
        lhs: &Doubling<T, L>,
        rhs: &Doubling<T, L>,
    ) -> Result<Doubling<T, L>> {
        match op {
            Binary::Add | Binary::Subtract => lhs
                .first_call_with(op, rhs.first())?
                .second_call_with(op, rhs.second()),
            Binary::Multiply => multiply(lhs, rhs),
            Binary::Divide => divide(lhs, rhs),
            Binary::Power => analytic::power(lhs, rhs),
        }
    }

    fn call_primitive(&self, op: Primitive, value: &Doubling<T, L>) -> Result<T::Scalar> {
        if is_diagonal::<L>() {
            return Err(HyperError::unsupported::<Doubling<T, L>>(op));
        }
        match op {
            Primitive::AbsoluteValue => {
                let n = facade::try_primitive(Primitive::AbsoluteValue, &value.norm()?)?;
                Ok(n.sqrt())
            }
            Primitive::RealPart => facade::try_primitive(Primitive::RealPart, value.first()),
        }
    }
}
