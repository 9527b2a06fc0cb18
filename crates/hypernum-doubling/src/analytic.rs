//! Square roots, transcendental functions and powers of doubling pairs.
//!
//! - Diagonal: componentwise.
//! - SplitComplex: through the idempotent basis, `(a + b, a − b)`.
//! - Dual: first-order rule `f(a + bε) = f(a) + f'(a)·b ε`.
//! - Complex: every element lies in the plane spanned by 1 and its unit
//!   vector `u` (with `u² = −1`), so ordinary complex formulas apply.

use hypernum_core::facade::{self, checked};
use hypernum_core::{Binary, HyperError, Nullary, Number, Result, Unary};

use crate::law::{Law, LawKind};
use crate::pair::Doubling;

fn call<T: Number>(op: Unary, value: &T) -> Result<T> {
    facade::try_unary(op, value)
}

/// `√|N|` as an inner value.
fn magnitude<T: Number, L: Law>(x: &Doubling<T, L>) -> Result<T> {
    checked::sqrt(&checked::modulus(&x.norm()?)?)
}

pub(crate) fn apply<T: Number, L: Law>(op: Unary, x: &Doubling<T, L>) -> Result<Doubling<T, L>> {
    match L::KIND {
        LawKind::Diagonal => x.both_call(op),
        LawKind::SplitComplex => split_complex(op, x),
        LawKind::Dual => dual(op, x),
        LawKind::Complex => complex(op, x),
    }
}

pub(crate) fn power<T: Number, L: Law>(
    base: &Doubling<T, L>,
    exponent: &Doubling<T, L>,
) -> Result<Doubling<T, L>> {
    match L::KIND {
        LawKind::Diagonal => base
            .first_call_with(Binary::Power, exponent.first())?
            .second_call_with(Binary::Power, exponent.second()),
        LawKind::SplitComplex => {
            let (bp, bq) = to_idempotent(base)?;
            let (ep, eq) = to_idempotent(exponent)?;
            from_idempotent(checked::pow(&bp, &ep)?, checked::pow(&bq, &eq)?)
        }
        LawKind::Dual | LawKind::Complex => {
            if base.norm()?.is_invertible() {
                let log = call(Unary::Logarithm, base)?;
                return call(Unary::Exponentiate, &checked::mul(&log, exponent)?);
            }
            singular_power(base, exponent)
        }
    }
}

/// Powers of a base with no logarithm.
///
/// `x^0 = 1`. A dual base `a + bε` follows the first-order rule
/// `a^c + c·a^(c−1)·b ε`, so `ε^1 = ε` and `ε^2 = 0`. A complex zero raises
/// its first component with the inner power, matching the leaf convention.
fn singular_power<T: Number, L: Law>(
    base: &Doubling<T, L>,
    exponent: &Doubling<T, L>,
) -> Result<Doubling<T, L>> {
    let zero = checked::zero::<Doubling<T, L>>()?;
    if *exponent == zero {
        return checked::one();
    }
    let c = exponent.first();
    match L::KIND {
        LawKind::Dual => {
            let value = checked::pow(base.first(), c)?;
            let lowered = checked::pow(base.first(), &call(Unary::Decrement, c)?)?;
            let slope = checked::mul(c, &lowered)?;
            Ok(Doubling::new(value, checked::mul(&slope, base.second())?))
        }
        _ if *base == zero => Ok(Doubling::new(checked::pow(base.first(), c)?, checked::zero()?)),
        _ => {
            tracing::trace!(law = L::NAME, base = %base, "power of a zero divisor collapsed to zero");
            Ok(zero)
        }
    }
}

// ============================================================================
// SplitComplex
// ============================================================================

fn to_idempotent<T: Number, L: Law>(x: &Doubling<T, L>) -> Result<(T, T)> {
    let (a, b) = (x.first(), x.second());
    Ok((checked::add(a, b)?, checked::sub(a, b)?))
}

fn from_idempotent<T: Number, L: Law>(p: T, q: T) -> Result<Doubling<T, L>> {
    let first = checked::half(&checked::add(&p, &q)?)?;
    let second = checked::half(&checked::sub(&p, &q)?)?;
    Ok(Doubling::new(first, second))
}

fn split_complex<T: Number, L: Law>(op: Unary, x: &Doubling<T, L>) -> Result<Doubling<T, L>> {
    let (p, q) = to_idempotent(x)?;
    from_idempotent(call(op, &p)?, call(op, &q)?)
}

// ============================================================================
// Dual
// ============================================================================

/// `1 − a²`.
fn one_minus_square<T: Number>(a: &T) -> Result<T> {
    checked::neg(&call(Unary::Decrement, &checked::square(a)?)?)
}

fn dual<T: Number, L: Law>(op: Unary, x: &Doubling<T, L>) -> Result<Doubling<T, L>> {
    let a = x.first();
    let value = call(op, a)?;
    let slope = match op {
        Unary::SquareRoot => checked::inv(&checked::double(&value)?)?,
        Unary::Exponentiate => value.clone(),
        Unary::Logarithm => checked::inv(a)?,
        Unary::Sine => call(Unary::Cosine, a)?,
        Unary::Cosine => checked::neg(&call(Unary::Sine, a)?)?,
        Unary::Tangent => call(Unary::Increment, &checked::square(&value)?)?,
        Unary::ArcSine => checked::inv(&checked::sqrt(&one_minus_square(a)?)?)?,
        Unary::ArcCosine => checked::neg(&checked::inv(&checked::sqrt(&one_minus_square(a)?)?)?)?,
        Unary::ArcTangent => checked::inv(&call(Unary::Increment, &checked::square(a)?)?)?,
        Unary::HyperbolicSine => call(Unary::HyperbolicCosine, a)?,
        Unary::HyperbolicCosine => call(Unary::HyperbolicSine, a)?,
        Unary::HyperbolicTangent => one_minus_square(&value)?,
        _ => return Err(HyperError::unsupported::<Doubling<T, L>>(op)),
    };
    Ok(Doubling::new(value, checked::mul(&slope, x.second())?))
}

// ============================================================================
// Complex
// ============================================================================

/// `x = real + imag·unit` with `real`, `imag` real inner values and
/// `unit² = −1`. A real `x` borrows the generator as its unit.
struct Plane<T, L> {
    real: T,
    imag: T,
    unit: Doubling<T, L>,
}

impl<T: Number, L: Law> Plane<T, L> {
    fn of(x: &Doubling<T, L>) -> Result<Self> {
        let a = x.first();
        let real = checked::half(&checked::add(a, &checked::conj(a)?)?)?;
        let vector = Doubling::<T, L>::new(checked::sub(a, &real)?, x.second().clone());
        let imag = magnitude(&vector)?;
        let unit = if imag.is_invertible() {
            vector.scale(&checked::inv(&imag)?)?
        } else {
            facade::try_nullary(Nullary::SpecialOne)?
        };
        Ok(Self { real, imag, unit })
    }

    /// `p + q·unit`.
    fn combine(&self, p: T, q: T) -> Result<Doubling<T, L>> {
        self.unit.scale(&q)?.first_call_with(Binary::Add, &p)
    }
}

/// Clamp into `[−1, 1]` so rounding cannot push an arc cosine out of domain.
fn clamp_unit<T: Number>(value: T) -> Result<T> {
    let one = checked::one::<T>()?;
    let minus_one = checked::neg(&one)?;
    Ok(if value > one {
        one
    } else if value < minus_one {
        minus_one
    } else {
        value
    })
}

fn complex<T: Number, L: Law>(op: Unary, x: &Doubling<T, L>) -> Result<Doubling<T, L>> {
    let plane = Plane::of(x)?;
    let (r, t) = (&plane.real, &plane.imag);

    match op {
        Unary::SquareRoot => {
            let m = magnitude(x)?;
            let p = checked::sqrt(&checked::modulus(&checked::half(&checked::add(&m, r)?)?)?)?;
            let q = checked::sqrt(&checked::modulus(&checked::half(&checked::sub(&m, r)?)?)?)?;
            plane.combine(p, q)
        }
        Unary::Exponentiate => {
            let scale = call(Unary::Exponentiate, r)?;
            plane.combine(
                checked::mul(&scale, &call(Unary::Cosine, t)?)?,
                checked::mul(&scale, &call(Unary::Sine, t)?)?,
            )
        }
        Unary::Logarithm => {
            let m = magnitude(x)?;
            let angle = if m.is_invertible() {
                let ratio = clamp_unit(checked::mul(r, &checked::inv(&m)?)?)?;
                call(Unary::ArcCosine, &ratio)?
            } else {
                checked::zero()?
            };
            plane.combine(call(Unary::Logarithm, &m)?, angle)
        }
        Unary::Sine => plane.combine(
            checked::mul(&call(Unary::Sine, r)?, &call(Unary::HyperbolicCosine, t)?)?,
            checked::mul(&call(Unary::Cosine, r)?, &call(Unary::HyperbolicSine, t)?)?,
        ),
        Unary::Cosine => plane.combine(
            checked::mul(&call(Unary::Cosine, r)?, &call(Unary::HyperbolicCosine, t)?)?,
            checked::neg(&checked::mul(&call(Unary::Sine, r)?, &call(Unary::HyperbolicSine, t)?)?)?,
        ),
        Unary::HyperbolicSine => plane.combine(
            checked::mul(&call(Unary::HyperbolicSine, r)?, &call(Unary::Cosine, t)?)?,
            checked::mul(&call(Unary::HyperbolicCosine, r)?, &call(Unary::Sine, t)?)?,
        ),
        Unary::HyperbolicCosine => plane.combine(
            checked::mul(&call(Unary::HyperbolicCosine, r)?, &call(Unary::Cosine, t)?)?,
            checked::mul(&call(Unary::HyperbolicSine, r)?, &call(Unary::Sine, t)?)?,
        ),
        Unary::Tangent => checked::div(&call(Unary::Sine, x)?, &call(Unary::Cosine, x)?),
        Unary::HyperbolicTangent => checked::div(
            &call(Unary::HyperbolicSine, x)?,
            &call(Unary::HyperbolicCosine, x)?,
        ),
        Unary::ArcSine => {
            // −u·log(u·z + √(1 − z²))
            let root = checked::sqrt(&one_minus_square(x)?)?;
            let inner = checked::add(&checked::mul(&plane.unit, x)?, &root)?;
            checked::neg(&checked::mul(&plane.unit, &call(Unary::Logarithm, &inner)?)?)
        }
        Unary::ArcCosine => {
            // −u·log(z + u·√(1 − z²))
            let root = checked::sqrt(&one_minus_square(x)?)?;
            let inner = checked::add(x, &checked::mul(&plane.unit, &root)?)?;
            checked::neg(&checked::mul(&plane.unit, &call(Unary::Logarithm, &inner)?)?)
        }
        Unary::ArcTangent => {
            // (u/2)·(log(1 − u·z) − log(1 + u·z))
            let uz = checked::mul(&plane.unit, x)?;
            let one = checked::one::<Doubling<T, L>>()?;
            let lower = call(Unary::Logarithm, &checked::sub(&one, &uz)?)?;
            let upper = call(Unary::Logarithm, &checked::add(&one, &uz)?)?;
            checked::mul(&checked::half(&plane.unit)?, &checked::sub(&lower, &upper)?)
        }
        _ => Err(HyperError::unsupported::<Doubling<T, L>>(op)),
    }
}
