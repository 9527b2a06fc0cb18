//! # hypernum-projective
//!
//! Projective extension of any [`hypernum_core::Number`].
//!
//! `Projective<T>` adjoins points at infinity so that inversion, and with
//! it division, is total. An infinite value `Infinity(v)` stands for the
//! reciprocal `1/v`: [`Unary::Inverse`](hypernum_core::Unary::Inverse) just
//! toggles the flag, and dividing by a non-invertible value promotes the
//! result to infinity instead of failing.
//!
//! Projective values are `Number`s themselves, so they nest with the
//! doubling constructions in either direction.

pub mod projective;
pub mod ops;

pub use projective::Projective;
pub use ops::ProjectiveOps;
