//! # hypernum-doubling
//!
//! Doubling constructions over any [`hypernum_core::Number`].
//!
//! A value is a pair `(first, second)` read as `first + second·ε`, where the
//! law decides how the generator ε behaves:
//! - [`Complex`]: ε² = −1 (Cayley–Dickson; quaternions, octonions, ... by nesting)
//! - [`Dual`]: ε² = 0
//! - [`SplitComplex`]: ε² = +1
//! - [`Diagonal`]: no cross terms, components evolve independently
//!
//! Every pair type is itself a `Number`, so towers nest to any depth:
//! `Complex<Complex<f64>>` behaves as the quaternions.

pub mod law;
pub mod pair;
pub mod ops;
mod analytic;

pub use law::{ComplexLaw, DiagonalLaw, DualLaw, Law, LawKind, Sign, SplitComplexLaw};
pub use pair::Doubling;
pub use ops::DoublingOps;

/// `a + b·i` with `i² = −1`.
pub type Complex<T> = Doubling<T, ComplexLaw>;
/// `a + b·ε` with `ε² = 0`.
pub type Dual<T> = Doubling<T, DualLaw>;
/// `a + b·j` with `j² = +1`.
pub type SplitComplex<T> = Doubling<T, SplitComplexLaw>;
/// Direct product `(a, b)` with componentwise arithmetic.
pub type Diagonal<T> = Doubling<T, DiagonalLaw>;

/// Quaternions over `T`.
pub type Quaternion<T> = Complex<Complex<T>>;
/// Octonions over `T`.
pub type Octonion<T> = Complex<Quaternion<T>>;
/// Sedenions over `T`.
pub type Sedenion<T> = Complex<Octonion<T>>;
