//! # hypernum-core
//!
//! Foundation crate for the hypernum algebra workspace.
//!
//! Provides the pieces every numeric type in a tower shares:
//! - The closed operation vocabulary (nullary, unary, binary, primitive)
//! - The [`Number`] capability contract and the leaf scalars `f32` / `f64`
//! - The [`Operations`] dispatcher trait and its type-indexed registry
//! - A dispatch facade so generic code is written once for any tower depth

pub mod ops;
pub mod error;
pub mod scalar;
pub mod number;
pub mod dispatch;
pub mod facade;
pub mod prelude;

pub use ops::{Binary, Nullary, OpKind, Primitive, Unary};
pub use error::HyperError;
pub use scalar::Scalar;
pub use number::Number;
pub use dispatch::{operations, Operations, ScalarOps};

pub type Result<T> = std::result::Result<T, HyperError>;
