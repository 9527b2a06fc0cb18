//! Convenience re-exports for common hypernum-core items.
//!
//! ```rust
//! use hypernum_core::prelude::*;
//! ```

pub use crate::{Binary, Nullary, OpKind, Primitive, Unary};
pub use crate::HyperError;
pub use crate::Number;
pub use crate::Operations;
pub use crate::Scalar;
pub use crate::Result;
pub use crate::facade;
