//! Per-type dispatchers and their registry.
//!
//! Every [`Number`] names exactly one dispatcher type (`Number::Ops`). The
//! registry hands out a single shared instance per closed type: constructed
//! lazily on first use, published once, read-only afterwards.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use crate::error::HyperError;
use crate::number::Number;
use crate::ops::{Binary, Nullary, Primitive, Unary};
use crate::scalar::Scalar;
use crate::Result;

// ============================================================================
// Operations trait
// ============================================================================

/// Interprets operation requests for the numeric type `T`.
///
/// A dispatcher is a total function over the kinds it claims. Anything else
/// must come back as [`HyperError::Unsupported`], never as a default value.
pub trait Operations<T: Number>: Send + Sync + 'static {
    /// Manufacture a canonical constant.
    fn call_nullary(&self, op: Nullary) -> Result<T>;

    fn call_unary(&self, op: Unary, value: &T) -> Result<T>;

    fn call_binary(&self, op: Binary, lhs: &T, rhs: &T) -> Result<T>;

    /// Project a value down to its leaf scalar.
    fn call_primitive(&self, op: Primitive, value: &T) -> Result<T::Scalar> {
        let _ = value;
        Err(HyperError::unsupported::<T>(op))
    }
}

// ============================================================================
// Leaf dispatcher
// ============================================================================

/// Dispatcher for the leaf scalars `f32` and `f64`.
///
/// Supports every kind except [`Nullary::SpecialOne`]: a real leaf has no
/// generator to expose.
pub struct ScalarOps<F> {
    marker: PhantomData<fn() -> F>,
}

impl<F> Default for ScalarOps<F> {
    fn default() -> Self {
        Self { marker: PhantomData }
    }
}

impl<F> Operations<F> for ScalarOps<F>
where
    F: Scalar + Number<Scalar = F>,
{
    fn call_nullary(&self, op: Nullary) -> Result<F> {
        match op {
            Nullary::Zero | Nullary::NonRealUnitsOne => Ok(F::zero()),
            Nullary::RealOne | Nullary::UnitsOne | Nullary::CombinedOne | Nullary::AllOne => {
                Ok(F::one())
            }
            Nullary::SpecialOne => Err(HyperError::unsupported::<F>(op)),
        }
    }

    fn call_unary(&self, op: Unary, value: &F) -> Result<F> {
        let x = *value;
        let two = F::one() + F::one();
        Ok(match op {
            Unary::Negate => -x,
            Unary::Increment => x + F::one(),
            Unary::Decrement => x - F::one(),
            Unary::Inverse => x.recip(),
            Unary::Conjugate => x,
            Unary::Modulus => x.abs(),
            Unary::Double => x * two,
            Unary::Half => x / two,
            Unary::Square => x * x,
            Unary::SquareRoot => x.sqrt(),
            Unary::Exponentiate => x.exp(),
            Unary::Logarithm => x.ln(),
            Unary::Sine => x.sin(),
            Unary::Cosine => x.cos(),
            Unary::Tangent => x.tan(),
            Unary::ArcSine => x.asin(),
            Unary::ArcCosine => x.acos(),
            Unary::ArcTangent => x.atan(),
            Unary::HyperbolicSine => x.sinh(),
            Unary::HyperbolicCosine => x.cosh(),
            Unary::HyperbolicTangent => x.tanh(),
        })
    }

    fn call_binary(&self, op: Binary, lhs: &F, rhs: &F) -> Result<F> {
        let (a, b) = (*lhs, *rhs);
        Ok(match op {
            Binary::Add => a + b,
            Binary::Subtract => a - b,
            Binary::Multiply => a * b,
            Binary::Divide => a / b,
            Binary::Power => a.powf(b),
        })
    }

    fn call_primitive(&self, op: Primitive, value: &F) -> Result<F> {
        Ok(match op {
            Primitive::AbsoluteValue => value.abs(),
            Primitive::RealPart => *value,
        })
    }
}

// ============================================================================
// Registry
// ============================================================================

type Entry = Arc<dyn Any + Send + Sync>;

/// Global registry of dispatchers (one per closed numeric type).
static REGISTRY: OnceLock<RwLock<HashMap<TypeId, Entry>>> = OnceLock::new();

fn registry() -> &'static RwLock<HashMap<TypeId, Entry>> {
    REGISTRY.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Get or create the dispatcher for `T`.
///
/// The dispatcher is constructed at most once per type, even under
/// concurrent first use, and cached for reuse.
///
/// Every lookup takes the read lock, hashes the `TypeId` and clones an
/// `Arc`. The facade pays this per call, leaf additions included. Hot loops
/// can hold the returned dispatcher and call it directly.
pub fn operations<T: Number>() -> Arc<T::Ops> {
    let key = TypeId::of::<T>();
    if let Some(entry) = registry().read().get(&key) {
        return downcast::<T>(Arc::clone(entry));
    }

    let mut map = registry().write();
    let entry = map.entry(key).or_insert_with(|| {
        tracing::debug!(number = type_name::<T>(), "publishing dispatcher");
        Arc::new(T::Ops::default()) as Entry
    });
    downcast::<T>(Arc::clone(entry))
}

/// Number of dispatchers published so far.
pub fn registered() -> usize {
    registry().read().len()
}

fn downcast<T: Number>(entry: Entry) -> Arc<T::Ops> {
    match entry.downcast::<T::Ops>() {
        Ok(ops) => ops,
        Err(_) => unreachable!(
            "registry entry for {} holds a foreign dispatcher",
            type_name::<T>()
        ),
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_same_instance() {
        let a = operations::<f64>();
        let b = operations::<f64>();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(registered() >= 1);
    }

    #[test]
    fn test_distinct_types_distinct_entries() {
        let _ = operations::<f32>();
        let _ = operations::<f64>();
        assert!(registered() >= 2);
    }

    #[test]
    fn test_leaf_constants() {
        let ops = ScalarOps::<f64>::default();
        assert_eq!(ops.call_nullary(Nullary::Zero).unwrap(), 0.0);
        assert_eq!(ops.call_nullary(Nullary::RealOne).unwrap(), 1.0);
        assert_eq!(ops.call_nullary(Nullary::UnitsOne).unwrap(), 1.0);
        assert_eq!(ops.call_nullary(Nullary::NonRealUnitsOne).unwrap(), 0.0);
        assert_eq!(ops.call_nullary(Nullary::CombinedOne).unwrap(), 1.0);
        assert_eq!(ops.call_nullary(Nullary::AllOne).unwrap(), 1.0);
    }

    #[test]
    fn test_leaf_has_no_special_one() {
        let ops = ScalarOps::<f64>::default();
        let err = ops.call_nullary(Nullary::SpecialOne).unwrap_err();
        assert_eq!(err, HyperError::unsupported::<f64>(Nullary::SpecialOne));
    }

    #[test]
    fn test_leaf_unary() {
        let ops = ScalarOps::<f64>::default();
        assert_eq!(ops.call_unary(Unary::Negate, &2.0).unwrap(), -2.0);
        assert_eq!(ops.call_unary(Unary::Inverse, &4.0).unwrap(), 0.25);
        assert_eq!(ops.call_unary(Unary::Conjugate, &-3.0).unwrap(), -3.0);
        assert_eq!(ops.call_unary(Unary::Modulus, &-3.0).unwrap(), 3.0);
        assert_eq!(ops.call_unary(Unary::Half, &3.0).unwrap(), 1.5);
        assert_eq!(ops.call_unary(Unary::Square, &3.0).unwrap(), 9.0);
        assert!((ops.call_unary(Unary::ArcCosine, &-1.0).unwrap() - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_leaf_binary() {
        let ops = ScalarOps::<f32>::default();
        assert_eq!(ops.call_binary(Binary::Subtract, &5.0, &2.0).unwrap(), 3.0);
        assert_eq!(ops.call_binary(Binary::Divide, &5.0, &2.0).unwrap(), 2.5);
        assert_eq!(ops.call_binary(Binary::Power, &2.0, &10.0).unwrap(), 1024.0);
    }

    #[test]
    fn test_leaf_primitive() {
        let ops = ScalarOps::<f64>::default();
        assert_eq!(ops.call_primitive(Primitive::AbsoluteValue, &-7.0).unwrap(), 7.0);
        assert_eq!(ops.call_primitive(Primitive::RealPart, &-7.0).unwrap(), -7.0);
    }
}
