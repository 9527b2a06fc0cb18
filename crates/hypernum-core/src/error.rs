use crate::ops::OpKind;

/// Errors raised by the dispatch protocol.
///
/// Both kinds are contract violations: retrying reproduces them exactly,
/// so the operator surface turns them into panics (see [`crate::facade::fatal`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HyperError {
    #[error("operation '{op}' is not supported by {type_name}")]
    Unsupported { op: OpKind, type_name: &'static str },

    #[error("component index {index} out of range for a doubling pair (valid: 0, 1)")]
    IndexOutOfRange { index: usize },
}

impl HyperError {
    /// Unsupported-operation error naming the type `T`.
    pub fn unsupported<T: ?Sized>(op: impl Into<OpKind>) -> Self {
        HyperError::Unsupported {
            op: op.into(),
            type_name: std::any::type_name::<T>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{Nullary, Unary};

    #[test]
    fn test_unsupported_message() {
        let err = HyperError::unsupported::<f64>(Nullary::SpecialOne);
        assert_eq!(
            err.to_string(),
            "operation 'special_one/0' is not supported by f64"
        );
    }

    #[test]
    fn test_index_message() {
        let err = HyperError::IndexOutOfRange { index: 2 };
        assert!(err.to_string().contains("index 2"));
    }

    #[test]
    fn test_unsupported_carries_kind() {
        match HyperError::unsupported::<f32>(Unary::Logarithm) {
            HyperError::Unsupported { op, type_name } => {
                assert_eq!(op, OpKind::Unary(Unary::Logarithm));
                assert_eq!(type_name, "f32");
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
