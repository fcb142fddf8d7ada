use thiserror::Error;

/// Failures raised by algebraic operations.
///
/// All of these are detected eagerly at the offending operation; no partial
/// result is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgebraError {
    /// Matrix operands with incompatible shapes, given as `(rows, cols)`.
    #[error("dimension mismatch: {}x{} and {}x{}", left.0, left.1, right.0, right.1)]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// The element has no multiplicative inverse in its structure.
    #[error("element {element} is not invertible")]
    NotInvertible { element: String },

    /// A rational number with a zero denominator was requested.
    #[error("division by zero")]
    DivisionByZero,
}

impl AlgebraError {
    pub(crate) fn not_invertible(element: impl ToString) -> Self {
        AlgebraError::NotInvertible {
            element: element.to_string(),
        }
    }
}

pub type Result<T> = core::result::Result<T, AlgebraError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let e = AlgebraError::DimensionMismatch {
            left: (2, 3),
            right: (2, 2),
        };
        assert_eq!(e.to_string(), "dimension mismatch: 2x3 and 2x2");
        assert_eq!(
            AlgebraError::not_invertible(4).to_string(),
            "element 4 is not invertible"
        );
        assert_eq!(AlgebraError::DivisionByZero.to_string(), "division by zero");
    }
}
