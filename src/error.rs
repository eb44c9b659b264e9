use core::fmt;

/// Errors surfaced by the transform engines and the [`Matrix`](crate::matrix::Matrix)
/// container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformError {
    /// A real-input transform was handed an odd number of samples.
    OddLength(usize),
    /// A sine/cosine engine was configured with an odd real order.
    OddOrder(usize),
    /// The number of elements does not match the requested matrix shape.
    ShapeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::OddLength(len) => {
                write!(f, "real input length must be even, got {}", len)
            }
            TransformError::OddOrder(order) => {
                write!(f, "sine/cosine order must be even, got {}", order)
            }
            TransformError::ShapeMismatch { expected, actual } => {
                write!(f, "expected {} elements, got {}", expected, actual)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TransformError {}
