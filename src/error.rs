//! Errors shared by every kernel in the crate.

/// Precondition violations detected before a compute region starts.
///
/// A result outside its tolerance is not an error; see
/// [`Verdict`](crate::check::Verdict).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
    /// A length (signal size, vector length or iteration count) is zero.
    EmptyInput,
    /// Two sequences that must be index-aligned have different lengths.
    MismatchedLengths { expected: usize, got: usize },
    /// The length cannot be represented exactly in the chosen float type.
    PrecisionLoss,
    /// A tolerance, reference or configuration value is out of range.
    InvalidValue,
}

impl core::fmt::Display for KernelError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            KernelError::EmptyInput => write!(f, "input length must be non-zero"),
            KernelError::MismatchedLengths { expected, got } => {
                write!(f, "mismatched lengths: expected {expected}, got {got}")
            }
            KernelError::PrecisionLoss => {
                write!(f, "length is not exactly representable in the float type")
            }
            KernelError::InvalidValue => write!(f, "invalid value"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for KernelError {}
