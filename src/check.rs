use crate::error::KernelError;
use crate::num::Float;

/// Accepted error band around a reference value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tolerance {
    /// Pass iff `|reference − observed| ≤ t`.
    Absolute(f64),
    /// Pass iff `|reference − observed| < t · reference`.
    Relative(f64),
}

impl Tolerance {
    /// The raw bound `t`.
    pub fn bound(&self) -> f64 {
        match *self {
            Tolerance::Absolute(t) | Tolerance::Relative(t) => t,
        }
    }

    /// Same kind of tolerance with a different bound.
    pub fn with_bound(&self, t: f64) -> Self {
        match self {
            Tolerance::Absolute(_) => Tolerance::Absolute(t),
            Tolerance::Relative(_) => Tolerance::Relative(t),
        }
    }

    pub fn validate(&self) -> Result<(), KernelError> {
        let t = self.bound();
        if !t.is_finite() || t < 0.0 {
            return Err(KernelError::InvalidValue);
        }
        Ok(())
    }

    /// Whether `observed` lies inside the band. NaN is never accepted.
    pub fn accepts(&self, observed: f64, reference: f64) -> bool {
        let err = libm::fabs(reference - observed);
        match *self {
            Tolerance::Absolute(t) => err <= t,
            Tolerance::Relative(t) => err < t * reference,
        }
    }
}

impl core::fmt::Display for Tolerance {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Tolerance::Absolute(t) => write!(f, "{t:e}"),
            Tolerance::Relative(t) => write!(f, "{t:e}*reference"),
        }
    }
}

/// Outcome of a tolerance check. A failure is a normal result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

impl core::fmt::Display for Verdict {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Verdict::Pass => write!(f, "PASS"),
            Verdict::Fail => write!(f, "FAIL"),
        }
    }
}

/// `sqrt(Σ v²)`, summed in index order.
pub fn l2_norm<T: Float>(values: &[T]) -> T {
    let mut sum = T::zero();
    for &v in values {
        sum = sum + v * v;
    }
    sum.sqrt()
}

/// Classify `observed` against `reference`.
///
/// # Errors
/// [`KernelError::InvalidValue`] if the tolerance bound is negative or not finite.
pub fn check(observed: f64, reference: f64, tolerance: Tolerance) -> Result<Verdict, KernelError> {
    tolerance.validate()?;
    Ok(if tolerance.accepts(observed, reference) {
        Verdict::Pass
    } else {
        Verdict::Fail
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_bound_is_inclusive() {
        assert!(Tolerance::Absolute(0.5).accepts(1.5, 1.0));
        assert!(!Tolerance::Absolute(0.5).accepts(1.5000001, 1.0));
    }

    #[test]
    fn relative_bound_is_exclusive() {
        assert!(!Tolerance::Relative(0.5).accepts(1.5, 1.0));
        assert!(Tolerance::Relative(0.5).accepts(1.4, 1.0));
    }

    #[test]
    fn nan_never_passes() {
        assert_eq!(
            check(f64::NAN, 1.0, Tolerance::Absolute(f64::MAX)),
            Ok(Verdict::Fail)
        );
    }
}
