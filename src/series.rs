use crate::error::KernelError;
use crate::num::Float;

/// Relative tolerance for the series sum.
pub const EPS: f64 = 5e-7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesParams {
    /// Number of times the inner series is added to the total.
    pub outer: usize,
    /// Exclusive upper bound of the exponent `j`; terms run over `1..inner`.
    pub inner: usize,
}

impl Default for SeriesParams {
    fn default() -> Self {
        Self {
            outer: 2000,
            inner: 25,
        }
    }
}

impl SeriesParams {
    /// The value the sum converges to: `outer · π`.
    pub fn expected(&self) -> f64 {
        self.outer as f64 * core::f64::consts::PI
    }
}

/// `2^i` by repeated doubling.
pub fn pow2<T: Float>(i: usize) -> T {
    let two = T::from_f64(2.0);
    let mut power = T::one();
    for _ in 0..i {
        power = power * two;
    }
    power
}

/// `Σ_{i<outer} Σ_{1≤j<inner} π / 2^j`, with a fresh inner accumulator per
/// outer step.
pub fn sum_pi_series<T: Float>(params: &SeriesParams) -> Result<T, KernelError> {
    if params.outer == 0 {
        return Err(KernelError::EmptyInput);
    }
    let pi = T::pi();
    let mut sum = T::zero();
    for _ in 0..params.outer {
        let mut acc = T::zero();
        for j in 1..params.inner {
            acc = acc + pi / pow2::<T>(j);
        }
        sum = sum + acc;
    }
    Ok(sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pow2_is_exact() {
        assert_eq!(pow2::<f64>(0), 1.0);
        assert_eq!(pow2::<f64>(10), 1024.0);
        assert_eq!(pow2::<f32>(24), 16_777_216.0);
    }

    #[test]
    fn inner_of_one_sums_nothing() {
        let params = SeriesParams { outer: 3, inner: 1 };
        assert_eq!(sum_pi_series::<f64>(&params), Ok(0.0));
    }
}
