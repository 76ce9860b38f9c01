//! Repeated vector scaling followed by accumulation into `y`.
//!
//! `x` may run in any [`Float`] precision; `y` always stays `f64`, since
//! the increment it receives (`3e-8` with the defaults) sits at the edge of
//! `f32` resolution around `1.0`.

use alloc::vec;

use crate::error::KernelError;
use crate::num::Float;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxpyParams {
    pub len: usize,
    pub a: f64,
    pub iterations: usize,
    pub x0: f64,
    pub y0: f64,
}

impl Default for AxpyParams {
    fn default() -> Self {
        Self {
            len: 100_000_000,
            a: 10.0,
            iterations: 20,
            x0: 3e-28,
            y0: 1.000_000_03,
        }
    }
}

/// Expected `y[0]` for the default parameters.
pub const AXPY_REFERENCE: f64 = 1.000_000_06;

/// Multiply every `x[j]` by `a`, `iterations` times, then add it to `y[j]`.
pub fn scale_and_add<T: Float>(
    a: T,
    iterations: usize,
    x: &mut [T],
    y: &mut [f64],
) -> Result<(), KernelError> {
    if x.len() != y.len() {
        return Err(KernelError::MismatchedLengths {
            expected: x.len(),
            got: y.len(),
        });
    }
    for xj in x.iter_mut() {
        for _ in 0..iterations {
            *xj = *xj * a;
        }
    }
    for (yj, &xj) in y.iter_mut().zip(x.iter()) {
        *yj += xj.to_f64();
    }
    Ok(())
}

/// Allocate, initialize and run the kernel; returns `y[0]`.
pub fn axpy<T: Float>(params: &AxpyParams) -> Result<f64, KernelError> {
    if params.len == 0 {
        return Err(KernelError::EmptyInput);
    }
    let mut x = vec![T::from_f64(params.x0); params.len];
    let mut y = vec![params.y0; params.len];
    scale_and_add(T::from_f64(params.a), params.iterations, &mut x, &mut y)?;
    Ok(y[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_iterations_adds_initial_x() {
        let mut x = [0.25f64, 0.5];
        let mut y = [1.0, 1.0];
        scale_and_add(10.0, 0, &mut x, &mut y).unwrap();
        assert_eq!(y, [1.25, 1.5]);
    }

    #[test]
    fn empty_vector_rejected() {
        let params = AxpyParams {
            len: 0,
            ..AxpyParams::default()
        };
        assert_eq!(axpy::<f64>(&params), Err(KernelError::EmptyInput));
    }
}
