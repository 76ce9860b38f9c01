use alloc::vec::Vec;

use crate::error::KernelError;
use crate::num::{angular_step, Float};
use crate::signal::Signal;

/// `-1` for negative, `1` for positive, `0` for zero and NaN.
#[inline]
pub fn sgn<T: Float>(v: T) -> T {
    if v > T::zero() {
        T::one()
    } else if v < T::zero() {
        -T::one()
    } else {
        T::zero()
    }
}

/// Square-wave-like test signal of length `n`.
///
/// With `x = (2π/n)·i`:
/// - `re[i] = sgn(sin(x + 1)) + cos(x)`
/// - `im[i] = sgn(cos(x + 1)) + sin(x)`
///
/// The sign function only shapes the waveform; nothing downstream depends on
/// its discontinuity.
pub fn square_wave<T: Float>(n: usize) -> Result<Signal<T>, KernelError> {
    if n == 0 {
        return Err(KernelError::EmptyInput);
    }
    let step = angular_step(T::from_usize(n).ok_or(KernelError::PrecisionLoss)?);
    let one = T::one();
    let mut re = Vec::with_capacity(n);
    let mut im = Vec::with_capacity(n);
    for i in 0..n {
        let x = step * T::from_usize(i).ok_or(KernelError::PrecisionLoss)?;
        re.push(sgn((x + one).sin()) + x.cos());
        im.push(sgn((x + one).cos()) + x.sin());
    }
    Signal::new(re, im)
}
