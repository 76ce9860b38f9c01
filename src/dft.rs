//! Direct discrete Fourier transform.
//!
//! For every output index `k` in `[0, N)`:
//!
//! ```text
//! out_re[k] = re[k] + Σ_n ( re[n]·W_re[p] − im[n]·W_im[p] )
//! out_im[k] = im[k] + Σ_n ( re[n]·W_im[p] + im[n]·W_re[p] )
//! p = (n·k) mod N
//! ```
//!
//! Unlike the textbook transform the accumulator starts from the input sample
//! `in[k]` instead of zero. Terms are added left to right in ascending `n`, so
//! results are reproducible bit for bit. The optional parallel variant splits
//! only the outer loop and produces identical output.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::KernelError;
use crate::num::Float;
use crate::signal::Signal;
use crate::twiddle::{CoefficientTable, TwiddlePlanner};

/// `(n·k) mod len`, widened so the product cannot wrap. `len` must be non-zero.
#[inline]
pub fn modular_index(n: usize, k: usize, len: usize) -> usize {
    ((n as u128 * k as u128) % len as u128) as usize
}

fn validate<T: Float>(
    input: &Signal<T>,
    coeffs: &CoefficientTable<T>,
    output: &Signal<T>,
) -> Result<(), KernelError> {
    let n = input.len();
    if n == 0 {
        return Err(KernelError::EmptyInput);
    }
    for got in [coeffs.len(), output.len()] {
        if got != n {
            return Err(KernelError::MismatchedLengths { expected: n, got });
        }
    }
    Ok(())
}

/// Accumulate output bin `k`.
///
/// `p` advances by `k` per step and is reduced with one subtraction; since
/// `p, k < len` the sum stays below `2·len` and matches [`modular_index`].
#[inline]
fn accumulate_bin<T: Float>(re: &[T], im: &[T], w_re: &[T], w_im: &[T], k: usize) -> (T, T) {
    let len = re.len();
    let mut acc_re = re[k];
    let mut acc_im = im[k];
    let mut p = 0usize;
    for (&x_re, &x_im) in re.iter().zip(im.iter()) {
        acc_re = acc_re + x_re * w_re[p] - x_im * w_im[p];
        acc_im = acc_im + x_re * w_im[p] + x_im * w_re[p];
        p += k;
        if p >= len {
            p -= len;
        }
    }
    (acc_re, acc_im)
}

/// Transform `input` into `output` using a precomputed table.
///
/// # Errors
/// - [`KernelError::EmptyInput`] for an empty input
/// - [`KernelError::MismatchedLengths`] if `coeffs` or `output` differ in length
///   from `input`; `output` is left untouched
pub fn dft<T: Float>(
    input: &Signal<T>,
    coeffs: &CoefficientTable<T>,
    output: &mut Signal<T>,
) -> Result<(), KernelError> {
    validate(input, coeffs, output)?;
    let (re, im) = input.as_slices();
    let (out_re, out_im) = output.as_mut_slices();
    for (k, (o_re, o_im)) in out_re.iter_mut().zip(out_im.iter_mut()).enumerate() {
        let (a, b) = accumulate_bin(re, im, coeffs.re(), coeffs.im(), k);
        *o_re = a;
        *o_im = b;
    }
    Ok(())
}

/// Allocating convenience wrapper around [`dft`].
pub fn dft_vec<T: Float>(
    input: &Signal<T>,
    coeffs: &CoefficientTable<T>,
) -> Result<Signal<T>, KernelError> {
    let mut output = Signal::zeros(input.len());
    dft(input, coeffs, &mut output)?;
    Ok(output)
}

/// Transform with a table obtained from (and cached in) `planner`.
pub fn dft_planned<T: Float>(
    planner: &mut TwiddlePlanner<T>,
    input: &Signal<T>,
) -> Result<Signal<T>, KernelError> {
    if input.is_empty() {
        return Err(KernelError::EmptyInput);
    }
    let coeffs = planner.get(input.len())?;
    dft_vec(input, &coeffs)
}

/// Parallel version of [`dft`].
///
/// Output bins are distributed across the Rayon pool; each bin is still
/// accumulated sequentially, so the result equals [`dft`] exactly.
///
/// Requires the `parallel` feature, which enables the [`rayon`](https://crates.io/crates/rayon) dependency.
#[cfg(feature = "parallel")]
pub fn dft_parallel<T: Float>(
    input: &Signal<T>,
    coeffs: &CoefficientTable<T>,
    output: &mut Signal<T>,
) -> Result<(), KernelError> {
    validate(input, coeffs, output)?;
    let (re, im) = input.as_slices();
    let (w_re, w_im) = (coeffs.re(), coeffs.im());
    let (out_re, out_im) = output.as_mut_slices();
    out_re
        .par_iter_mut()
        .zip(out_im.par_iter_mut())
        .enumerate()
        .for_each(|(k, (o_re, o_im))| {
            let (a, b) = accumulate_bin(re, im, w_re, w_im, k);
            *o_re = a;
            *o_im = b;
        });
    Ok(())
}
