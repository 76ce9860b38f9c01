//! Shared fixtures for the numkern benchmarks.

use numkern::synth::square_wave;
use numkern::twiddle::{roots_of_unity, CoefficientTable};
use numkern::{Float, Signal};

/// Lengths benchmarked for the `O(N²)` kernel; the largest is the demo size.
pub const DFT_SIZES: [usize; 4] = [256, 1024, 2048, 5000];

/// Input signal, coefficient table and output buffer for length `n`.
pub fn fixture<T: Float>(n: usize) -> (Signal<T>, CoefficientTable<T>, Signal<T>) {
    let input = square_wave(n).expect("benchmark length is non-zero");
    let coeffs = roots_of_unity(n).expect("benchmark length is representable");
    (input, coeffs, Signal::zeros(n))
}
