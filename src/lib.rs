//! # numkern - tolerance-checked numeric micro-kernels
//!
//! A small set of self-contained numeric kernels, each of which runs a
//! compute region and validates a single scalar output against a reference
//! value within a tolerance.
//!
//! ## Kernels
//!
//! - **DFT**: direct `O(N²)` evaluation of a discrete Fourier transform whose
//!   accumulators are seeded with the input sample. The output is reduced to
//!   the Euclidean norm of its real component.
//! - **axpy**: repeated scaling of `x` by `a`, then `y += x`, reporting `y[0]`.
//! - **series**: a truncated geometric series of `π / 2^j`, summed `outer` times.
//!
//! All kernels are generic over [`Float`], so a region can be evaluated in
//! `f32` against the same tolerance used for the `f64` reference.
//!
//! ## Cargo Features
//!
//! - `std` (default): `std::error::Error` impls, environment configuration and
//!   BLAKE3 `std` support
//! - `parallel`: partition the DFT outer loop with Rayon
//! - `verbose-logging`: emit `log` debug events from the planner and harness
//!
//! ## Example
//!
//! ```
//! use numkern::dft::dft_vec;
//! use numkern::synth::square_wave;
//! use numkern::twiddle::roots_of_unity;
//! use numkern::check::{check, l2_norm, Tolerance, Verdict};
//!
//! let input = square_wave::<f64>(8).unwrap();
//! let coeffs = roots_of_unity::<f64>(8).unwrap();
//! let output = dft_vec(&input, &coeffs).unwrap();
//! let norm = l2_norm(output.re());
//! let verdict = check(norm, 15.735246415180, Tolerance::Absolute(1e-9)).unwrap();
//! assert_eq!(verdict, Verdict::Pass);
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or https://www.apache.org/licenses/LICENSE-2.0)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or https://opensource.org/licenses/MIT)
//!
//! at your option.

#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// Debug-level event, compiled out unless `verbose-logging` is enabled.
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "verbose-logging")]
        log::debug!($($arg)*);
    };
}

pub mod error;
/// Floating-point abstraction shared by every kernel.
pub mod num;
/// Split real/imaginary signal buffers.
pub mod signal;

/// Roots-of-unity coefficient tables and their cache.
pub mod twiddle;

/// Deterministic synthetic input signals.
pub mod synth;

/// Direct discrete Fourier transform with seeded self-term.
pub mod dft;

/// Euclidean norm and tolerance classification.
pub mod check;

/// Declarative descriptors for tolerance-checked regions.
pub mod region;

/// Vector scaling kernel.
pub mod axpy;

/// Truncated series summation kernel.
pub mod series;

/// Scenario configuration with environment overrides.
pub mod config;

/// Scenario harness tying synthesis, kernels and checks together.
pub mod scenario;

/// C-compatible formatting of scenario results.
pub mod report;

pub use check::{Tolerance, Verdict};
pub use config::{KernelConfig, Precision};
pub use error::KernelError;
pub use num::Float;
pub use scenario::{Outcome, Scenario};
pub use signal::Signal;
