//! The three demo scenarios and the harness that runs them.
//!
//! A run validates its configuration, executes the compute region in the
//! requested precision and classifies the scalar output. Every buffer is
//! allocated per run, so repeated runs are independent.

use crate::axpy::{axpy, AxpyParams, AXPY_REFERENCE};
use crate::check::{check, l2_norm, Tolerance, Verdict};
use crate::config::{KernelConfig, Precision};
use crate::dft::dft;
#[cfg(feature = "parallel")]
use crate::dft::dft_parallel;
use crate::error::KernelError;
use crate::num::Float;
use crate::region::Region;
use crate::series::{sum_pi_series, SeriesParams, EPS};
use crate::signal::Signal;
use crate::synth::square_wave;
use crate::twiddle::{roots_of_unity, CoefficientTable};

/// Signal length of the DFT demo.
pub const DFT_LEN: usize = 5000;
/// Norm of the real output for [`DFT_LEN`], from a sequential `f64` evaluation.
pub const DFT_REFERENCE: f64 = 7541.410678987824;
/// Absolute tolerance on the DFT norm.
pub const DFT_TOLERANCE: f64 = 5e-6;
/// Absolute tolerance on the axpy `y[0]`.
pub const AXPY_TOLERANCE: f64 = 1e-8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    Dft,
    Axpy,
    Series,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::Dft, Scenario::Axpy, Scenario::Series];

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::Dft => "dft",
            Scenario::Axpy => "axpy",
            Scenario::Series => "series",
        }
    }

    pub fn region(&self) -> Region {
        match self {
            Scenario::Dft => Region::new("dft", "norm", Tolerance::Absolute(DFT_TOLERANCE)),
            Scenario::Axpy => Region::new("axpy", "y[0]", Tolerance::Absolute(AXPY_TOLERANCE)),
            Scenario::Series => Region::new("sum2pi_x", "sum", Tolerance::Relative(EPS)),
        }
    }

    pub fn default_len(&self) -> usize {
        match self {
            Scenario::Dft => DFT_LEN,
            Scenario::Axpy => AxpyParams::default().len,
            Scenario::Series => SeriesParams::default().outer,
        }
    }

    pub fn default_reference(&self) -> f64 {
        match self {
            Scenario::Dft => DFT_REFERENCE,
            Scenario::Axpy => AXPY_REFERENCE,
            Scenario::Series => SeriesParams::default().expected(),
        }
    }
}

impl core::fmt::Display for Scenario {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for Scenario {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dft" => Ok(Scenario::Dft),
            "axpy" => Ok(Scenario::Axpy),
            "series" | "sum2pi_x" => Ok(Scenario::Series),
            _ => Err(KernelError::InvalidValue),
        }
    }
}

/// Result of one scenario run.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub scenario: Scenario,
    /// The declared scalar output, widened to `f64`.
    pub value: f64,
    pub reference: f64,
    pub tolerance: Tolerance,
    pub verdict: Verdict,
    /// Digest of the DFT output signal; `None` for scalar-only kernels.
    pub fingerprint: Option<blake3::Hash>,
}

fn prepare<T: Float>(
    len: usize,
) -> Result<(Signal<T>, CoefficientTable<T>, Signal<T>), KernelError> {
    let input = square_wave::<T>(len)?;
    let coeffs = roots_of_unity::<T>(len)?;
    Ok((input, coeffs, Signal::zeros(len)))
}

/// Synthesize the input, transform it and reduce the real output to its norm.
pub fn run_dft<T: Float>(len: usize) -> Result<(T, Signal<T>), KernelError> {
    let (input, coeffs, mut output) = prepare::<T>(len)?;
    dft(&input, &coeffs, &mut output)?;
    Ok((l2_norm(output.re()), output))
}

/// [`run_dft`] with the outer loop split across the Rayon pool.
#[cfg(feature = "parallel")]
pub fn run_dft_parallel<T: Float>(len: usize) -> Result<(T, Signal<T>), KernelError> {
    let (input, coeffs, mut output) = prepare::<T>(len)?;
    dft_parallel(&input, &coeffs, &mut output)?;
    Ok((l2_norm(output.re()), output))
}

fn run_region<T: Float>(config: &KernelConfig) -> Result<(f64, Option<blake3::Hash>), KernelError> {
    match config.scenario {
        Scenario::Dft => {
            #[cfg(feature = "parallel")]
            let (norm, output) = if config.parallel {
                run_dft_parallel::<T>(config.len)?
            } else {
                run_dft::<T>(config.len)?
            };
            #[cfg(not(feature = "parallel"))]
            let (norm, output) = run_dft::<T>(config.len)?;
            Ok((norm.to_f64(), Some(output.fingerprint())))
        }
        Scenario::Axpy => {
            let params = AxpyParams {
                len: config.len,
                ..AxpyParams::default()
            };
            Ok((axpy::<T>(&params)?, None))
        }
        Scenario::Series => {
            let params = SeriesParams {
                outer: config.len,
                ..SeriesParams::default()
            };
            Ok((sum_pi_series::<T>(&params)?.to_f64(), None))
        }
    }
}

/// Run the configured scenario and classify its output.
///
/// # Errors
/// Precondition violations only; an out-of-tolerance result is reported as
/// [`Verdict::Fail`].
pub fn run(config: &KernelConfig) -> Result<Outcome, KernelError> {
    config.validate()?;
    debug_log!(
        "running {} (len={}, precision={:?})",
        config.scenario,
        config.len,
        config.precision
    );
    let (value, fingerprint) = match config.precision {
        Precision::Double => run_region::<f64>(config)?,
        Precision::Single => run_region::<f32>(config)?,
    };
    let verdict = check(value, config.reference, config.tolerance)?;
    debug_log!(
        "{} finished: value={:e} reference={:e} verdict={}",
        config.scenario,
        value,
        config.reference,
        verdict
    );
    Ok(Outcome {
        scenario: config.scenario,
        value,
        reference: config.reference,
        tolerance: config.tolerance,
        verdict,
        fingerprint,
    })
}
