//! Per-scenario configuration.
//!
//! [`KernelConfig::for_scenario`] yields the reference settings. Overrides come
//! from a key lookup ([`KernelConfig::with_overrides_from`]) or, with `std`,
//! from the `NUMKERN_*` environment variables.

use alloc::string::String;

use crate::check::Tolerance;
use crate::error::KernelError;
use crate::scenario::Scenario;
use crate::series::SeriesParams;

/// Sequence length (DFT `N`, axpy vector length, series outer count).
pub const ENV_LEN: &str = "NUMKERN_LEN";
/// Reference value for the scalar output.
pub const ENV_REFERENCE: &str = "NUMKERN_REFERENCE";
/// Tolerance bound; keeps the scenario's absolute/relative kind.
pub const ENV_TOLERANCE: &str = "NUMKERN_TOLERANCE";
/// `f32` or `f64`.
pub const ENV_PRECISION: &str = "NUMKERN_PRECISION";

/// Float precision a kernel is evaluated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    Single,
    #[default]
    Double,
}

impl core::str::FromStr for Precision {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "f32" | "single" => Ok(Precision::Single),
            "f64" | "double" => Ok(Precision::Double),
            _ => Err(KernelError::InvalidValue),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelConfig {
    pub scenario: Scenario,
    pub len: usize,
    pub reference: f64,
    pub tolerance: Tolerance,
    pub precision: Precision,
    /// Split the DFT outer loop across the Rayon pool.
    #[cfg(feature = "parallel")]
    pub parallel: bool,
}

impl KernelConfig {
    pub fn for_scenario(scenario: Scenario) -> Self {
        Self {
            scenario,
            len: scenario.default_len(),
            reference: scenario.default_reference(),
            tolerance: scenario.region().tolerance,
            precision: Precision::Double,
            #[cfg(feature = "parallel")]
            parallel: false,
        }
    }

    /// Change the length. For the series scenario the reference follows
    /// (`outer · π`); other references are independent of, or must be
    /// supplied for, the new length.
    pub fn with_len(mut self, len: usize) -> Self {
        self.len = len;
        if self.scenario == Scenario::Series {
            self.reference = SeriesParams {
                outer: len,
                ..SeriesParams::default()
            }
            .expected();
        }
        self
    }

    pub fn with_reference(mut self, reference: f64) -> Self {
        self.reference = reference;
        self
    }

    pub fn with_tolerance_bound(mut self, bound: f64) -> Self {
        self.tolerance = self.tolerance.with_bound(bound);
        self
    }

    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    /// Apply overrides from `lookup`, keyed by the `ENV_*` names. The length is
    /// applied before the reference so an explicit reference always wins.
    ///
    /// # Errors
    /// [`KernelError::InvalidValue`] if a present value does not parse.
    pub fn with_overrides_from<F>(self, lookup: F) -> Result<Self, KernelError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = self;
        if let Some(v) = lookup(ENV_LEN) {
            cfg = cfg.with_len(parse(&v)?);
        }
        if let Some(v) = lookup(ENV_REFERENCE) {
            cfg = cfg.with_reference(parse(&v)?);
        }
        if let Some(v) = lookup(ENV_TOLERANCE) {
            cfg = cfg.with_tolerance_bound(parse(&v)?);
        }
        if let Some(v) = lookup(ENV_PRECISION) {
            cfg = cfg.with_precision(v.parse()?);
        }
        Ok(cfg)
    }

    /// [`with_overrides_from`](Self::with_overrides_from) over the process environment.
    #[cfg(feature = "std")]
    pub fn with_env_overrides(self) -> Result<Self, KernelError> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Reject configurations that must not enter a compute region.
    pub fn validate(&self) -> Result<(), KernelError> {
        if self.len == 0 {
            return Err(KernelError::EmptyInput);
        }
        if !self.reference.is_finite() {
            return Err(KernelError::InvalidValue);
        }
        self.tolerance.validate()
    }
}

fn parse<V: core::str::FromStr>(raw: &str) -> Result<V, KernelError> {
    raw.trim().parse().map_err(|_| KernelError::InvalidValue)
}
