use alloc::format;
use alloc::string::{String, ToString};

use crate::check::Verdict;
use crate::scenario::{Outcome, Scenario};

/// Format like C's `%.<precision>e`: signed exponent with at least two digits.
///
/// Rust's `{:e}` writes `7.541411e3`; this writes `7.541411e+03`.
pub fn format_scientific(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    let raw = format!("{value:.precision$e}");
    let Some((mantissa, exp)) = raw.split_once('e') else {
        return raw;
    };
    match exp.parse::<i32>() {
        Ok(e) => {
            let sign = if e < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", e.unsigned_abs())
        }
        Err(_) => raw,
    }
}

/// Format like C's `%.<precision>f`.
pub fn format_fixed(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

impl Outcome {
    /// The single line each demo prints to standard output.
    ///
    /// - DFT: the norm as `%.6e`
    /// - axpy: `y[0]` as `%.8f`
    /// - series: `SUM2PI_X - SUCCESSFUL!` or `SUM2PI_X - FAILED!!!`
    pub fn report_line(&self) -> String {
        match self.scenario {
            Scenario::Dft => format_scientific(self.value, 6),
            Scenario::Axpy => format_fixed(self.value, 8),
            Scenario::Series => match self.verdict {
                Verdict::Pass => "SUM2PI_X - SUCCESSFUL!".to_string(),
                Verdict::Fail => "SUM2PI_X - FAILED!!!".to_string(),
            },
        }
    }

    /// One-line diagnostic with value, reference, tolerance and verdict.
    pub fn summary(&self) -> String {
        format!(
            "{}: value={} reference={} tolerance={} verdict={}",
            self.scenario,
            format_scientific(self.value, 15),
            format_scientific(self.reference, 15),
            self.tolerance,
            self.verdict
        )
    }
}
