//! Precision sweep
//!
//! Runs every scenario in `f64` and `f32` and shows which regions still meet
//! their tolerance in single precision. The axpy vector is shortened since
//! `y[0]` does not depend on its length.

use numkern::scenario::run;
use numkern::{KernelConfig, Precision, Scenario};

fn main() {
    for scenario in Scenario::ALL {
        for precision in [Precision::Double, Precision::Single] {
            let mut config = KernelConfig::for_scenario(scenario).with_precision(precision);
            if scenario == Scenario::Axpy {
                config = config.with_len(1 << 16);
            }
            let outcome = run(&config).unwrap();
            println!(
                "{:<7} {:?}: {:<24} {}",
                scenario.name(),
                precision,
                outcome.report_line(),
                outcome.verdict
            );
        }
    }
}
