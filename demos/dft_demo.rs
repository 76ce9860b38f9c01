//! DFT demo
//!
//! Synthesizes the 5000-sample test signal, runs the seeded direct DFT and
//! prints the norm of the real output the way the reference harness does.

use numkern::region::Region;
use numkern::scenario::run;
use numkern::{KernelConfig, Scenario};

fn main() {
    let region: Region = Scenario::Dft.region();
    println!("=== numkern DFT demo ===\n");
    println!("{region}\n");

    let config = KernelConfig::for_scenario(Scenario::Dft);
    let outcome = run(&config).unwrap();

    println!("{}", outcome.report_line());
    println!("{}", outcome.summary());
    if let Some(fp) = outcome.fingerprint {
        println!("output fingerprint: {}", fp.to_hex());
    }
}
