//! Demonstrates enabling verbose logging for numkern.
use numkern::dft::dft_planned;
use numkern::scenario::run;
use numkern::synth::square_wave;
use numkern::twiddle::TwiddlePlanner;
use numkern::{KernelConfig, Scenario};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let mut planner = TwiddlePlanner::<f64>::new();
    let input = square_wave::<f64>(64).unwrap();
    dft_planned(&mut planner, &input).unwrap();
    dft_planned(&mut planner, &input).unwrap();

    let config = KernelConfig::for_scenario(Scenario::Series);
    run(&config).unwrap();
}
