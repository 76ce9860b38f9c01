use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;
use numkern::{KernelConfig, Precision, Scenario};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScenarioArg {
    /// Seeded direct DFT, reports the norm of the real output
    Dft,
    /// Repeated vector scaling, reports y[0]
    Axpy,
    /// Truncated π series, reports SUCCESSFUL/FAILED
    Series,
}

impl From<ScenarioArg> for Scenario {
    fn from(arg: ScenarioArg) -> Self {
        match arg {
            ScenarioArg::Dft => Scenario::Dft,
            ScenarioArg::Axpy => Scenario::Axpy,
            ScenarioArg::Series => Scenario::Series,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrecisionArg {
    F32,
    F64,
}

impl From<PrecisionArg> for Precision {
    fn from(arg: PrecisionArg) -> Self {
        match arg {
            PrecisionArg::F32 => Precision::Single,
            PrecisionArg::F64 => Precision::Double,
        }
    }
}

/// Run one tolerance-checked kernel and print its result line.
#[derive(Parser, Debug)]
#[command(author, version, about = "Run a tolerance-checked numeric kernel")]
pub struct Args {
    /// Scenario to run
    #[arg(value_enum)]
    pub scenario: ScenarioArg,

    /// Sequence length (DFT N, axpy vector length, series outer count)
    #[arg(long)]
    pub len: Option<usize>,

    /// Expected scalar output
    #[arg(long, allow_negative_numbers = true)]
    pub reference: Option<f64>,

    /// Tolerance bound (absolute or relative, per scenario)
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Float precision of the compute region
    #[arg(long, value_enum)]
    pub precision: Option<PrecisionArg>,

    /// Exit with status 1 when the result is outside its tolerance
    #[arg(long)]
    pub strict: bool,

    /// Print the region descriptor to stderr before running
    #[arg(long)]
    pub show_region: bool,

    /// Print value, reference, tolerance and verdict to stderr
    #[arg(long)]
    pub summary: bool,

    /// Split the DFT outer loop across threads
    #[cfg(feature = "parallel")]
    #[arg(long)]
    pub parallel: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Scenario defaults, then `NUMKERN_*` environment, then flags.
pub fn build_config(args: &Args) -> Result<KernelConfig> {
    let mut cfg = KernelConfig::for_scenario(args.scenario.into())
        .with_env_overrides()
        .context("invalid NUMKERN_* environment value")?;
    if let Some(len) = args.len {
        cfg = cfg.with_len(len);
    }
    if let Some(reference) = args.reference {
        cfg = cfg.with_reference(reference);
    }
    if let Some(bound) = args.tolerance {
        cfg = cfg.with_tolerance_bound(bound);
    }
    if let Some(precision) = args.precision {
        cfg = cfg.with_precision(precision.into());
    }
    #[cfg(feature = "parallel")]
    {
        cfg.parallel = args.parallel;
    }
    Ok(cfg)
}

pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// `RUST_LOG`, when set, takes precedence over `-v`.
pub fn init_logging(verbose: u8) {
    env_logger::Builder::new()
        .filter_level(level_for(verbose))
        .parse_default_env()
        .init();
}
