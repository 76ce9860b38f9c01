use anyhow::Result;
use std::env;
use std::process::Command;
use std::string::String;

/// Scenario names accepted by the `kernel-check` binary.
pub const SCENARIOS: [&str; 3] = ["dft", "axpy", "series"];

/// Options derived from the host machine used to configure cargo commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub features: Vec<String>,
}

impl BuildConfig {
    /// Join features into a single string suitable for passing to cargo.
    pub fn features_arg(&self) -> Option<String> {
        if self.features.is_empty() {
            None
        } else {
            Some(self.features.join(" "))
        }
    }
}

/// Detect build configuration from the current machine.
pub fn detect_config() -> BuildConfig {
    let nproc = detect_nproc();
    let extra = env::var("NUMKERN_FEATURES").unwrap_or_default();
    compute_config(nproc, &extra)
}

fn detect_nproc() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Compute a [`BuildConfig`] from supplied inputs. This is separated for testing.
pub fn compute_config(nproc: usize, extra: &str) -> BuildConfig {
    let mut features = Vec::new();

    if nproc > 1 {
        features.push("parallel".into());
    }

    for feat in extra.split_whitespace() {
        if !features.iter().any(|f| f == feat) {
            features.push(feat.to_string());
        }
    }

    BuildConfig { features }
}

fn with_features(mut cmd: Command, cfg: &BuildConfig) -> Command {
    if let Some(f) = cfg.features_arg() {
        cmd.arg("--features").arg(f);
    }
    cmd
}

pub fn build_command(cfg: &BuildConfig) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["build", "--workspace"]);
    with_features(cmd, cfg)
}

pub fn test_command(cfg: &BuildConfig) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.arg("test");
    with_features(cmd, cfg)
}

pub fn clippy_command() -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["clippy", "--workspace", "--all-targets", "--all-features"]);
    cmd
}

pub fn fmt_command() -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["fmt", "--all"]);
    cmd
}

pub fn bench_command(cfg: &BuildConfig) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["bench", "--manifest-path", "numkern-bench/Cargo.toml"]);
    with_features(cmd, cfg)
}

/// `cargo run -r -p kernel-check -- <scenario> <args..>`.
///
/// The scenario is checked here so a typo fails before cargo starts a build.
pub fn check_command(cfg: &BuildConfig, scenario: &str, args: &[String]) -> Result<Command> {
    if !SCENARIOS.contains(&scenario) {
        anyhow::bail!(
            "unknown scenario `{scenario}` (expected one of {})",
            SCENARIOS.join(", ")
        );
    }
    let mut cmd = Command::new("cargo");
    cmd.args(["run", "-r", "-p", "kernel-check"]);
    let mut cmd = with_features(cmd, cfg);
    cmd.arg("--").arg(scenario).args(args);
    if cfg.features.iter().any(|f| f == "parallel") && scenario == "dft" {
        cmd.arg("--parallel");
    }
    Ok(cmd)
}
