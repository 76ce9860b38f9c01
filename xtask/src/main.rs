use clap::{Parser, Subcommand};
#[cfg(not(test))]
use xtask::*;

#[derive(Parser)]
#[command(author, version, about = "Development tasks for numkern")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Build,
    Test,
    Clippy,
    Fmt,
    Analyze,
    Bench,
    /// Run one scenario through kernel-check in release mode
    Check {
        /// dft, axpy or series
        scenario: String,
        /// Extra flags passed through to kernel-check
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

#[cfg(not(test))]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = detect_config();

    let status = match cli.command {
        Commands::Build => build_command(&cfg).status(),
        Commands::Test => test_command(&cfg).status(),
        Commands::Clippy => clippy_command().status(),
        Commands::Fmt => fmt_command().status(),
        Commands::Analyze => {
            let fmt = fmt_command().status()?;
            if !fmt.success() {
                Ok(fmt)
            } else {
                clippy_command().status()
            }
        }
        Commands::Bench => bench_command(&cfg).status(),
        Commands::Check { scenario, args } => check_command(&cfg, &scenario, &args)?.status(),
    }?;

    std::process::exit(status.code().unwrap_or(1));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_check_command_with_passthrough() {
        let cli = Cli::parse_from(["xtask", "check", "dft", "--len", "64", "--strict"]);
        match cli.command {
            Commands::Check { scenario, args } => {
                assert_eq!(scenario, "dft");
                assert_eq!(args, ["--len", "64", "--strict"]);
            }
            _ => panic!("parsed wrong command"),
        }
    }
}
