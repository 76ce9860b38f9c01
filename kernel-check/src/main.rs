use anyhow::Context;
use clap::Parser;
use kernel_check::{build_config, init_logging, Args};
use numkern::region::Region;
use numkern::scenario::run;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    let config = build_config(&args)?;

    if args.show_region {
        let region = Region {
            tolerance: config.tolerance,
            ..config.scenario.region()
        };
        eprintln!("{region}");
    }

    let outcome =
        run(&config).with_context(|| format!("cannot run {} scenario", config.scenario))?;
    println!("{}", outcome.report_line());
    if args.summary {
        eprintln!("{}", outcome.summary());
    }
    if let Some(fp) = outcome.fingerprint {
        log::info!("output fingerprint {}", fp.to_hex());
    }

    if args.strict && !outcome.verdict.is_pass() {
        log::warn!("{} outside tolerance", config.scenario);
        std::process::exit(1);
    }
    Ok(())
}
