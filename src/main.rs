//! Driver binary for the descent engine and harness.

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, Command};
use plummet::{descend_from, run_harness, DescentPolicy, HarnessConfig};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn policy_args() -> [Arg; 3] {
    [
        Arg::new("start")
            .long("start")
            .default_value("0")
            .value_parser(value_parser!(u32))
            .help("Starting depth"),
        Arg::new("max-depth")
            .long("max-depth")
            .default_value("1000")
            .value_parser(value_parser!(u32))
            .help("Hard depth budget"),
        Arg::new("continue-probability")
            .long("continue-probability")
            .default_value("0.9")
            .value_parser(value_parser!(f64))
            .help("Probability of going one level deeper at each decision"),
    ]
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Command::new("plummet")
        .version("0.1.0")
        .about("Depth-bounded stochastic descent")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("descend")
                .about("Run a single descent")
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .value_parser(value_parser!(u64))
                        .help("Random seed (drawn and echoed when absent)"),
                )
                .args(policy_args()),
        )
        .subcommand(
            Command::new("simulate")
                .about("Run the seeded simulation harness")
                .arg(
                    Arg::new("runs")
                        .long("runs")
                        .default_value("10000")
                        .value_parser(value_parser!(u64))
                        .help("Number of descents to run"),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .default_value("42")
                        .value_parser(value_parser!(u64))
                        .help("Random seed for reproducibility"),
                )
                .arg(
                    Arg::new("keep-going")
                        .long("keep-going")
                        .action(ArgAction::SetTrue)
                        .help("Collect all violations instead of stopping at the first"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output the report as JSON"),
                )
                .args(policy_args()),
        );

    let matches = cli.get_matches();

    match matches.subcommand() {
        Some(("descend", args)) => {
            let policy = policy_from_args(args)?;
            let start = *args.get_one::<u32>("start").unwrap();
            let seed = args
                .get_one::<u64>("seed")
                .copied()
                .unwrap_or_else(|| rand::thread_rng().gen());

            let mut rng = StdRng::seed_from_u64(seed);
            let outcome = descend_from(&policy, start, &mut rng);

            println!("Seed: {}", seed);
            println!("Outcome: {}", outcome);
        }
        Some(("simulate", args)) => {
            let policy = policy_from_args(args)?;
            let config = HarnessConfig {
                seed: *args.get_one::<u64>("seed").unwrap(),
                runs: *args.get_one::<u64>("runs").unwrap(),
                start_depth: *args.get_one::<u32>("start").unwrap(),
                policy,
                stop_on_first_violation: !args.get_flag("keep-going"),
            };

            let report = run_harness(config).context("harness rejected the configuration")?;

            if args.get_flag("json") {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.generate_text());
            }

            std::process::exit(if report.passed() { 0 } else { 1 });
        }
        _ => unreachable!("arg_required_else_help"),
    }

    Ok(())
}

fn policy_from_args(args: &clap::ArgMatches) -> anyhow::Result<DescentPolicy> {
    let p = *args.get_one::<f64>("continue-probability").unwrap();
    let max_depth = *args.get_one::<u32>("max-depth").unwrap();
    DescentPolicy::new(p, max_depth).context("invalid policy")
}
