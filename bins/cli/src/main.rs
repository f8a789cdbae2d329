//! Fairshare CLI
//!
//! Loads a scenario file, settles it, and prints balances and transfers.

mod report;
mod scenario;

use std::path::PathBuf;

use anyhow::{Context, bail};
use fairshare_core::SettlementMethod;
use fairshare_shared::AppConfig;
use fairshare_shared::config::LoggingConfig;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::report::Report;
use crate::scenario::Scenario;

const USAGE: &str = "usage: fairshare <scenario.json> [--json]";

/// Parsed command-line arguments.
#[derive(Debug, PartialEq, Eq)]
struct Args {
    scenario: PathBuf,
    json: bool,
}

impl Args {
    fn parse(args: impl IntoIterator<Item = String>) -> anyhow::Result<Self> {
        let mut scenario = None;
        let mut json = false;

        for arg in args {
            match arg.as_str() {
                "--json" => json = true,
                "-h" | "--help" => bail!(USAGE),
                flag if flag.starts_with('-') => bail!("unknown option {flag}\n{USAGE}"),
                _ if scenario.is_some() => bail!("unexpected argument {arg}\n{USAGE}"),
                _ => scenario = Some(PathBuf::from(&arg)),
            }
        }

        let Some(scenario) = scenario else {
            bail!(USAGE);
        };
        Ok(Self { scenario, json })
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config.logging);

    let args = Args::parse(std::env::args().skip(1))?;
    let method: SettlementMethod = config.ledger.settlement_method.parse()?;

    let scenario = Scenario::load(&args.scenario)?;
    let ledger = scenario.into_ledger(method)?;
    info!(
        participants = ledger.participants().len(),
        payments = ledger.payments().len(),
        method = %method,
        "scenario loaded"
    );

    let report = Report::build(&ledger, config.ledger.display_scale)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }

    Ok(())
}
