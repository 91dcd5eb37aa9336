mod analyze;
mod drugs;
mod extract;

use anyhow::Result;
use clap::Command;
use tracing_subscriber::EnvFilter;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "prx";
    pub const DEFAULT_LOG_FILTER: &str = "warn,prx=info";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Pharmacogenomic drug-risk reports from the star-allele calls in a VCF file.")
        .subcommand_required(true)
        .subcommand(analyze::cli::create_analyze_cli())
        .subcommand(extract::cli::create_extract_cli())
        .subcommand(drugs::cli::create_drugs_cli())
}

fn init_logging() {
    // logs go to stderr, stdout carries the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(consts::DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // ANALYZE
        //
        Some((analyze::cli::ANALYZE_CMD, matches)) => {
            analyze::handlers::run_analyze(matches)?;
        }

        //
        // EXTRACT
        //
        Some((extract::cli::EXTRACT_CMD, matches)) => {
            extract::handlers::run_extract(matches)?;
        }

        //
        // DRUGS
        //
        Some((drugs::cli::DRUGS_CMD, _)) => {
            drugs::handlers::run_drugs()?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
