use clap::{Arg, ArgAction, Command, arg};

pub const ANALYZE_CMD: &str = "analyze";

pub fn create_analyze_cli() -> Command {
    Command::new(ANALYZE_CMD)
        .about("Assess drug risk from the pharmacogene variants in a VCF file")
        .arg_required_else_help(true)
        .arg(
            Arg::new("vcf")
                .required(true)
                .help("Path to the VCF file (plain or gzipped)"),
        )
        .arg(arg!(-d --drug <drug> "Drug name, or a comma separated list of drugs").required(true))
        .arg(arg!(-c --config <config> "TOML file with analysis settings"))
        .arg(
            Arg::new("patient-id")
                .long("patient-id")
                .value_name("patient_id")
                .help("Patient identifier for the report (a random UUID by default)"),
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .action(ArgAction::SetTrue)
                .help("Pretty-print the JSON report"),
        )
}
