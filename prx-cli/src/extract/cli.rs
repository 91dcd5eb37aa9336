use clap::{Arg, Command};

pub const EXTRACT_CMD: &str = "extract";

pub fn create_extract_cli() -> Command {
    Command::new(EXTRACT_CMD)
        .about("List the target-gene variant records found in a VCF file")
        .arg_required_else_help(true)
        .arg(
            Arg::new("vcf")
                .required(true)
                .help("Path to the VCF file (plain or gzipped)"),
        )
}
