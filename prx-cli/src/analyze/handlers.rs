use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use tracing::info;

use prx_report::{AnalysisConfig, Analyzer, DrugAssessment, RequestContext};
use prx_vcf::read_vcf_bytes;

pub fn run_analyze(matches: &ArgMatches) -> Result<()> {
    let vcf = matches
        .get_one::<String>("vcf")
        .context("A path to a VCF file is required.")?;

    let drugs = matches
        .get_one::<String>("drug")
        .context("At least one drug is required.")?;

    let config = match matches.get_one::<String>("config") {
        Some(path) => AnalysisConfig::try_from(Path::new(path))
            .with_context(|| format!("Failed to load config: {}", path))?,
        None => AnalysisConfig::default(),
    };

    let context = match matches.get_one::<String>("patient-id") {
        Some(patient_id) => RequestContext::for_patient(patient_id.as_str()),
        None => RequestContext::generate(),
    };

    let bytes = read_vcf_bytes(Path::new(vcf))?;
    let reports = Analyzer::new(config)
        .analyze(vcf, &bytes, drugs, &context)
        .with_context(|| format!("Analysis of {} failed", vcf))?;

    info!(
        patient_id = %context.patient_id,
        reports = reports.len(),
        "analysis complete"
    );

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    write_reports(&mut writer, &reports, matches.get_flag("pretty"))?;
    writer.flush()?;

    Ok(())
}

///
/// One report is written as an object, several as an array.
///
pub fn write_reports<W: Write>(writer: &mut W, reports: &[DrugAssessment], pretty: bool) -> Result<()> {
    match (reports, pretty) {
        ([report], true) => serde_json::to_writer_pretty(&mut *writer, report)?,
        ([report], false) => serde_json::to_writer(&mut *writer, report)?,
        (_, true) => serde_json::to_writer_pretty(&mut *writer, reports)?,
        (_, false) => serde_json::to_writer(&mut *writer, reports)?,
    }
    writeln!(writer)?;

    Ok(())
}
