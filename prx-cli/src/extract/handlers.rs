use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use prx_core::models::VariantRecord;
use prx_vcf::extract_variants_from_path;

pub const EXTRACT_HEADER: &str = "#CHROM\tPOS\tID\tGENE\tSTAR";

pub fn run_extract(matches: &ArgMatches) -> Result<()> {
    let vcf = matches
        .get_one::<String>("vcf")
        .context("A path to a VCF file is required.")?;

    let variants = extract_variants_from_path(Path::new(vcf))?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    write_variants(&mut writer, &variants)?;
    writer.flush()?;

    Ok(())
}

pub fn write_variants<W: Write>(writer: &mut W, variants: &[VariantRecord]) -> Result<()> {
    writeln!(writer, "{}", EXTRACT_HEADER)?;
    for variant in variants {
        writeln!(writer, "{}", variant)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_write_variants_from_fixture() {
        let variants =
            extract_variants_from_path(Path::new("../tests/data/vcf/multi_gene.vcf")).unwrap();
        let mut out = Vec::new();
        write_variants(&mut out, &variants).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], EXTRACT_HEADER);
        assert_eq!(lines[1], "22\t42524947\trs3892097\tCYP2D6\t*4");
        assert_eq!(lines[6], "12\t21178615\trs4149056\tSLCO1B1\t.");
    }
}
