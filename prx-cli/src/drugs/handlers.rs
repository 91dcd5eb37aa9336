use std::io::{self, BufWriter, Write};

use anyhow::Result;

use prx_risk::{DRUG_RULES, alternatives};

pub fn run_drugs() -> Result<()> {
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    write_drugs(&mut writer)?;
    writer.flush()?;

    Ok(())
}

pub fn write_drugs<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "DRUG\tGENE\tALTERNATIVES")?;
    for rule in DRUG_RULES {
        let alts = alternatives(rule.drug);
        let alts = if alts.is_empty() {
            ".".to_string()
        } else {
            alts.join(",")
        };
        writeln!(writer, "{}\t{}\t{}", rule.drug, rule.gene, alts)?;
    }

    Ok(())
}
