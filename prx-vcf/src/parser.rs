//! Line-level VCF parsing.
//!
//! Only the first eight columns are looked at (CHROM, POS, ID, REF, ALT, QUAL,
//! FILTER, INFO); sample columns are ignored. Columns are split on any run of
//! whitespace, so space-separated files are accepted as well as tab-separated ones.

use tracing::debug;

use prx_core::models::{Gene, VariantRecord};

use crate::consts::{INFO_GENE_KEY, INFO_STAR_KEY, MIN_FIELDS};
use crate::decode::decode_lossy;

///
/// The INFO keys the extractor cares about.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InfoFields {
    pub gene: Option<String>,
    pub star: Option<String>,
}

///
/// Parse a `;`-delimited INFO column. Entries without `=` are ignored, each entry
/// is split at its first `=`, and a repeated key keeps its last value.
///
pub fn parse_info(info: &str) -> InfoFields {
    let mut fields = InfoFields::default();

    for entry in info.split(';') {
        let Some((key, value)) = entry.split_once('=') else {
            continue;
        };

        match key.trim() {
            INFO_GENE_KEY => fields.gene = Some(value.trim().to_string()),
            INFO_STAR_KEY => fields.star = Some(value.trim().to_string()),
            _ => {}
        }
    }

    fields
}

///
/// Parse one data line into a record.
///
/// Returns `None` for header/comment lines, blank lines, lines with fewer than
/// eight columns, and lines whose `GENE` is missing or not a target gene.
///
pub fn parse_variant_line(line: &str) -> Option<VariantRecord> {
    if line.starts_with('#') || line.trim().is_empty() {
        return None;
    }

    let columns: Vec<&str> = line.split_whitespace().take(MIN_FIELDS).collect();
    if columns.len() < MIN_FIELDS {
        return None;
    }

    // chrom, pos, id, ref, alt, qual, filter, info
    let info = parse_info(columns[7]);
    let gene: Gene = info.gene?.parse().ok()?;

    Some(VariantRecord {
        rsid: columns[2].to_string(),
        gene,
        star_allele: info.star.filter(|star| !star.is_empty()),
        chromosome: columns[0].to_string(),
        position: columns[1].to_string(),
    })
}

///
/// Extract target-gene records from already decoded text, in input order.
///
pub fn extract_variants_from_str(text: &str) -> Vec<VariantRecord> {
    let mut variants = Vec::new();
    let mut data_lines = 0usize;

    for line in text.lines() {
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }
        data_lines += 1;

        if let Some(record) = parse_variant_line(line) {
            variants.push(record);
        }
    }

    debug!(
        data_lines,
        retained = variants.len(),
        skipped = data_lines - variants.len(),
        "extracted pharmacogene variants"
    );

    variants
}

///
/// Extract target-gene records from the raw bytes of a variant file.
///
/// # Arguments
/// - bytes: file content; invalid UTF-8 sequences are dropped
///
/// # Returns
/// The qualifying records in input order. Empty and all-comment input gives an
/// empty vector, which callers should read as "no pharmacogenomic signal".
///
pub fn extract_variants(bytes: &[u8]) -> Vec<VariantRecord> {
    extract_variants_from_str(&decode_lossy(bytes))
}
