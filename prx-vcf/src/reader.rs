use std::path::Path;

use anyhow::{Context, Result};

use prx_core::models::VariantRecord;
use prx_core::utils::read_file_bytes;

use crate::parser::extract_variants;

///
/// Read a VCF file into memory, auto-detecting gzip compression from the `.gz`
/// extension. No decoding happens here.
///
pub fn read_vcf_bytes(path: &Path) -> Result<Vec<u8>> {
    read_file_bytes(path).with_context(|| format!("Failed to read VCF: {}", path.display()))
}

///
/// Read a VCF file and extract its target-gene records.
///
pub fn extract_variants_from_path(path: &Path) -> Result<Vec<VariantRecord>> {
    let bytes = read_vcf_bytes(path)?;
    Ok(extract_variants(&bytes))
}
