//! # Variant extraction for pharmacogenomic VCF files.
//!
//! This crate turns the raw bytes of an uploaded variant file into
//! [`VariantRecord`](prx_core::VariantRecord)s for the target pharmacogenes.
//! Decoding is best-effort and lossy: invalid UTF-8 is dropped, malformed
//! lines and lines for other genes are skipped without error.
//!
//! It also provides the upload checks that run before extraction
//! (file extension, `##fileformat=VCF` header, size limit).
//!
//! ## Example
//!
//! ```rust
//! use prx_vcf::extract_variants;
//!
//! let vcf = b"##fileformat=VCFv4.2\n22 42522613 rs16947 G A . . GENE=CYP2D6;STAR=*2\n";
//! let variants = extract_variants(vcf);
//!
//! assert_eq!(variants.len(), 1);
//! assert_eq!(variants[0].star_allele.as_deref(), Some("*2"));
//! ```
//!
pub mod decode;
pub mod error;
pub mod parser;
pub mod reader;
pub mod validate;

// re-expose core functions
pub use decode::*;
pub use error::*;
pub use parser::*;
pub use reader::*;
pub use validate::*;

pub mod consts {
    pub const FILEFORMAT_MARKER: &str = "##fileformat=VCF";
    pub const MIN_FIELDS: usize = 8;
    pub const INFO_GENE_KEY: &str = "GENE";
    pub const INFO_STAR_KEY: &str = "STAR";
    pub const DEFAULT_MAX_FILE_BYTES: usize = 5 * 1024 * 1024;
}
