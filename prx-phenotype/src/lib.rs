//! Diplotype and phenotype inference for the target pharmacogenes.
//!
//! - [`infer_diplotype`] reduces a gene's variant records to two star alleles
//! - [`classify_phenotype`] maps that diplotype to a metabolizer status through
//!   the per-gene allele-function table in [`tables`]
//!
//! # Example
//!
//! ```rust
//! use prx_core::models::{Gene, Phenotype, VariantRecord};
//! use prx_phenotype::{classify_phenotype, infer_diplotype};
//!
//! let variants = vec![VariantRecord {
//!     rsid: "rs3892097".to_string(),
//!     gene: Gene::Cyp2d6,
//!     star_allele: Some("*4".to_string()),
//!     chromosome: "22".to_string(),
//!     position: "42524947".to_string(),
//! }];
//!
//! let diplotype = infer_diplotype(&variants, Gene::Cyp2d6);
//! assert_eq!(diplotype.to_string(), "*4/*1");
//! assert_eq!(classify_phenotype(Gene::Cyp2d6, &diplotype), Phenotype::Intermediate);
//! ```
pub mod classify;
pub mod diplotype;
pub mod tables;

// re-exports
pub use classify::{classify_diplotype_str, classify_functions, classify_phenotype};
pub use diplotype::infer_diplotype;
pub use tables::allele_function;
