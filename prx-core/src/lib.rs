//! # prx-core
//!
//! Shared models for the prx pharmacogenomics pipeline:
//!
//! - [`Gene`]: the fixed set of target pharmacogenes
//! - [`VariantRecord`]: one qualifying line of a variant file
//! - [`Diplotype`]: the pair of star alleles called for a gene
//! - [`AlleleFunction`] and [`Phenotype`]: the functional classification of a diplotype
//!
//! It also carries small file utilities used by the readers and the CLI.
//!
pub mod errors;
pub mod models;
pub mod utils;

// re-export for cleaner imports
pub use errors::*;
pub use models::*;
