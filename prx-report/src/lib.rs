//! # prx-report
//!
//! Ties the pipeline together: an uploaded variant file and a drug list go in,
//! one [`DrugAssessment`] per drug comes out, ready to be serialized as JSON.
//!
//! ## Example
//!
//! ```rust
//! use prx_report::{Analyzer, RequestContext};
//!
//! let vcf = b"##fileformat=VCFv4.2\n22 42522613 rs16947 G A . . GENE=CYP2D6\n";
//! let reports = Analyzer::default()
//!     .analyze("patient.vcf", vcf, "CODEINE", &RequestContext::generate())
//!     .unwrap();
//!
//! let profile = &reports[0].pharmacogenomic_profile;
//! assert_eq!(profile.diplotype, "*1/*1");
//! assert_eq!(profile.phenotype.to_string(), "NM");
//! assert_eq!(reports[0].risk_assessment.risk_label.to_string(), "Safe");
//! ```
//!
pub mod analyzer;
pub mod config;
pub mod error;
pub mod explanation;
pub mod models;

// re-export things
pub use analyzer::*;
pub use config::*;
pub use error::*;
pub use explanation::*;
pub use models::*;
