//! # Drug risk assessment
//!
//! Lookup tables that turn a (drug, metabolizer phenotype) pair into a risk
//! label, plus the advice and alternatives shown next to it. Every lookup is
//! soft: an unmapped phenotype gives [`RiskLabel::Unknown`], never an error.
//! Only an unknown drug is signalled, by `None`.
//!
pub mod label;
pub mod recommendations;
pub mod rules;

// re-export things
pub use label::*;
pub use recommendations::*;
pub use rules::*;
