use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

///
/// Functional consequence of a single star allele.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlleleFunction {
    Normal,
    Reduced,
    NoFunction,
    Increased,
    Unknown,
}

impl Display for AlleleFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AlleleFunction::Normal => "normal",
            AlleleFunction::Reduced => "reduced",
            AlleleFunction::NoFunction => "no_function",
            AlleleFunction::Increased => "increased",
            AlleleFunction::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

///
/// Metabolizer status derived from a diplotype.
///
/// `Indeterminate` is never produced by classification. It marks a gene that
/// was not covered by the input at all, as opposed to a confirmed wild type.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phenotype {
    #[serde(rename = "PM")]
    Poor,
    #[serde(rename = "IM")]
    Intermediate,
    #[serde(rename = "NM")]
    Normal,
    #[serde(rename = "UM")]
    UltraRapid,
    Unknown,
    Indeterminate,
}

impl Phenotype {
    pub fn label(&self) -> &'static str {
        match self {
            Phenotype::Poor => "PM",
            Phenotype::Intermediate => "IM",
            Phenotype::Normal => "NM",
            Phenotype::UltraRapid => "UM",
            Phenotype::Unknown => "Unknown",
            Phenotype::Indeterminate => "Indeterminate",
        }
    }

    ///
    /// Lenient parse: anything that is not a known label becomes `Unknown`.
    ///
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or(Phenotype::Unknown)
    }
}

impl FromStr for Phenotype {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PM" => Ok(Phenotype::Poor),
            "IM" => Ok(Phenotype::Intermediate),
            "NM" => Ok(Phenotype::Normal),
            "UM" => Ok(Phenotype::UltraRapid),
            "Unknown" => Ok(Phenotype::Unknown),
            "Indeterminate" => Ok(Phenotype::Indeterminate),
            _ => Err(ModelError::UnknownPhenotype(s.to_string())),
        }
    }
}

impl Display for Phenotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
