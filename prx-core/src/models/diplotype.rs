use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ModelError, ModelResult};

/// The reference (wild-type, normal function) star allele.
pub const REFERENCE_ALLELE: &str = "*1";

///
/// A pair of star alleles for one gene, written `first/second`.
///
/// The order is the order in which the alleles were called, it is not
/// normalized: `*4/*1` and `*1/*4` are distinct values. Each component is
/// non-empty and free of `/`, so the written form always has two parts.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Diplotype {
    first: String,
    second: String,
}

fn is_valid_allele(allele: &str) -> bool {
    !allele.is_empty() && !allele.contains('/')
}

impl Diplotype {
    ///
    /// Pair two alleles, rejecting empty components and components that
    /// themselves contain `/`.
    ///
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> ModelResult<Self> {
        let (first, second) = (first.into(), second.into());
        if !is_valid_allele(&first) || !is_valid_allele(&second) {
            return Err(ModelError::InvalidDiplotype(format!("{}/{}", first, second)));
        }

        Ok(Diplotype { first, second })
    }

    ///
    /// Homozygous reference, `*1/*1`.
    ///
    pub fn reference() -> Self {
        Diplotype {
            first: REFERENCE_ALLELE.to_string(),
            second: REFERENCE_ALLELE.to_string(),
        }
    }

    pub fn alleles(&self) -> [&str; 2] {
        [self.first.as_str(), self.second.as_str()]
    }
}

impl Default for Diplotype {
    fn default() -> Self {
        Diplotype::reference()
    }
}

impl FromStr for Diplotype {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((first, second)) => {
                Diplotype::new(first, second).map_err(|_| ModelError::InvalidDiplotype(s.to_string()))
            }
            None => Err(ModelError::InvalidDiplotype(s.to_string())),
        }
    }
}

impl TryFrom<String> for Diplotype {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Diplotype> for String {
    fn from(diplotype: Diplotype) -> Self {
        diplotype.to_string()
    }
}

impl Display for Diplotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.first, self.second)
    }
}
