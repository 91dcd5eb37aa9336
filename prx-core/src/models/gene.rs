use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

///
/// Target pharmacogenes. A variant is only retained when its `GENE`
/// annotation names one of these.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gene {
    #[serde(rename = "CYP2D6")]
    Cyp2d6,
    #[serde(rename = "CYP2C19")]
    Cyp2c19,
    #[serde(rename = "CYP2C9")]
    Cyp2c9,
    #[serde(rename = "SLCO1B1")]
    Slco1b1,
    #[serde(rename = "TPMT")]
    Tpmt,
    #[serde(rename = "DPYD")]
    Dpyd,
}

impl Gene {
    pub const ALL: [Gene; 6] = [
        Gene::Cyp2d6,
        Gene::Cyp2c19,
        Gene::Cyp2c9,
        Gene::Slco1b1,
        Gene::Tpmt,
        Gene::Dpyd,
    ];

    ///
    /// HGNC symbol of the gene, exactly as it appears in `GENE=` annotations.
    ///
    pub fn symbol(&self) -> &'static str {
        match self {
            Gene::Cyp2d6 => "CYP2D6",
            Gene::Cyp2c19 => "CYP2C19",
            Gene::Cyp2c9 => "CYP2C9",
            Gene::Slco1b1 => "SLCO1B1",
            Gene::Tpmt => "TPMT",
            Gene::Dpyd => "DPYD",
        }
    }
}

impl FromStr for Gene {
    type Err = ModelError;

    // symbols are matched case-sensitively, `cyp2d6` is not a target gene
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gene::ALL
            .into_iter()
            .find(|gene| gene.symbol() == s)
            .ok_or_else(|| ModelError::UnknownGene(s.to_string()))
    }
}

impl Display for Gene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("CYP2D6", Gene::Cyp2d6)]
    #[case("CYP2C19", Gene::Cyp2c19)]
    #[case("CYP2C9", Gene::Cyp2c9)]
    #[case("SLCO1B1", Gene::Slco1b1)]
    #[case("TPMT", Gene::Tpmt)]
    #[case("DPYD", Gene::Dpyd)]
    fn test_parse_target_genes(#[case] symbol: &str, #[case] expected: Gene) {
        assert_eq!(symbol.parse::<Gene>(), Ok(expected));
        assert_eq!(expected.to_string(), symbol);
    }

    #[rstest]
    #[case("VKORC1")]
    #[case("cyp2d6")]
    #[case("")]
    fn test_reject_non_target_genes(#[case] symbol: &str) {
        assert_eq!(
            symbol.parse::<Gene>(),
            Err(ModelError::UnknownGene(symbol.to_string()))
        );
    }

    #[rstest]
    fn test_serializes_as_symbol() {
        let json = serde_json::to_string(&Gene::Slco1b1).unwrap();
        assert_eq!(json, "\"SLCO1B1\"");
    }
}
