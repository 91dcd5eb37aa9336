use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

///
/// Risk of giving a drug to a patient with a given phenotype.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLabel {
    Safe,
    #[serde(rename = "Adjust Dosage")]
    AdjustDosage,
    Toxic,
    Ineffective,
    Unknown,
}

impl RiskLabel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLabel::Safe => "Safe",
            RiskLabel::AdjustDosage => "Adjust Dosage",
            RiskLabel::Toxic => "Toxic",
            RiskLabel::Ineffective => "Ineffective",
            RiskLabel::Unknown => "Unknown",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            RiskLabel::Toxic => Severity::Critical,
            RiskLabel::Ineffective => Severity::High,
            RiskLabel::AdjustDosage => Severity::Moderate,
            RiskLabel::Safe | RiskLabel::Unknown => Severity::None,
        }
    }
}

impl Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    None,
    Moderate,
    High,
    Critical,
}

impl Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::None => "none",
            Severity::Moderate => "moderate",
            Severity::High => "high",
            Severity::Critical => "critical",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(RiskLabel::Toxic, Severity::Critical)]
    #[case(RiskLabel::Ineffective, Severity::High)]
    #[case(RiskLabel::AdjustDosage, Severity::Moderate)]
    #[case(RiskLabel::Safe, Severity::None)]
    #[case(RiskLabel::Unknown, Severity::None)]
    fn test_severity(#[case] label: RiskLabel, #[case] expected: Severity) {
        assert_eq!(label.severity(), expected);
    }

    #[rstest]
    fn test_serialized_labels() {
        assert_eq!(
            serde_json::to_string(&RiskLabel::AdjustDosage).unwrap(),
            "\"Adjust Dosage\""
        );
        assert_eq!(serde_json::to_string(&Severity::Critical).unwrap(), "\"critical\"");
        assert_eq!(RiskLabel::AdjustDosage.to_string(), "Adjust Dosage");
    }
}
