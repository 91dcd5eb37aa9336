use prx_core::models::{Gene, Phenotype};

use crate::label::RiskLabel;

use Phenotype::{Intermediate as IM, Normal as NM, Poor as PM, UltraRapid as UM};
use RiskLabel::{AdjustDosage, Ineffective, Safe, Toxic};

///
/// How one drug's risk depends on the metabolizer phenotype of one gene.
///
#[derive(Debug, PartialEq, Eq)]
pub struct DrugRule {
    pub drug: &'static str,
    pub gene: Gene,
    pub risk_map: &'static [(Phenotype, RiskLabel)],
}

impl DrugRule {
    ///
    /// Risk for a phenotype; phenotypes without an entry are `Unknown`.
    ///
    pub fn risk_for(&self, phenotype: Phenotype) -> RiskLabel {
        self.risk_map
            .iter()
            .find(|(p, _)| *p == phenotype)
            .map(|(_, risk)| *risk)
            .unwrap_or(RiskLabel::Unknown)
    }
}

pub static DRUG_RULES: &[DrugRule] = &[
    DrugRule {
        drug: "CODEINE",
        gene: Gene::Cyp2d6,
        risk_map: &[(PM, Ineffective), (IM, AdjustDosage), (NM, Safe), (UM, Toxic)],
    },
    DrugRule {
        drug: "WARFARIN",
        gene: Gene::Cyp2c9,
        risk_map: &[(PM, AdjustDosage), (IM, AdjustDosage), (NM, Safe)],
    },
    DrugRule {
        drug: "CLOPIDOGREL",
        gene: Gene::Cyp2c19,
        risk_map: &[(PM, Ineffective), (IM, AdjustDosage), (NM, Safe), (UM, Safe)],
    },
    DrugRule {
        drug: "SIMVASTATIN",
        gene: Gene::Slco1b1,
        risk_map: &[(PM, Toxic), (IM, AdjustDosage), (NM, Safe)],
    },
    DrugRule {
        drug: "AZATHIOPRINE",
        gene: Gene::Tpmt,
        risk_map: &[(PM, Toxic), (IM, AdjustDosage), (NM, Safe)],
    },
    DrugRule {
        drug: "FLUOROURACIL",
        gene: Gene::Dpyd,
        risk_map: &[(PM, Toxic), (IM, AdjustDosage), (NM, Safe)],
    },
];

///
/// Look up a drug's rule, ignoring case and surrounding whitespace.
///
pub fn drug_rule(drug: &str) -> Option<&'static DrugRule> {
    let drug = drug.trim();
    DRUG_RULES.iter().find(|rule| rule.drug.eq_ignore_ascii_case(drug))
}

///
/// A risk label together with the rule that produced it.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskLookup {
    pub risk_label: RiskLabel,
    pub rule: &'static DrugRule,
}

///
/// Risk of `drug` for a patient with `phenotype`.
///
/// # Returns
/// `None` when the drug is not in the rule table. A known drug always yields a
/// lookup, with `RiskLabel::Unknown` when its risk map has no entry for the phenotype.
///
pub fn assess_drug_risk(drug: &str, phenotype: Phenotype) -> Option<RiskLookup> {
    let rule = drug_rule(drug)?;
    Some(RiskLookup {
        risk_label: rule.risk_for(phenotype),
        rule,
    })
}
