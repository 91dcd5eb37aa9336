use crate::label::RiskLabel;
use crate::rules::drug_rule;

/// Guideline body the tables follow.
pub const GUIDELINE: &str = "CPIC";

/// Advice for risk labels missing from the advice table.
pub const FALLBACK_ADVICE: &str = "Consult clinical guidelines";

const ALTERNATIVES: &[(&str, &[&str])] = &[
    ("CODEINE", &["Morphine", "Non-opioid analgesics"]),
    ("WARFARIN", &["Direct Oral Anticoagulants"]),
    ("CLOPIDOGREL", &["Prasugrel", "Ticagrelor"]),
];

///
/// Clinical action for a risk label.
///
pub fn recommendation(risk: RiskLabel) -> &'static str {
    match risk {
        RiskLabel::Ineffective => "Avoid drug due to lack of therapeutic effect.",
        RiskLabel::Toxic => "Avoid drug due to toxicity risk.",
        RiskLabel::AdjustDosage => "Dose adjustment recommended per CPIC guidelines.",
        RiskLabel::Safe => "Standard dosing recommended.",
        RiskLabel::Unknown => "Insufficient pharmacogenomic data.",
    }
}

///
/// Advice for a free-text risk label, falling back to [`FALLBACK_ADVICE`].
///
pub fn recommendation_for_label(label: &str) -> &'static str {
    [
        RiskLabel::Safe,
        RiskLabel::AdjustDosage,
        RiskLabel::Toxic,
        RiskLabel::Ineffective,
        RiskLabel::Unknown,
    ]
    .into_iter()
    .find(|risk| risk.label() == label)
    .map(recommendation)
    .unwrap_or(FALLBACK_ADVICE)
}

///
/// Alternative drugs to consider, empty when none are listed.
///
pub fn alternatives(drug: &str) -> &'static [&'static str] {
    let Some(rule) = drug_rule(drug) else {
        return &[];
    };

    ALTERNATIVES
        .iter()
        .find(|(name, _)| *name == rule.drug)
        .map(|(_, alts)| *alts)
        .unwrap_or(&[])
}
