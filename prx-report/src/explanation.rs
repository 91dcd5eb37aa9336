use anyhow::Result;

use prx_core::models::{Gene, Phenotype, VariantRecord};

use crate::models::Explanation;

///
/// Everything an explanation provider gets to see about one assessment.
///
#[derive(Debug, Clone, Copy)]
pub struct ExplanationContext<'a> {
    pub gene: Gene,
    pub phenotype: Phenotype,
    pub drug: &'a str,
    pub variants: &'a [VariantRecord],
}

///
/// Source of the narrative explanation attached to a report. Implementations
/// may call out to an external text-generation service; a failure is never
/// fatal, the analyzer falls back to [`fallback_explanation`].
///
pub trait ExplanationProvider {
    fn explain(&self, context: &ExplanationContext<'_>) -> Result<Explanation>;
}

///
/// Offline provider that fills in a fixed template.
///
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateExplainer;

fn templated_summary(context: &ExplanationContext<'_>) -> String {
    format!(
        "{} affects metabolism of {}. Phenotype: {}.",
        context.gene, context.drug, context.phenotype
    )
}

impl ExplanationProvider for TemplateExplainer {
    fn explain(&self, context: &ExplanationContext<'_>) -> Result<Explanation> {
        Ok(Explanation {
            summary: templated_summary(context),
            mechanism: "Static explanation template.".to_string(),
            citations: vec!["CPIC guidelines".to_string()],
        })
    }
}

///
/// Explanation used when a provider fails.
///
pub fn fallback_explanation(context: &ExplanationContext<'_>) -> Explanation {
    Explanation {
        summary: templated_summary(context),
        mechanism: "Fallback explanation".to_string(),
        citations: vec!["CPIC guidelines".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_template_summary() {
        let context = ExplanationContext {
            gene: Gene::Cyp2c19,
            phenotype: Phenotype::UltraRapid,
            drug: "CLOPIDOGREL",
            variants: &[],
        };
        let explanation = TemplateExplainer.explain(&context).unwrap();

        assert_eq!(
            explanation.summary,
            "CYP2C19 affects metabolism of CLOPIDOGREL. Phenotype: UM."
        );
        assert_eq!(explanation.citations, vec!["CPIC guidelines"]);
        assert_eq!(fallback_explanation(&context).summary, explanation.summary);
    }
}
