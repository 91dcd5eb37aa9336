use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use prx_core::models::{Gene, Phenotype, VariantRecord};
use prx_phenotype::{classify_phenotype, infer_diplotype};
use prx_risk::{RiskLabel, alternatives, drug_rule, recommendation};
use prx_vcf::{decode_lossy, extract_variants_from_str, validate_vcf};

use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, AnalysisResult};
use crate::explanation::{
    ExplanationContext, ExplanationProvider, TemplateExplainer, fallback_explanation,
};
use crate::models::{
    ClinicalRecommendation, DrugAssessment, PharmacogenomicProfile, QualityMetrics,
    RequestContext, RiskAssessment, UNKNOWN_DIPLOTYPE,
};

///
/// Split a comma separated drug argument into upper-cased names, dropping blanks.
///
pub fn parse_drug_list(drugs: &str) -> Vec<String> {
    drugs
        .split(',')
        .map(|d| d.trim().to_uppercase())
        .filter(|d| !d.is_empty())
        .collect()
}

///
/// Sorted, de-duplicated genes present in a variant set.
///
pub fn genes_identified(variants: &[VariantRecord]) -> Vec<Gene> {
    variants
        .iter()
        .map(|v| v.gene)
        .collect::<BTreeSet<Gene>>()
        .into_iter()
        .collect()
}

///
/// Runs the whole pipeline: validation, extraction, diplotype and phenotype
/// inference, risk lookup and report assembly.
///
pub struct Analyzer {
    config: AnalysisConfig,
    explainer: Box<dyn ExplanationProvider>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Analyzer::new(AnalysisConfig::default())
    }
}

impl Analyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Analyzer {
            config,
            explainer: Box::new(TemplateExplainer),
        }
    }

    pub fn with_explainer(mut self, explainer: Box<dyn ExplanationProvider>) -> Self {
        self.explainer = explainer;
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    ///
    /// Analyze an uploaded variant file for one or more drugs.
    ///
    /// # Arguments
    /// - file_name: name of the upload, used for the extension check
    /// - bytes: raw file content
    /// - drugs: comma separated drug names
    /// - context: patient id and timestamp stamped on every report
    ///
    /// # Returns
    /// One assessment per requested drug, in request order.
    ///
    pub fn analyze(
        &self,
        file_name: &str,
        bytes: &[u8],
        drugs: &str,
        context: &RequestContext,
    ) -> AnalysisResult<Vec<DrugAssessment>> {
        let content = decode_lossy(bytes);
        validate_vcf(file_name, &content, &self.config.validation)?;

        let variants = extract_variants_from_str(&content);
        if variants.is_empty() {
            return Err(AnalysisError::NoVariants);
        }

        let drugs = parse_drug_list(drugs);
        if drugs.is_empty() {
            return Err(AnalysisError::NoDrugs);
        }

        info!(
            file_name,
            variants = variants.len(),
            drugs = drugs.len(),
            "analyzing variant file"
        );

        drugs
            .iter()
            .map(|drug| self.assess_drug(&variants, drug, context))
            .collect()
    }

    ///
    /// Build the report for a single drug from already extracted variants.
    ///
    /// A drug whose gene never appears in `variants` is reported as
    /// `Unknown`/`Indeterminate` rather than assumed wild type.
    ///
    pub fn assess_drug(
        &self,
        variants: &[VariantRecord],
        drug: &str,
        context: &RequestContext,
    ) -> AnalysisResult<DrugAssessment> {
        let rule = drug_rule(drug).ok_or_else(|| AnalysisError::UnsupportedDrug(drug.to_string()))?;
        let gene = rule.gene;
        let genes = genes_identified(variants);

        let (diplotype, phenotype, risk) = if genes.contains(&gene) {
            let diplotype = infer_diplotype(variants, gene);
            let phenotype = classify_phenotype(gene, &diplotype);
            (diplotype.to_string(), phenotype, rule.risk_for(phenotype))
        } else {
            debug!(%gene, drug = rule.drug, "gene not covered by input");
            (
                UNKNOWN_DIPLOTYPE.to_string(),
                Phenotype::Indeterminate,
                RiskLabel::Unknown,
            )
        };

        let gene_variants: Vec<VariantRecord> =
            variants.iter().filter(|v| v.gene == gene).cloned().collect();

        let explanation_context = ExplanationContext {
            gene,
            phenotype,
            drug: rule.drug,
            variants: &gene_variants,
        };
        let explanation = match self.explainer.explain(&explanation_context) {
            Ok(explanation) => explanation,
            Err(err) => {
                warn!("explanation provider failed, using fallback: {:#}", err);
                fallback_explanation(&explanation_context)
            }
        };

        Ok(DrugAssessment {
            patient_id: context.patient_id.clone(),
            drug: rule.drug.to_string(),
            timestamp: context.timestamp,
            risk_assessment: RiskAssessment {
                risk_label: risk,
                confidence_score: self.config.confidence_score,
                severity: risk.severity(),
            },
            pharmacogenomic_profile: PharmacogenomicProfile {
                primary_gene: gene,
                diplotype,
                phenotype,
                detected_variants: gene_variants,
            },
            clinical_recommendation: ClinicalRecommendation {
                guideline: self.config.guideline.clone(),
                action: recommendation(risk).to_string(),
                alternatives: alternatives(rule.drug).iter().map(|a| a.to_string()).collect(),
            },
            llm_generated_explanation: explanation,
            quality_metrics: QualityMetrics {
                vcf_parsing_success: true,
                variants_detected: variants.len(),
                genes_identified: genes,
            },
        })
    }
}
