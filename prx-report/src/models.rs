//! Report shapes. Field names are the JSON contract consumed by clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use prx_core::models::{Gene, Phenotype, VariantRecord};
use prx_risk::{RiskLabel, Severity};

/// Diplotype shown when the primary gene was not covered by the input.
pub const UNKNOWN_DIPLOTYPE: &str = "Unknown";

///
/// Who and when a report is for. Kept out of the inference so the same input
/// and context always give the same report.
///
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RequestContext {
    pub patient_id: String,
    pub timestamp: DateTime<Utc>,
}

impl RequestContext {
    pub fn new(patient_id: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        RequestContext {
            patient_id: patient_id.into(),
            timestamp,
        }
    }

    ///
    /// Fresh context: random v4 patient id, current UTC time.
    ///
    pub fn generate() -> Self {
        RequestContext::for_patient(Uuid::new_v4().to_string())
    }

    ///
    /// Context for a known patient, stamped with the current UTC time.
    ///
    pub fn for_patient(patient_id: impl Into<String>) -> Self {
        RequestContext::new(patient_id, Utc::now())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RiskAssessment {
    pub risk_label: RiskLabel,
    pub confidence_score: f64,
    pub severity: Severity,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PharmacogenomicProfile {
    pub primary_gene: Gene,
    pub diplotype: String,
    pub phenotype: Phenotype,
    pub detected_variants: Vec<VariantRecord>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClinicalRecommendation {
    pub guideline: String,
    pub action: String,
    pub alternatives: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Explanation {
    pub summary: String,
    pub mechanism: String,
    pub citations: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QualityMetrics {
    pub vcf_parsing_success: bool,
    pub variants_detected: usize,
    pub genes_identified: Vec<Gene>,
}

///
/// The full report for one drug.
///
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DrugAssessment {
    pub patient_id: String,
    pub drug: String,
    pub timestamp: DateTime<Utc>,
    pub risk_assessment: RiskAssessment,
    pub pharmacogenomic_profile: PharmacogenomicProfile,
    pub clinical_recommendation: ClinicalRecommendation,
    pub llm_generated_explanation: Explanation,
    pub quality_metrics: QualityMetrics,
}
