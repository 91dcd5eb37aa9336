use thiserror::Error;

use prx_vcf::VcfValidationError;

#[derive(Error, Debug, PartialEq)]
pub enum AnalysisError {
    #[error(transparent)]
    Validation(#[from] VcfValidationError),
    #[error("No pharmacogenomic variants detected")]
    NoVariants,
    #[error("No drug requested")]
    NoDrugs,
    #[error("Unsupported drug: {0}")]
    UnsupportedDrug(String),
}

pub type AnalysisResult<T> = std::result::Result<T, AnalysisError>;
