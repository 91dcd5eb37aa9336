use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ModelError {
    #[error("Not a target pharmacogene: {0}")]
    UnknownGene(String),

    #[error("Diplotype must have exactly two '/'-separated alleles: {0}")]
    InvalidDiplotype(String),

    #[error("Not a metabolizer phenotype label: {0}")]
    UnknownPhenotype(String),
}

pub type ModelResult<T> = std::result::Result<T, ModelError>;
