use thiserror::Error;

/// Reasons an uploaded file is rejected before extraction.
#[derive(Error, Debug, PartialEq)]
pub enum VcfValidationError {
    /// File name does not end with an accepted extension.
    #[error("Only {allowed} files allowed, got: {file_name}")]
    InvalidExtension { file_name: String, allowed: String },

    /// No `##fileformat=VCF` header anywhere in the content.
    #[error("Invalid VCF format: missing ##fileformat=VCF header")]
    MissingFileFormatHeader,

    /// Decoded content is larger than the configured limit.
    #[error("File exceeds size limit: {size} bytes (limit {limit} bytes)")]
    FileTooLarge { size: usize, limit: usize },
}

/// Result type alias for validation.
pub type ValidationResult<T> = std::result::Result<T, VcfValidationError>;
