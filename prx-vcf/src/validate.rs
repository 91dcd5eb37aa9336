use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_MAX_FILE_BYTES, FILEFORMAT_MARKER};
use crate::error::{ValidationResult, VcfValidationError};

///
/// Upload checks, each of which can be switched off.
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ValidationOptions {
    pub require_extension: bool,
    pub allowed_extensions: Vec<String>,
    pub require_fileformat_header: bool,
    /// UTF-8 bytes of decoded content; 0 disables the limit
    pub max_file_bytes: usize,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        ValidationOptions {
            require_extension: true,
            allowed_extensions: vec![".vcf".to_string(), ".vcf.gz".to_string()],
            require_fileformat_header: true,
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
        }
    }
}

impl ValidationOptions {
    ///
    /// Options with every check disabled.
    ///
    pub fn permissive() -> Self {
        ValidationOptions {
            require_extension: false,
            allowed_extensions: Vec::new(),
            require_fileformat_header: false,
            max_file_bytes: 0,
        }
    }
}

///
/// Check an upload before extraction: extension, then header, then size.
///
/// # Arguments
/// - file_name: name the file was uploaded or opened under
/// - content: decoded file content
/// - options: which checks to run
///
pub fn validate_vcf(
    file_name: &str,
    content: &str,
    options: &ValidationOptions,
) -> ValidationResult<()> {
    if options.require_extension
        && !options
            .allowed_extensions
            .iter()
            .any(|ext| file_name.ends_with(ext.as_str()))
    {
        return Err(VcfValidationError::InvalidExtension {
            file_name: file_name.to_string(),
            allowed: options.allowed_extensions.join(", "),
        });
    }

    if options.require_fileformat_header && !content.contains(FILEFORMAT_MARKER) {
        return Err(VcfValidationError::MissingFileFormatHeader);
    }

    if options.max_file_bytes > 0 && content.len() > options.max_file_bytes {
        return Err(VcfValidationError::FileTooLarge {
            size: content.len(),
            limit: options.max_file_bytes,
        });
    }

    Ok(())
}
