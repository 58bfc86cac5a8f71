//! Upload boundary: file descriptors and extension validation.
//!
//! Invalid uploads are rejected here with a user-facing message; a batch
//! that fails validation never reaches an analysis provider.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Accepted audio container extensions, lowercase.
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["wav", "mp3", "m4a"];

/// Descriptor of one uploaded audio file. The engine never sees file
/// contents, only the descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub name: String,
    #[serde(default)]
    pub size: u64,
}

/// Lowercased final dot-suffix of a file name, if any.
pub fn extension(name: &str) -> Option<String> {
    name.rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
}

pub fn is_allowed(name: &str) -> bool {
    extension(name).is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    EmptyBatch,
    InvalidFileType { name: String },
}

impl fmt::Display for IntakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntakeError::EmptyBatch => write!(f, "No files selected"),
            IntakeError::InvalidFileType { name } => write!(
                f,
                "'{name}' is not a supported audio file (allowed: .wav, .mp3, .m4a)"
            ),
        }
    }
}

impl std::error::Error for IntakeError {}

/// Validate a whole upload batch; the first offending file aborts.
pub fn validate_batch(files: &[FileDescriptor]) -> Result<(), IntakeError> {
    if files.is_empty() {
        return Err(IntakeError::EmptyBatch);
    }
    for file in files {
        if !is_allowed(&file.name) {
            return Err(IntakeError::InvalidFileType {
                name: file.name.clone(),
            });
        }
    }
    Ok(())
}
