use std::path::PathBuf;
use thiserror::Error;

use crate::model::LessonPlanStatus;

#[derive(Error, Debug)]
pub enum CheckguError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Document error: {0}")]
    Docx(#[from] DocxError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Drive error: {0}")]
    Drive(#[from] DriveError),

    #[error("Service error: {0}")]
    Service(#[from] ServiceError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("Config validation failed: {message}")]
    Validation { message: String },

    #[error("Schema validation failed: {errors}")]
    SchemaValidation { errors: String },
}

/// Failures of [`crate::docx::DocumentPackageBuilder`].
///
/// A failed build never yields a partial buffer.
#[derive(Error, Debug)]
pub enum DocxError {
    /// The record has not finished processing. Retry once it is completed.
    #[error("Lesson plan is not ready for download (status: {status})")]
    NotReady { status: LessonPlanStatus },

    /// The record has a blank file name. Not retryable with the same input.
    #[error("Lesson plan file name is empty")]
    EmptyFileName,

    /// Serialization or compression failed. Safe to retry.
    #[error("Failed to package DOCX: {0}")]
    Packaging(String),

    #[error("DOCX generation was cancelled")]
    Cancelled,
}

impl DocxError {
    /// Whether retrying with the same record can succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, DocxError::NotReady { .. } | DocxError::Packaging(_))
    }
}

impl From<zip::result::ZipError> for DocxError {
    fn from(e: zip::result::ZipError) -> Self {
        DocxError::Packaging(e.to_string())
    }
}

impl From<std::io::Error> for DocxError {
    fn from(e: std::io::Error) -> Self {
        DocxError::Packaging(e.to_string())
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: u32 },

    #[error("No identifiers left for {kind}: highest id is {max}")]
    IdsExhausted { kind: &'static str, max: u32 },

    #[error("Failed to parse seed data for {kind}: {source}")]
    Seed {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum DriveError {
    #[error("Google Drive not connected")]
    NotConnected,

    #[error("Cannot export a file without a name")]
    EmptyFileName,

    #[error("Folder name must not be empty")]
    EmptyFolderName,
}

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Docx(#[from] DocxError),

    #[error(transparent)]
    Drive(#[from] DriveError),
}

pub type Result<T> = std::result::Result<T, CheckguError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_ready_message_names_status() {
        let err = DocxError::NotReady {
            status: LessonPlanStatus::Processing,
        };
        assert_eq!(
            err.to_string(),
            "Lesson plan is not ready for download (status: processing)"
        );
    }

    #[test]
    fn test_retryable_kinds() {
        assert!(DocxError::Packaging("oom".to_string()).is_retryable());
        assert!(DocxError::NotReady {
            status: LessonPlanStatus::Uploading
        }
        .is_retryable());
        assert!(!DocxError::EmptyFileName.is_retryable());
        assert!(!DocxError::Cancelled.is_retryable());
    }

    #[test]
    fn test_io_error_keeps_cause_message() {
        let io = std::io::Error::new(std::io::ErrorKind::OutOfMemory, "allocation failed");
        let err: DocxError = io.into();
        assert!(err.to_string().contains("allocation failed"));
    }
}
