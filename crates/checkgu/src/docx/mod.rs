//! DOCX generation for lesson plans.
//!
//! [`DocumentPackageBuilder`] assembles a minimal Office Open XML
//! WordprocessingML package in memory: content types, package and document
//! relationships, styles and the document body, zipped with DEFLATE.

pub mod escape;
pub mod inspect;
pub mod parts;

use std::io::{Cursor, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, info_span, warn};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::config::DocxConfig;
use crate::error::DocxError;
use crate::model::LessonPlanRecord;

pub use escape::escape_xml;
pub use inspect::{read_document_text, read_package, PackageContents};
pub use parts::PACKAGE_PARTS;

pub const DOCX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

pub const DOCX_EXTENSION: &str = ".docx";

pub const MAX_COMPRESSION_LEVEL: i64 = 9;

/// Cooperative cancellation shared between a caller and a running build.
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag(Arc<AtomicBool>);

impl CancellationFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), DocxError> {
        if self.is_cancelled() {
            Err(DocxError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// A generated document ready to be offered as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadArtifact {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Download name for a lesson plan: the file name with `.docx` appended
/// unless it already ends in it (case-insensitively).
pub fn suggested_file_name(file_name: &str) -> String {
    let trimmed = file_name.trim();
    if trimmed.to_ascii_lowercase().ends_with(DOCX_EXTENSION) {
        trimmed.to_string()
    } else {
        format!("{}{}", trimmed, DOCX_EXTENSION)
    }
}

/// Builds `.docx` packages from lesson-plan records.
///
/// Stateless apart from its options; a single builder may be shared across
/// threads and used concurrently.
#[derive(Debug, Clone)]
pub struct DocumentPackageBuilder {
    compression_level: i64,
    lesson_content: String,
    attribution: String,
}

impl Default for DocumentPackageBuilder {
    fn default() -> Self {
        Self::from_config(&DocxConfig::default())
    }
}

impl DocumentPackageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &DocxConfig) -> Self {
        Self {
            compression_level: config.compression_level,
            lesson_content: config.lesson_content.clone(),
            attribution: config.attribution.clone(),
        }
    }

    /// Compression level, 0 (stored) through 9 (DEFLATE). Affects size only,
    /// never the extracted content.
    pub fn with_compression_level(mut self, level: i64) -> Self {
        self.compression_level = level;
        self
    }

    pub fn with_lesson_content(mut self, content: impl Into<String>) -> Self {
        self.lesson_content = content.into();
        self
    }

    pub fn with_attribution(mut self, attribution: impl Into<String>) -> Self {
        self.attribution = attribution.into();
        self
    }

    pub fn compression_level(&self) -> i64 {
        self.compression_level
    }

    /// Builds the package bytes for a completed lesson plan.
    pub fn build_package(&self, record: &LessonPlanRecord) -> Result<Vec<u8>, DocxError> {
        self.build_package_with_cancel(record, &CancellationFlag::new())
    }

    /// Like [`build_package`](Self::build_package), checking `cancel` between
    /// parts. Returns [`DocxError::Cancelled`] and no bytes once it is set.
    pub fn build_package_with_cancel(
        &self,
        record: &LessonPlanRecord,
        cancel: &CancellationFlag,
    ) -> Result<Vec<u8>, DocxError> {
        let _span = info_span!(
            "docx.build_package",
            record_id = record.id,
            placeholders = record.placeholders.len()
        )
        .entered();

        if !record.is_completed() {
            return Err(DocxError::NotReady {
                status: record.status,
            });
        }
        if record.file_name.trim().is_empty() {
            return Err(DocxError::EmptyFileName);
        }
        if !(0..=MAX_COMPRESSION_LEVEL).contains(&self.compression_level) {
            return Err(DocxError::Packaging(format!(
                "Invalid compression level {} (expected 0-{})",
                self.compression_level, MAX_COMPRESSION_LEVEL
            )));
        }

        let document = parts::document_xml(record, &self.lesson_content, &self.attribution);
        let entries: [(&str, &str); 5] = [
            (parts::CONTENT_TYPES_PATH, parts::CONTENT_TYPES_XML),
            (parts::ROOT_RELS_PATH, parts::ROOT_RELS_XML),
            (parts::DOCUMENT_RELS_PATH, parts::DOCUMENT_RELS_XML),
            (parts::DOCUMENT_PATH, &document),
            (parts::STYLES_PATH, parts::STYLES_XML),
        ];

        let bytes = self.write_archive(&entries, cancel).map_err(|e| {
            if !matches!(e, DocxError::Cancelled) {
                warn!(record_id = record.id, error = %e, "DOCX packaging failed");
            }
            e
        })?;

        debug!(
            record_id = record.id,
            size = bytes.len(),
            "Built lesson plan package"
        );
        Ok(bytes)
    }

    /// Level 0 writes entries uncompressed. DEFLATE itself only takes 1-9.
    fn file_options(&self) -> SimpleFileOptions {
        if self.compression_level == 0 {
            SimpleFileOptions::default().compression_method(CompressionMethod::Stored)
        } else {
            SimpleFileOptions::default()
                .compression_method(CompressionMethod::Deflated)
                .compression_level(Some(self.compression_level))
        }
    }

    fn write_archive(
        &self,
        entries: &[(&str, &str)],
        cancel: &CancellationFlag,
    ) -> Result<Vec<u8>, DocxError> {
        let options = self.file_options();

        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (path, content) in entries {
            cancel.check()?;
            writer.start_file(*path, options)?;
            writer.write_all(content.as_bytes())?;
        }
        cancel.check()?;

        let cursor = writer.finish()?;
        Ok(cursor.into_inner())
    }

    /// Builds the package and pairs it with its download name and MIME type.
    pub fn download_artifact(
        &self,
        record: &LessonPlanRecord,
    ) -> Result<DownloadArtifact, DocxError> {
        let bytes = self.build_package(record)?;
        Ok(DownloadArtifact {
            file_name: suggested_file_name(&record.file_name),
            mime_type: DOCX_MIME_TYPE,
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LessonPlanStatus;

    fn completed(file_name: &str) -> LessonPlanRecord {
        let mut record = LessonPlanRecord::new(file_name, "2024-01-15T10:00:00Z");
        record.id = 1;
        record.status = LessonPlanStatus::Completed;
        record
    }

    #[test]
    fn test_suggested_file_name() {
        assert_eq!(suggested_file_name("Week 1"), "Week 1.docx");
        assert_eq!(suggested_file_name("Week 1.docx"), "Week 1.docx");
        assert_eq!(suggested_file_name("Week 1.DOCX"), "Week 1.DOCX");
        assert_eq!(suggested_file_name("notes.doc"), "notes.doc.docx");
    }

    #[test]
    fn test_rejects_incomplete_statuses() {
        let builder = DocumentPackageBuilder::new();
        for status in [
            LessonPlanStatus::Pending,
            LessonPlanStatus::Uploading,
            LessonPlanStatus::Processing,
            LessonPlanStatus::Error,
        ] {
            let mut record = completed("a.docx");
            record.status = status;
            match builder.build_package(&record) {
                Err(DocxError::NotReady { status: s }) => assert_eq!(s, status),
                other => panic!("Expected NotReady for {}, got {:?}", status, other),
            }
        }
    }

    #[test]
    fn test_status_checked_before_file_name() {
        let mut record = completed("");
        record.status = LessonPlanStatus::Processing;
        assert!(matches!(
            DocumentPackageBuilder::new().build_package(&record),
            Err(DocxError::NotReady { .. })
        ));
    }

    #[test]
    fn test_blank_file_name_rejected() {
        let builder = DocumentPackageBuilder::new();
        assert!(matches!(
            builder.build_package(&completed("")),
            Err(DocxError::EmptyFileName)
        ));
        assert!(matches!(
            builder.build_package(&completed("   ")),
            Err(DocxError::EmptyFileName)
        ));
    }

    #[test]
    fn test_invalid_compression_level_is_packaging_error() {
        let builder = DocumentPackageBuilder::new().with_compression_level(42);
        match builder.build_package(&completed("a.docx")) {
            Err(DocxError::Packaging(msg)) => assert!(msg.contains("42")),
            other => panic!("Expected Packaging error, got {:?}", other),
        }
    }

    #[test]
    fn test_cancelled_build_returns_no_bytes() {
        let cancel = CancellationFlag::new();
        cancel.cancel();
        let result = DocumentPackageBuilder::new().build_package_with_cancel(&completed("a"), &cancel);
        assert!(matches!(result, Err(DocxError::Cancelled)));
    }

    #[test]
    fn test_every_level_builds_with_matching_method() {
        let record = completed("a.docx");
        for level in 0..=MAX_COMPRESSION_LEVEL {
            let bytes = DocumentPackageBuilder::new()
                .with_compression_level(level)
                .build_package(&record)
                .unwrap_or_else(|e| panic!("level {} failed: {}", level, e));

            let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
            let expected = if level == 0 {
                CompressionMethod::Stored
            } else {
                CompressionMethod::Deflated
            };
            for index in 0..archive.len() {
                assert_eq!(archive.by_index(index).unwrap().compression(), expected);
            }
        }
    }

    #[test]
    fn test_output_is_zip() {
        let bytes = DocumentPackageBuilder::new()
            .build_package(&completed("a.docx"))
            .unwrap();
        assert_eq!(&bytes[..4], b"PK\x03\x04");
    }

    #[test]
    fn test_download_artifact_metadata() {
        let artifact = DocumentPackageBuilder::new()
            .download_artifact(&completed("Science Week 2"))
            .unwrap();
        assert_eq!(artifact.file_name, "Science Week 2.docx");
        assert_eq!(artifact.mime_type, DOCX_MIME_TYPE);
        assert!(!artifact.bytes.is_empty());
    }
}
