//! Core of the Checkgu lesson-plan dashboard.
//!
//! The centre of the crate is [`docx::DocumentPackageBuilder`], which turns a
//! completed [`LessonPlanRecord`] into a downloadable `.docx` package. Around
//! it sit typed in-memory record stores for the dashboard's entities, the
//! services that operate on them, and a simulated Google Drive export.

pub mod config;
pub mod docx;
pub mod error;
pub mod i18n;
pub mod model;
pub mod services;
pub mod store;
pub mod telemetry;

pub use config::{load_config, Config};
pub use docx::{CancellationFlag, DocumentPackageBuilder, DownloadArtifact, DOCX_MIME_TYPE};
pub use error::{
    CheckguError, ConfigError, DocxError, DriveError, Result, ServiceError, StoreError,
};
pub use model::{LessonPlanRecord, LessonPlanStatus, Placeholders};
pub use services::{Dashboard, DriveClient, LessonPlanService};
pub use store::{InMemoryStore, Record, RecordStore};
pub use telemetry::init_logging;
