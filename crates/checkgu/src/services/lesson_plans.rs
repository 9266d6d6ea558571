use std::sync::Arc;

use tracing::{info, info_span, warn};

use crate::docx::{DocumentPackageBuilder, DownloadArtifact};
use crate::error::{DocxError, ServiceError, StoreError};
use crate::model::{LessonPlanRecord, LessonPlanStatus};
use crate::store::{Record, RecordStore};

use super::drive::{DriveClient, ExportedFile};

/// Lesson-plan CRUD plus document download and Drive export.
pub struct LessonPlanService {
    store: Arc<dyn RecordStore<LessonPlanRecord>>,
    builder: DocumentPackageBuilder,
}

impl LessonPlanService {
    pub fn new(
        store: Arc<dyn RecordStore<LessonPlanRecord>>,
        builder: DocumentPackageBuilder,
    ) -> Self {
        Self { store, builder }
    }

    pub fn list(&self) -> Vec<LessonPlanRecord> {
        self.store.list()
    }

    pub fn get(&self, id: u32) -> Option<LessonPlanRecord> {
        self.store.get(id)
    }

    /// Stores a new plan. Export bookkeeping always starts cleared.
    pub fn create(&self, mut plan: LessonPlanRecord) -> Result<LessonPlanRecord, StoreError> {
        plan.google_drive_exported = false;
        plan.google_drive_url.clear();
        plan.exported_at = None;
        self.store.create(plan)
    }

    pub fn update(
        &self,
        id: u32,
        mut apply: impl FnMut(&mut LessonPlanRecord),
    ) -> Result<LessonPlanRecord, StoreError> {
        self.store.update(id, &mut apply)
    }

    pub fn set_status(
        &self,
        id: u32,
        status: LessonPlanStatus,
    ) -> Result<LessonPlanRecord, StoreError> {
        self.update(id, |plan| plan.status = status)
    }

    pub fn delete(&self, id: u32) -> Result<LessonPlanRecord, StoreError> {
        self.store.delete(id)
    }

    pub fn by_status(&self, status: LessonPlanStatus) -> Vec<LessonPlanRecord> {
        self.store.find(&|plan| plan.status == status)
    }

    /// Case-insensitive match on file name, subject or grade.
    pub fn search(&self, query: &str) -> Vec<LessonPlanRecord> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.list();
        }
        self.store.find(&|plan| {
            let matches = |s: &str| s.to_lowercase().contains(&needle);
            matches(&plan.file_name)
                || plan.subject.as_deref().is_some_and(matches)
                || plan.grade.as_deref().is_some_and(matches)
        })
    }

    /// Generates the `.docx` download for a stored plan.
    pub fn download(&self, id: u32) -> Result<DownloadArtifact, ServiceError> {
        let _span = info_span!("lesson_plans.download", record_id = id).entered();

        let plan = self.store.get(id).ok_or(StoreError::NotFound {
            kind: LessonPlanRecord::KIND,
            id,
        })?;

        let artifact = self.builder.download_artifact(&plan).map_err(|e| {
            if let DocxError::NotReady { status } = &e {
                warn!(record_id = id, %status, "Download requested before processing finished");
            }
            e
        })?;

        info!(
            record_id = id,
            file_name = %artifact.file_name,
            size = artifact.bytes.len(),
            "Prepared lesson plan download"
        );
        Ok(artifact)
    }

    /// Exports a completed plan and records where it went.
    pub async fn export_to_drive(
        &self,
        id: u32,
        drive: &DriveClient,
    ) -> Result<(LessonPlanRecord, ExportedFile), ServiceError> {
        let plan = self.store.get(id).ok_or(StoreError::NotFound {
            kind: LessonPlanRecord::KIND,
            id,
        })?;
        if !plan.is_completed() {
            return Err(DocxError::NotReady {
                status: plan.status,
            }
            .into());
        }

        let exported = drive.export_file(&plan).await?;

        let url = exported.url.clone();
        let exported_at = exported.exported_at;
        let updated = self.update(id, |plan| {
            plan.google_drive_exported = true;
            plan.google_drive_url = url.clone();
            plan.exported_at = Some(exported_at);
        })?;

        info!(record_id = id, "Recorded Drive export");
        Ok((updated, exported))
    }

    /// Exports every completed plan that has not been exported yet.
    ///
    /// Stops at the first failure; plans exported before it keep their
    /// recorded export.
    pub async fn export_pending(
        &self,
        drive: &DriveClient,
    ) -> Result<Vec<ExportedFile>, ServiceError> {
        let pending = self
            .store
            .find(&|plan| plan.is_completed() && !plan.google_drive_exported);

        let mut exported = Vec::with_capacity(pending.len());
        for plan in pending {
            let (_, file) = self.export_to_drive(plan.id, drive).await?;
            exported.push(file);
        }
        info!(count = exported.len(), "Exported pending lesson plans");
        Ok(exported)
    }
}
