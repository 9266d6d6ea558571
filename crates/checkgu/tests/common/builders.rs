//! Builder for lesson-plan test records.

#![allow(dead_code)]

use checkgu::{LessonPlanRecord, LessonPlanStatus};

pub struct LessonPlanBuilder {
    record: LessonPlanRecord,
}

impl LessonPlanBuilder {
    /// A completed plan with subject and grade set.
    pub fn new() -> Self {
        let mut record = LessonPlanRecord::new("Lesson.docx", "2024-01-15T10:00:00Z");
        record.id = 1;
        record.status = LessonPlanStatus::Completed;
        record.subject = Some("Mathematics".to_string());
        record.grade = Some("5".to_string());
        Self { record }
    }

    pub fn id(mut self, id: u32) -> Self {
        self.record.id = id;
        self
    }

    pub fn file_name(mut self, name: &str) -> Self {
        self.record.file_name = name.to_string();
        self
    }

    pub fn subject(mut self, subject: Option<&str>) -> Self {
        self.record.subject = subject.map(str::to_string);
        self
    }

    pub fn grade(mut self, grade: Option<&str>) -> Self {
        self.record.grade = grade.map(str::to_string);
        self
    }

    pub fn upload_date(mut self, date: &str) -> Self {
        self.record.upload_date = date.to_string();
        self
    }

    pub fn status(mut self, status: LessonPlanStatus) -> Self {
        self.record.status = status;
        self
    }

    pub fn placeholder(mut self, key: &str, value: &str) -> Self {
        self.record.placeholders.insert(key, value);
        self
    }

    pub fn build(self) -> LessonPlanRecord {
        self.record
    }
}

impl Default for LessonPlanBuilder {
    fn default() -> Self {
        Self::new()
    }
}
