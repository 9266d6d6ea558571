//! Services over the record stores, and the wiring that seeds them.

pub mod classes;
pub mod drive;
pub mod lesson_plans;
pub mod schedules;
pub mod settings;
pub mod templates;

use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::docx::DocumentPackageBuilder;
use crate::error::StoreError;
use crate::model::{
    LessonPlanRecord, SchoolCalendar, SchoolClass, Subject, TeachingSchedule, Template,
    UserSettings,
};
use crate::store::InMemoryStore;

pub use classes::ClassService;
pub use drive::{ConnectionStatus, DriveClient, DriveFile, DriveFolder, ExportedFile};
pub use lesson_plans::LessonPlanService;
pub use schedules::ScheduleService;
pub use settings::SettingsService;
pub use templates::TemplateService;

const SEED_LESSON_PLANS: &str = include_str!("../../data/lesson_plans.json");
const SEED_CLASSES: &str = include_str!("../../data/classes.json");
const SEED_SUBJECTS: &str = include_str!("../../data/subjects.json");
const SEED_TEMPLATES: &str = include_str!("../../data/templates.json");
const SEED_SCHEDULES: &str = include_str!("../../data/teaching_schedules.json");
const SEED_CALENDARS: &str = include_str!("../../data/calendars.json");
const SEED_SETTINGS: &str = include_str!("../../data/user_settings.json");

/// Every service of the dashboard, sharing one set of stores.
pub struct Dashboard {
    pub lesson_plans: LessonPlanService,
    pub classes: ClassService,
    pub schedules: ScheduleService,
    pub templates: TemplateService,
    pub settings: SettingsService,
    pub subjects: Arc<InMemoryStore<Subject>>,
    pub calendars: Arc<InMemoryStore<SchoolCalendar>>,
    pub drive: DriveClient,
}

impl Dashboard {
    /// Empty stores.
    pub fn new(config: &Config) -> Self {
        Self::with_stores(config, Stores::default())
    }

    /// Stores pre-filled with the bundled sample data.
    pub fn seeded(config: &Config) -> Result<Self, StoreError> {
        let stores = Stores {
            lesson_plans: Arc::new(InMemoryStore::from_json(SEED_LESSON_PLANS)?),
            classes: Arc::new(InMemoryStore::from_json(SEED_CLASSES)?),
            subjects: Arc::new(InMemoryStore::from_json(SEED_SUBJECTS)?),
            templates: Arc::new(InMemoryStore::from_json(SEED_TEMPLATES)?),
            schedules: Arc::new(InMemoryStore::from_json(SEED_SCHEDULES)?),
            calendars: Arc::new(InMemoryStore::from_json(SEED_CALENDARS)?),
            settings: Arc::new(InMemoryStore::from_json(SEED_SETTINGS)?),
        };
        info!(
            lesson_plans = stores.lesson_plans.len(),
            classes = stores.classes.len(),
            templates = stores.templates.len(),
            "Loaded sample data"
        );
        Ok(Self::with_stores(config, stores))
    }

    fn with_stores(config: &Config, stores: Stores) -> Self {
        Self {
            lesson_plans: LessonPlanService::new(
                stores.lesson_plans,
                DocumentPackageBuilder::from_config(&config.docx),
            ),
            classes: ClassService::new(stores.classes.clone()),
            schedules: ScheduleService::new(stores.schedules, stores.classes),
            templates: TemplateService::new(stores.templates),
            settings: SettingsService::new(stores.settings),
            subjects: stores.subjects,
            calendars: stores.calendars,
            drive: DriveClient::new(config.drive.clone()),
        }
    }
}

#[derive(Default)]
struct Stores {
    lesson_plans: Arc<InMemoryStore<LessonPlanRecord>>,
    classes: Arc<InMemoryStore<SchoolClass>>,
    subjects: Arc<InMemoryStore<Subject>>,
    templates: Arc<InMemoryStore<Template>>,
    schedules: Arc<InMemoryStore<TeachingSchedule>>,
    calendars: Arc<InMemoryStore<SchoolCalendar>>,
    settings: Arc<InMemoryStore<UserSettings>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RecordStore;

    #[test]
    fn test_seed_data_parses() {
        let dashboard = Dashboard::seeded(&Config::default()).unwrap();
        assert!(!dashboard.lesson_plans.list().is_empty());
        assert!(!dashboard.classes.list().is_empty());
        assert!(!dashboard.templates.list().is_empty());
        assert!(!dashboard.schedules.list().is_empty());
        assert!(!dashboard.subjects.list().is_empty());
        assert!(!dashboard.calendars.list().is_empty());
    }

    #[test]
    fn test_new_dashboard_is_empty() {
        let dashboard = Dashboard::new(&Config::default());
        assert!(dashboard.lesson_plans.list().is_empty());
        assert!(dashboard.subjects.is_empty());
    }

    #[test]
    fn test_seeded_completed_plans_download() {
        let dashboard = Dashboard::seeded(&Config::default()).unwrap();
        for plan in dashboard.lesson_plans.list() {
            let result = dashboard.lesson_plans.download(plan.id);
            assert_eq!(result.is_ok(), plan.is_completed(), "plan {}", plan.id);
        }
    }
}
