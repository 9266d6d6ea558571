use std::sync::Arc;

use crate::error::StoreError;
use crate::model::{DayOfWeek, SchoolClass, TeachingSchedule};
use crate::store::RecordStore;

/// Weekly teaching slots, queryable by class, subject, day and class level.
pub struct ScheduleService {
    store: Arc<dyn RecordStore<TeachingSchedule>>,
    classes: Arc<dyn RecordStore<SchoolClass>>,
}

impl ScheduleService {
    pub fn new(
        store: Arc<dyn RecordStore<TeachingSchedule>>,
        classes: Arc<dyn RecordStore<SchoolClass>>,
    ) -> Self {
        Self { store, classes }
    }

    pub fn list(&self) -> Vec<TeachingSchedule> {
        self.store.list()
    }

    pub fn create(&self, slot: TeachingSchedule) -> Result<TeachingSchedule, StoreError> {
        self.store.create(slot)
    }

    pub fn update(
        &self,
        id: u32,
        mut apply: impl FnMut(&mut TeachingSchedule),
    ) -> Result<TeachingSchedule, StoreError> {
        self.store.update(id, &mut apply)
    }

    pub fn delete(&self, id: u32) -> Result<TeachingSchedule, StoreError> {
        self.store.delete(id)
    }

    pub fn by_class(&self, class_id: u32) -> Vec<TeachingSchedule> {
        self.store.find(&|s| s.class_id == class_id)
    }

    pub fn by_subject(&self, subject_id: u32) -> Vec<TeachingSchedule> {
        self.store.find(&|s| s.subject_id == subject_id)
    }

    /// Slots on `day`, earliest first.
    pub fn by_day(&self, day: DayOfWeek) -> Vec<TeachingSchedule> {
        let mut slots = self.store.find(&|s| s.day_of_week == day);
        slots.sort_by(|a, b| a.start_time.cmp(&b.start_time));
        slots
    }

    /// Slots for every class at `level`.
    pub fn by_level(&self, level: &str) -> Vec<TeachingSchedule> {
        let class_ids: Vec<u32> = self
            .classes
            .find(&|c| c.level == level)
            .iter()
            .map(|c| c.id)
            .collect();
        self.store.find(&|s| class_ids.contains(&s.class_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    fn slot(class_id: u32, subject_id: u32, day: DayOfWeek, start: &str) -> TeachingSchedule {
        TeachingSchedule {
            id: 0,
            class_id,
            subject_id,
            day_of_week: day,
            start_time: start.to_string(),
            end_time: "23:59".to_string(),
        }
    }

    fn service() -> ScheduleService {
        let classes = InMemoryStore::with_records(vec![
            SchoolClass {
                id: 1,
                name: "4 Amanah".to_string(),
                level: "Year 4".to_string(),
            },
            SchoolClass {
                id: 2,
                name: "5 Bijak".to_string(),
                level: "Year 5".to_string(),
            },
        ]);
        let service = ScheduleService::new(
            Arc::new(InMemoryStore::<TeachingSchedule>::new()),
            Arc::new(classes),
        );
        service.create(slot(1, 10, DayOfWeek::Monday, "10:00")).unwrap();
        service.create(slot(2, 10, DayOfWeek::Monday, "08:00")).unwrap();
        service.create(slot(1, 11, DayOfWeek::Tuesday, "09:00")).unwrap();
        service
    }

    #[test]
    fn test_by_day_sorted_by_start() {
        let monday = service().by_day(DayOfWeek::Monday);
        let starts: Vec<&str> = monday.iter().map(|s| s.start_time.as_str()).collect();
        assert_eq!(starts, vec!["08:00", "10:00"]);
    }

    #[test]
    fn test_by_level_joins_classes() {
        let service = service();
        assert_eq!(service.by_level("Year 4").len(), 2);
        assert_eq!(service.by_level("Year 5").len(), 1);
        assert!(service.by_level("Year 6").is_empty());
    }

    #[test]
    fn test_by_class_and_subject() {
        let service = service();
        assert_eq!(service.by_class(1).len(), 2);
        assert_eq!(service.by_subject(10).len(), 2);
    }
}
