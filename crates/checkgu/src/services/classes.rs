use std::sync::Arc;

use crate::error::StoreError;
use crate::model::school::UNASSIGNED_LEVEL;
use crate::model::SchoolClass;
use crate::store::RecordStore;

pub struct ClassService {
    store: Arc<dyn RecordStore<SchoolClass>>,
}

impl ClassService {
    pub fn new(store: Arc<dyn RecordStore<SchoolClass>>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<SchoolClass> {
        self.store.list()
    }

    pub fn get(&self, id: u32) -> Option<SchoolClass> {
        self.store.get(id)
    }

    /// Stores a class; a blank level becomes "Unassigned".
    pub fn create(&self, mut class: SchoolClass) -> Result<SchoolClass, StoreError> {
        if class.level.trim().is_empty() {
            class.level = UNASSIGNED_LEVEL.to_string();
        }
        self.store.create(class)
    }

    pub fn rename(&self, id: u32, name: &str) -> Result<SchoolClass, StoreError> {
        self.store.update(id, &mut |c| c.name = name.to_string())
    }

    pub fn move_to_level(&self, id: u32, level: &str) -> Result<SchoolClass, StoreError> {
        self.store.update(id, &mut |c| c.level = level.to_string())
    }

    pub fn delete(&self, id: u32) -> Result<SchoolClass, StoreError> {
        self.store.delete(id)
    }

    pub fn by_level(&self, level: &str) -> Vec<SchoolClass> {
        self.store.find(&|c| c.level == level)
    }

    /// Distinct levels in first-seen order.
    pub fn levels(&self) -> Vec<String> {
        let mut levels: Vec<String> = Vec::new();
        for class in self.store.list() {
            if !levels.contains(&class.level) {
                levels.push(class.level);
            }
        }
        levels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    #[test]
    fn test_blank_level_becomes_unassigned() {
        let service = ClassService::new(Arc::new(InMemoryStore::<SchoolClass>::new()));
        let created = service.create(SchoolClass::new("4 Amanah", " ")).unwrap();
        assert_eq!(created.level, UNASSIGNED_LEVEL);
    }

    #[test]
    fn test_levels_in_first_seen_order() {
        let service = ClassService::new(Arc::new(InMemoryStore::<SchoolClass>::new()));
        service.create(SchoolClass::new("5 Cerdik", "Year 5")).unwrap();
        service.create(SchoolClass::new("4 Amanah", "Year 4")).unwrap();
        service.create(SchoolClass::new("5 Bijak", "Year 5")).unwrap();
        assert_eq!(service.levels(), vec!["Year 5", "Year 4"]);
        assert_eq!(service.by_level("Year 5").len(), 2);
    }
}
