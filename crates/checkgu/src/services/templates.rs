use std::sync::Arc;

use chrono::Utc;

use crate::error::StoreError;
use crate::model::{Template, TemplateField};
use crate::store::{Record, RecordStore};

/// Template CRUD. Fields are normalized and timestamps stamped on write.
pub struct TemplateService {
    store: Arc<dyn RecordStore<Template>>,
}

impl TemplateService {
    pub fn new(store: Arc<dyn RecordStore<Template>>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<Template> {
        self.store.list()
    }

    pub fn get(&self, id: u32) -> Result<Template, StoreError> {
        self.store.get(id).ok_or(StoreError::NotFound {
            kind: Template::KIND,
            id,
        })
    }

    pub fn by_category(&self, category: &str) -> Vec<Template> {
        self.store.find(&|t| t.category.eq_ignore_ascii_case(category))
    }

    pub fn create(&self, mut template: Template) -> Result<Template, StoreError> {
        let now = Utc::now();
        template.fields = normalize_fields(template.fields);
        template.created_at = now;
        template.updated_at = now;
        self.store.create(template)
    }

    /// Replaces the editable parts of a template, keeping `createdAt`.
    pub fn update(&self, id: u32, changes: Template) -> Result<Template, StoreError> {
        let fields = normalize_fields(changes.fields);
        self.store.update(id, &mut |t| {
            t.name = changes.name.clone();
            t.description = changes.description.clone();
            t.category = changes.category.clone();
            t.content = changes.content.clone();
            t.fields = fields.clone();
            t.layout = changes.layout.clone();
            t.updated_at = Utc::now();
        })
    }

    pub fn delete(&self, id: u32) -> Result<Template, StoreError> {
        self.store.delete(id)
    }

    /// Copies a template under a new name.
    pub fn duplicate(&self, id: u32) -> Result<Template, StoreError> {
        let mut copy = self.get(id)?;
        copy.name = format!("{} (Copy)", copy.name);
        self.create(copy)
    }
}

fn normalize_fields(fields: Vec<TemplateField>) -> Vec<TemplateField> {
    fields.into_iter().map(TemplateField::normalize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TemplateFieldType;
    use crate::store::InMemoryStore;

    fn service() -> TemplateService {
        TemplateService::new(Arc::new(InMemoryStore::<Template>::new()))
    }

    #[test]
    fn test_create_normalizes_blank_field_ids() {
        let service = service();
        let mut template = Template::new("Daily");
        let mut field = TemplateField::new("Objective", TemplateFieldType::Textarea);
        field.id = String::new();
        template.fields.push(field);

        let created = service.create(template).unwrap();
        assert!(!created.fields[0].id.is_empty());
    }

    #[test]
    fn test_update_keeps_created_at() {
        let service = service();
        let created = service.create(Template::new("Daily")).unwrap();

        let mut changes = Template::new("Daily v2");
        changes.layout = "two-column".to_string();
        let updated = service.update(created.id, changes).unwrap();

        assert_eq!(updated.name, "Daily v2");
        assert_eq!(updated.layout, "two-column");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[test]
    fn test_get_missing_template() {
        assert!(matches!(
            service().get(3),
            Err(StoreError::NotFound { kind: "Template", id: 3 })
        ));
    }

    #[test]
    fn test_duplicate_gets_new_id() {
        let service = service();
        let created = service.create(Template::new("Weekly")).unwrap();
        let copy = service.duplicate(created.id).unwrap();
        assert_ne!(copy.id, created.id);
        assert_eq!(copy.name, "Weekly (Copy)");
    }
}
