use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LAYOUT: &str = "single-column";

fn default_layout() -> String {
    DEFAULT_LAYOUT.to_string()
}

fn new_field_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemplateFieldType {
    #[default]
    Text,
    Textarea,
    Number,
    Date,
    Select,
}

/// An input the teacher fills when a template is applied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TemplateField {
    #[serde(default = "new_field_id")]
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type", default)]
    pub field_type: TemplateFieldType,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub placeholder: String,
    #[serde(default)]
    pub options: Vec<String>,
}

impl TemplateField {
    pub fn new(label: impl Into<String>, field_type: TemplateFieldType) -> Self {
        Self {
            id: new_field_id(),
            label: label.into(),
            field_type,
            required: false,
            placeholder: String::new(),
            options: Vec::new(),
        }
    }

    /// Replaces a blank id with a fresh one.
    pub fn normalize(mut self) -> Self {
        if self.id.trim().is_empty() {
            self.id = new_field_id();
        }
        self
    }
}

/// A lesson-plan document template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(rename = "Id", alias = "id", default)]
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub fields: Vec<TemplateField>,
    #[serde(default = "default_layout")]
    pub layout: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Template {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name: name.into(),
            description: String::new(),
            category: String::new(),
            content: String::new(),
            fields: Vec::new(),
            layout: default_layout(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Tokens (`{{label}}`) that a lesson plan built from this template carries.
    pub fn placeholder_tokens(&self) -> Vec<String> {
        self.fields
            .iter()
            .filter(|f| !f.label.trim().is_empty())
            .map(|f| format!("{{{{{}}}}}", f.label.trim()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_defaults_fill_missing_values() {
        let field: TemplateField = serde_json::from_str(r#"{"label": "Objective"}"#).unwrap();
        assert_eq!(field.field_type, TemplateFieldType::Text);
        assert!(!field.required);
        assert!(!field.id.is_empty());
        assert!(field.options.is_empty());
    }

    #[test]
    fn test_template_defaults_layout() {
        let template: Template = serde_json::from_str(r#"{"Id": 1, "name": "Daily"}"#).unwrap();
        assert_eq!(template.layout, DEFAULT_LAYOUT);
    }

    #[test]
    fn test_placeholder_tokens_skip_blank_labels() {
        let mut template = Template::new("Weekly");
        template.fields = vec![
            TemplateField::new("title", TemplateFieldType::Text),
            TemplateField::new("  ", TemplateFieldType::Text),
            TemplateField::new("objective", TemplateFieldType::Textarea),
        ];
        assert_eq!(
            template.placeholder_tokens(),
            vec!["{{title}}".to_string(), "{{objective}}".to_string()]
        );
    }
}
