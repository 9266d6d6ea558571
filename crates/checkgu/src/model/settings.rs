use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

fn default_language() -> String {
    "English".to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    #[serde(rename = "Id", alias = "id", default)]
    pub id: u32,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_true")]
    pub notifications: bool,
    /// Export completed lesson plans to Drive without asking.
    #[serde(default)]
    pub auto_export: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            id: 0,
            language: default_language(),
            theme: Theme::default(),
            notifications: true,
            auto_export: false,
        }
    }
}
