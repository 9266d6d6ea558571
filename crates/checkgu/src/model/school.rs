use serde::{Deserialize, Serialize};

pub const UNASSIGNED_LEVEL: &str = "Unassigned";

fn default_level() -> String {
    UNASSIGNED_LEVEL.to_string()
}

/// A class taught by the teacher, grouped by level (e.g. "Year 4").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SchoolClass {
    #[serde(rename = "Id", alias = "id", default)]
    pub id: u32,
    pub name: String,
    #[serde(default = "default_level")]
    pub level: String,
}

impl SchoolClass {
    pub fn new(name: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            level: level.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    #[serde(rename = "Id", alias = "id", default)]
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub code: String,
    /// Display colour as a hex string.
    #[serde(default)]
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_level_defaults_to_unassigned() {
        let class: SchoolClass = serde_json::from_str(r#"{"Id": 3, "name": "4 Bestari"}"#).unwrap();
        assert_eq!(class.level, UNASSIGNED_LEVEL);
    }
}
