//! Lesson plan records and their ordered placeholder map.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Processing state of an uploaded lesson plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LessonPlanStatus {
    #[default]
    Pending,
    Uploading,
    Processing,
    Completed,
    Error,
}

impl LessonPlanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LessonPlanStatus::Pending => "pending",
            LessonPlanStatus::Uploading => "uploading",
            LessonPlanStatus::Processing => "processing",
            LessonPlanStatus::Completed => "completed",
            LessonPlanStatus::Error => "error",
        }
    }
}

impl fmt::Display for LessonPlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Placeholder token to replacement value, in insertion order.
///
/// Serialized as a JSON object. Deserialization keeps the order in which keys
/// appear in the source document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placeholders(Vec<(String, String)>);

impl Placeholders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a value. A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Placeholders {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut placeholders = Placeholders::new();
        for (k, v) in iter {
            placeholders.insert(k, v);
        }
        placeholders
    }
}

impl Serialize for Placeholders {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct PlaceholdersVisitor;

impl<'de> Visitor<'de> for PlaceholdersVisitor {
    type Value = Placeholders;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of placeholder tokens to string values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut placeholders = Placeholders(Vec::with_capacity(access.size_hint().unwrap_or(0)));
        while let Some((key, value)) = access.next_entry::<String, String>()? {
            placeholders.insert(key, value);
        }
        Ok(placeholders)
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(Placeholders::new())
    }

    fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(Placeholders::new())
    }
}

impl<'de> Deserialize<'de> for Placeholders {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PlaceholdersVisitor)
    }
}

/// A lesson plan produced by the upload flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LessonPlanRecord {
    /// Assigned by the record store on creation.
    #[serde(rename = "Id", alias = "id", default)]
    pub id: u32,
    pub file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    /// ISO-8601 timestamp of the upload.
    pub upload_date: String,
    #[serde(default)]
    pub status: LessonPlanStatus,
    #[serde(default)]
    pub placeholders: Placeholders,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<u32>,
    #[serde(default)]
    pub google_drive_exported: bool,
    #[serde(default)]
    pub google_drive_url: String,
    #[serde(default)]
    pub exported_at: Option<DateTime<Utc>>,
}

impl LessonPlanRecord {
    pub fn new(file_name: impl Into<String>, upload_date: impl Into<String>) -> Self {
        Self {
            id: 0,
            file_name: file_name.into(),
            subject: None,
            grade: None,
            upload_date: upload_date.into(),
            status: LessonPlanStatus::Pending,
            placeholders: Placeholders::new(),
            template_id: None,
            google_drive_exported: false,
            google_drive_url: String::new(),
            exported_at: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == LessonPlanStatus::Completed
    }

    /// Calendar date of the upload, if the timestamp parses.
    ///
    /// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS[.f]`, or a bare date.
    pub fn upload_day(&self) -> Option<NaiveDate> {
        let raw = self.upload_date.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc).date_naive());
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(dt.date());
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }
}
