use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// One weekly teaching slot: a class taking a subject on a given day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeachingSchedule {
    #[serde(rename = "Id", alias = "id", default)]
    pub id: u32,
    pub class_id: u32,
    pub subject_id: u32,
    pub day_of_week: DayOfWeek,
    /// `HH:MM`, 24-hour clock.
    pub start_time: String,
    pub end_time: String,
}
