use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Term {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Holiday {
    pub name: String,
    pub date: NaiveDate,
}

/// An academic year: its terms and public/school holidays.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SchoolCalendar {
    #[serde(rename = "Id", alias = "id", default)]
    pub id: u32,
    pub name: String,
    pub year: i32,
    #[serde(default)]
    pub terms: Vec<Term>,
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

impl SchoolCalendar {
    /// The term containing `date`, if any.
    pub fn term_for(&self, date: NaiveDate) -> Option<&Term> {
        self.terms
            .iter()
            .find(|t| t.start_date <= date && date <= t.end_date)
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.iter().any(|h| h.date == date)
    }

    /// A school day falls inside a term and is not a holiday.
    pub fn is_school_day(&self, date: NaiveDate) -> bool {
        self.term_for(date).is_some() && !self.is_holiday(date)
    }
}
