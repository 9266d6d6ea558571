//! Typed records managed by the dashboard.
//!
//! Every record carries a numeric `Id` assigned by the record store. Unknown
//! JSON fields are ignored at the boundary.

pub mod calendar;
pub mod lesson_plan;
pub mod schedule;
pub mod school;
pub mod settings;
pub mod template;

pub use calendar::{Holiday, SchoolCalendar, Term};
pub use lesson_plan::{LessonPlanRecord, LessonPlanStatus, Placeholders};
pub use schedule::{DayOfWeek, TeachingSchedule};
pub use school::{SchoolClass, Subject};
pub use settings::{Theme, UserSettings};
pub use template::{Template, TemplateField, TemplateFieldType};
