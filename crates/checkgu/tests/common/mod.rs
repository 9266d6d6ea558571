//! Shared helpers for checkgu integration tests.
//!
//! - `LessonPlanBuilder` for creating records without boilerplate
//! - `Package` for unzipping and checking generated documents

pub mod builders;
pub mod package;

pub use builders::*;
pub use package::Package;
