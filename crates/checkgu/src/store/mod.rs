//! In-process record store shared by every dashboard entity.
//!
//! Records are kept in insertion order behind a single mutex. Every read hands
//! out clones, so callers never observe a record mid-update.

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::de::DeserializeOwned;

use crate::error::StoreError;
use crate::model::{
    LessonPlanRecord, SchoolCalendar, SchoolClass, Subject, TeachingSchedule, Template,
    UserSettings,
};

/// A record addressable by a numeric identifier.
pub trait Record: Clone + Send {
    /// Human-readable kind, used in not-found errors.
    const KIND: &'static str;

    fn id(&self) -> u32;
    fn set_id(&mut self, id: u32);
}

/// CRUD over records keyed by an auto-incrementing identifier.
pub trait RecordStore<T: Record>: Send + Sync {
    fn list(&self) -> Vec<T>;

    fn get(&self, id: u32) -> Option<T>;

    /// Stores `record` under a fresh id (`max(existing) + 1`), ignoring any id
    /// it already carries. Fails once `u32::MAX` is taken.
    fn create(&self, record: T) -> Result<T, StoreError>;

    /// Applies `apply` to the stored record. The id cannot be changed.
    fn update(&self, id: u32, apply: &mut dyn FnMut(&mut T)) -> Result<T, StoreError>;

    fn delete(&self, id: u32) -> Result<T, StoreError>;

    fn find(&self, predicate: &dyn Fn(&T) -> bool) -> Vec<T>;
}

#[derive(Debug)]
pub struct InMemoryStore<T> {
    records: Mutex<Vec<T>>,
}

impl<T: Record> InMemoryStore<T> {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<T>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl<T: Record + DeserializeOwned> InMemoryStore<T> {
    /// Seeds a store from a JSON array of records.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let records: Vec<T> = serde_json::from_str(json).map_err(|e| StoreError::Seed {
            kind: T::KIND,
            source: e,
        })?;
        tracing::debug!(kind = T::KIND, count = records.len(), "Seeded record store");
        Ok(Self::with_records(records))
    }
}

impl<T: Record> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> RecordStore<T> for InMemoryStore<T> {
    fn list(&self) -> Vec<T> {
        self.lock().clone()
    }

    fn get(&self, id: u32) -> Option<T> {
        self.lock().iter().find(|r| r.id() == id).cloned()
    }

    fn create(&self, mut record: T) -> Result<T, StoreError> {
        let mut records = self.lock();
        let max = records.iter().map(Record::id).max().unwrap_or(0);
        let next_id = max
            .checked_add(1)
            .ok_or(StoreError::IdsExhausted { kind: T::KIND, max })?;
        record.set_id(next_id);
        records.push(record.clone());
        tracing::debug!(kind = T::KIND, id = next_id, "Created record");
        Ok(record)
    }

    fn update(&self, id: u32, apply: &mut dyn FnMut(&mut T)) -> Result<T, StoreError> {
        let mut records = self.lock();
        let record = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(StoreError::NotFound { kind: T::KIND, id })?;
        apply(record);
        record.set_id(id);
        Ok(record.clone())
    }

    fn delete(&self, id: u32) -> Result<T, StoreError> {
        let mut records = self.lock();
        let index = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(StoreError::NotFound { kind: T::KIND, id })?;
        Ok(records.remove(index))
    }

    fn find(&self, predicate: &dyn Fn(&T) -> bool) -> Vec<T> {
        self.lock().iter().filter(|&r| predicate(r)).cloned().collect()
    }
}

macro_rules! impl_record {
    ($ty:ty, $kind:literal) => {
        impl Record for $ty {
            const KIND: &'static str = $kind;

            fn id(&self) -> u32 {
                self.id
            }

            fn set_id(&mut self, id: u32) {
                self.id = id;
            }
        }
    };
}

impl_record!(LessonPlanRecord, "Lesson plan");
impl_record!(SchoolClass, "Class");
impl_record!(Subject, "Subject");
impl_record!(SchoolCalendar, "Calendar");
impl_record!(TeachingSchedule, "Teaching schedule");
impl_record!(Template, "Template");
impl_record!(UserSettings, "Settings");
