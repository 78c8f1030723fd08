use crate::error::StoreError;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::fmt::Debug;

/// A stored document: a flat JSON object carrying at least a string `id`.
pub type Record = Map<String, Value>;

/// Persistence contract consumed by the lifecycle engine.
///
/// Records are grouped by `kind` (one kind per entity family, plus `citizen`).
/// Implementations must make guarded inserts and conditional updates atomic: guards and
/// preconditions are evaluated and the record written in one critical section or transaction.
#[async_trait]
pub trait EntityStore: Send + Sync + Debug {
    async fn find_by_id(&self, kind: &str, id: &str) -> Result<Option<Record>, StoreError>;

    /// First record (in insertion order) whose `field` equals `value`.
    async fn find_one_by_field(
        &self,
        kind: &str,
        field: &str,
        value: &Value,
    ) -> Result<Option<Record>, StoreError>;

    async fn find_by_field(
        &self,
        kind: &str,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Record>, StoreError>;

    /// Inserts a new record unless one of `guards` matches an existing record.
    ///
    /// # Errors
    /// [`StoreError::UniqueViolation`] when the id is taken or a guard matches.
    /// [`StoreError::InvalidRecord`] when the record has no string `id`.
    async fn insert(
        &self,
        kind: &str,
        record: Record,
        guards: &[UniqueGuard],
    ) -> Result<Record, StoreError>;

    /// Merges `patch` into the stored record and returns the result.
    ///
    /// With `expected`, the write only happens while the stored record still matches it.
    ///
    /// # Errors
    /// [`StoreError::NotFound`] when `id` does not resolve within `kind`.
    /// [`StoreError::Conflict`] when the stored record no longer matches `expected`.
    async fn update(
        &self,
        kind: &str,
        id: &str,
        patch: Record,
        expected: Option<&Precondition>,
    ) -> Result<Record, StoreError>;
}

/// Compare-and-set condition of a conditional update: `field` must still equal `value`.
#[derive(Debug, Clone, PartialEq)]
pub struct Precondition {
    pub field: String,
    pub value: Value,
}

impl Precondition {
    pub fn new(field: impl Into<String>, value: Value) -> Self {
        Self { field: field.into(), value }
    }

    #[must_use]
    pub fn holds_for(&self, record: &Record) -> bool {
        record.get(&self.field) == Some(&self.value)
    }
}

/// Uniqueness condition checked atomically with an insert.
///
/// Conflicts with any record of the kind whose `field` equals `value`, except records
/// matched by the optional `unless` pair (e.g. cancelled ones).
#[derive(Debug, Clone, PartialEq)]
pub struct UniqueGuard {
    pub field: String,
    pub value: Value,
    pub unless: Option<(String, Value)>,
}

impl UniqueGuard {
    pub fn new(field: impl Into<String>, value: Value) -> Self {
        Self { field: field.into(), value, unless: None }
    }

    #[must_use]
    pub fn unless(mut self, field: impl Into<String>, value: Value) -> Self {
        self.unless = Some((field.into(), value));
        self
    }

    #[must_use]
    pub fn conflicts_with(&self, record: &Record) -> bool {
        if record.get(&self.field) != Some(&self.value) {
            return false;
        }
        self.unless.as_ref().is_none_or(|(field, value)| record.get(field) != Some(value))
    }
}
