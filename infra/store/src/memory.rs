//! In-process [`EntityStore`] engine.
//!
//! Tables are keyed by kind and keep insertion order so field lookups are deterministic.
//! All writes take the single table-map write lock. Guards and preconditions are evaluated
//! inside it, which serializes concurrent check-then-write sequences.

use crate::error::StoreError;
use crate::store::{EntityStore, Precondition, Record, UniqueGuard};
use async_trait::async_trait;
use digiurban_domain::constants::{CITIZEN, ID, IS_ACTIVE};
use fxhash::FxHashMap;
use parking_lot::RwLock;
use serde_json::Value;
use std::ops::Deref;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

#[derive(Debug, Default)]
struct Table {
    rows: Vec<Record>,
    index: FxHashMap<String, usize>,
}

impl Table {
    fn get(&self, id: &str) -> Option<&Record> {
        self.index.get(id).and_then(|&pos| self.rows.get(pos))
    }

    fn matching<'a>(
        &'a self,
        field: &'a str,
        value: &'a Value,
    ) -> impl Iterator<Item = &'a Record> + 'a {
        self.rows.iter().filter(move |row| row.get(field) == Some(value))
    }

    fn push(&mut self, kind: &str, record: Record) -> Result<(), StoreError> {
        let id = record_id(&record)?.to_owned();
        if self.index.contains_key(&id) {
            return Err(StoreError::UniqueViolation {
                message: format!("id '{id}' already exists").into(),
                context: Some(format!("Inserting into '{kind}'").into()),
            });
        }
        self.index.insert(id, self.rows.len());
        self.rows.push(record);
        Ok(())
    }
}

/// The internal shared state of a [`MemoryStore`].
#[derive(Debug, Default)]
pub struct MemoryStoreInner {
    tables: RwLock<FxHashMap<String, Table>>,
}

impl MemoryStoreInner {
    /// Number of records stored under `kind`.
    #[must_use]
    pub fn count(&self, kind: &str) -> usize {
        self.tables.read().get(kind).map_or(0, |t| t.rows.len())
    }
}

/// A thread-safe, reference-counted in-memory entity store.
///
/// Cloning is cheap; clones share the same tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<MemoryStoreInner>,
}

impl Deref for MemoryStore {
    type Target = MemoryStoreInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl MemoryStore {
    #[must_use = "The store is not created until you call .build()"]
    pub fn builder() -> MemoryStoreBuilder {
        MemoryStoreBuilder::default()
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn find_by_id(&self, kind: &str, id: &str) -> Result<Option<Record>, StoreError> {
        Ok(self.tables.read().get(kind).and_then(|t| t.get(id)).cloned())
    }

    async fn find_one_by_field(
        &self,
        kind: &str,
        field: &str,
        value: &Value,
    ) -> Result<Option<Record>, StoreError> {
        let tables = self.tables.read();
        Ok(tables.get(kind).and_then(|t| t.matching(field, value).next()).cloned())
    }

    async fn find_by_field(
        &self,
        kind: &str,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Record>, StoreError> {
        let tables = self.tables.read();
        Ok(tables.get(kind).map(|t| t.matching(field, value).cloned().collect()).unwrap_or_default())
    }

    #[instrument(
        skip(self, record, guards),
        fields(id = record.get(ID).and_then(serde_json::Value::as_str))
    )]
    async fn insert(
        &self,
        kind: &str,
        record: Record,
        guards: &[UniqueGuard],
    ) -> Result<Record, StoreError> {
        let mut tables = self.tables.write();
        let table = tables.entry(kind.to_owned()).or_default();

        if let Some(guard) =
            guards.iter().find(|guard| table.rows.iter().any(|row| guard.conflicts_with(row)))
        {
            warn!(field = %guard.field, "Unique guard rejected insert");
            return Err(StoreError::UniqueViolation {
                message: format!("{} = {} already taken", guard.field, guard.value).into(),
                context: Some(format!("Inserting into '{kind}'").into()),
            });
        }

        table.push(kind, record.clone())?;
        debug!("Record inserted");
        Ok(record)
    }

    #[instrument(skip(self, patch, expected))]
    async fn update(
        &self,
        kind: &str,
        id: &str,
        patch: Record,
        expected: Option<&Precondition>,
    ) -> Result<Record, StoreError> {
        if patch.get(ID).is_some_and(|new_id| new_id.as_str() != Some(id)) {
            return Err(StoreError::InvalidRecord {
                message: "record id cannot be changed".into(),
                context: Some(format!("Updating '{kind}:{id}'").into()),
            });
        }

        let mut tables = self.tables.write();
        let row = tables
            .get_mut(kind)
            .and_then(|t| t.index.get(id).copied().and_then(|pos| t.rows.get_mut(pos)))
            .ok_or_else(|| StoreError::NotFound {
                message: format!("'{id}' in '{kind}'").into(),
                context: None,
            })?;

        if let Some(expected) = expected
            && !expected.holds_for(row)
        {
            let current = row.get(&expected.field).unwrap_or(&Value::Null);
            warn!(field = %expected.field, %current, "Precondition rejected update");
            return Err(StoreError::Conflict {
                message: format!("{} is {current}, expected {}", expected.field, expected.value)
                    .into(),
                context: Some(format!("Updating '{kind}:{id}'").into()),
            });
        }

        row.extend(patch);
        debug!("Record updated");
        Ok(row.clone())
    }
}

/// Builder seeding a [`MemoryStore`] with initial records.
#[derive(Debug, Default)]
pub struct MemoryStoreBuilder {
    seeds: Vec<(String, Record)>,
}

impl MemoryStoreBuilder {
    #[must_use = "Queues a record for the store being built"]
    pub fn record(mut self, kind: impl Into<String>, record: Record) -> Self {
        self.seeds.push((kind.into(), record));
        self
    }

    /// Queues a citizen record with the given activity flag.
    #[must_use = "Queues a citizen for the store being built"]
    pub fn citizen(self, id: impl Into<String>, active: bool) -> Self {
        let mut record = Record::new();
        record.insert(ID.to_owned(), Value::String(id.into()));
        record.insert(IS_ACTIVE.to_owned(), Value::Bool(active));
        self.record(CITIZEN, record)
    }

    /// Consumes the builder and loads every queued record.
    ///
    /// # Errors
    /// Returns [`StoreError::InvalidRecord`] for a record without a string `id` and
    /// [`StoreError::UniqueViolation`] for duplicated ids within a kind.
    pub fn build(self) -> Result<MemoryStore, StoreError> {
        let mut tables: FxHashMap<String, Table> = FxHashMap::default();
        for (kind, record) in self.seeds {
            tables.entry(kind.clone()).or_default().push(&kind, record)?;
        }
        debug!(kinds = tables.len(), "Memory store seeded");
        Ok(MemoryStore { inner: Arc::new(MemoryStoreInner { tables: RwLock::new(tables) }) })
    }
}

fn record_id(record: &Record) -> Result<&str, StoreError> {
    record.get(ID).and_then(Value::as_str).filter(|id| !id.is_empty()).ok_or_else(|| {
        StoreError::InvalidRecord { message: "record requires a non-empty string id".into(), context: None }
    })
}
