//! Entity store for department records.
//!
//! The lifecycle engine reaches persistence only through the narrow [`EntityStore`] trait:
//! keyed lookup, lookup by field, guarded insert and conditional update on JSON documents
//! grouped by kind.
//! [`MemoryStore`] is the in-process engine used by the shell and the test suites.
//!
//! # Examples
//!
//! ```rust
//! use digiurban_store::{EntityStore, MemoryStore, StoreError, UniqueGuard};
//! use serde_json::json;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), StoreError> {
//! let store = MemoryStore::builder().build()?;
//!
//! let record = json!({ "id": "patient:1", "citizenId": "c1" });
//! let guard = UniqueGuard::new("citizenId", json!("c1"));
//! store.insert("patient", record.as_object().cloned().unwrap_or_default(), &[guard.clone()]).await?;
//!
//! let again = json!({ "id": "patient:2", "citizenId": "c1" });
//! let err = store.insert("patient", again.as_object().cloned().unwrap_or_default(), &[guard]).await;
//! assert!(matches!(err, Err(StoreError::UniqueViolation { .. })));
//! # Ok(())
//! # }
//! ```

mod error;
mod memory;
mod store;

pub use error::{StoreError, StoreErrorExt};
pub use memory::{MemoryStore, MemoryStoreBuilder};
pub use store::{EntityStore, Precondition, Record, UniqueGuard};
