//! Agriculture department (AGRICULTURA): technical assistance requests, the rural producer
//! registry and rural course enrollments.
//!
//! Rural forms are often submitted with Portuguese keys; both spellings are accepted.

mod kinds;

pub use kinds::{AGRICULTURE_ATTENDANCE, RURAL_PRODUCER, RURAL_TRAINING_ENROLLMENT};

use digiurban_kernel::prelude::*;
use std::sync::Arc;

pub static MANIFEST: DepartmentManifest = DepartmentManifest {
    department: Department::Agricultura,
    schemas: &[AGRICULTURE_ATTENDANCE, RURAL_PRODUCER, RURAL_TRAINING_ENROLLMENT],
};

#[must_use]
pub fn manifest() -> &'static DepartmentManifest {
    &MANIFEST
}

/// # Errors
/// Propagates the first [`RegistryError`] raised while registering.
pub fn register(
    builder: RegistryBuilder,
    store: &Arc<dyn EntityStore>,
) -> Result<RegistryBuilder, RegistryError> {
    let builder = builder.register_manifest(&MANIFEST, store)?;
    tracing::info!("Agriculture department registered");
    Ok(builder)
}
