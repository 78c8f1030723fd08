//! Environment department (MEIO_AMBIENTE): environmental attendance, licensing, complaints and
//! tree cutting authorizations.

mod kinds;

pub use kinds::{ENVIRONMENTAL_ATTENDANCE, ENVIRONMENTAL_LICENSE, ENVIRONMENTAL_COMPLAINT, TREE_CUTTING_AUTHORIZATION};

use digiurban_kernel::prelude::*;
use std::sync::Arc;

pub static MANIFEST: DepartmentManifest = DepartmentManifest {
    department: Department::MeioAmbiente,
    schemas: &[ENVIRONMENTAL_ATTENDANCE, ENVIRONMENTAL_LICENSE, ENVIRONMENTAL_COMPLAINT, TREE_CUTTING_AUTHORIZATION],
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
    tracing::info!("Environment department registered");
    Ok(builder)
}
