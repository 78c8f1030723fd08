//! Tourism department (TURISMO): visitor attendance, tourist guide registry and tourism
//! establishments.
//!
//! `MAPA_TURISTICO` is informational and has no entity kind here.

mod kinds;

pub use kinds::{TOURISM_ATTENDANCE, TOURISM_GUIDE, LOCAL_BUSINESS};

use digiurban_kernel::prelude::*;
use std::sync::Arc;

pub static MANIFEST: DepartmentManifest = DepartmentManifest {
    department: Department::Turismo,
    schemas: &[TOURISM_ATTENDANCE, TOURISM_GUIDE, LOCAL_BUSINESS],
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
    tracing::info!("Tourism department registered");
    Ok(builder)
}
