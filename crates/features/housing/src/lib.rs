//! Housing department (HABITACAO): housing program applications and rent assistance.
//!
//! `CONSULTA_PROGRAMAS_HABITACIONAIS` is informational and has no entity kind here.

mod kinds;

pub use kinds::{HOUSING_APPLICATION, RENT_ASSISTANCE};

use digiurban_kernel::prelude::*;
use std::sync::Arc;

pub static MANIFEST: DepartmentManifest = DepartmentManifest {
    department: Department::Habitacao,
    schemas: &[HOUSING_APPLICATION, RENT_ASSISTANCE],
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
    tracing::info!("Housing department registered");
    Ok(builder)
}
