//! Public works department (OBRAS_PUBLICAS): attendance, road repair requests and technical
//! inspections.
//!
//! `ACOMPANHAMENTO_OBRAS` is informational and has no entity kind here.

mod kinds;

pub use kinds::{PUBLIC_WORKS_ATTENDANCE, ROAD_REPAIR_REQUEST, TECHNICAL_INSPECTION};

use digiurban_kernel::prelude::*;
use std::sync::Arc;

pub static MANIFEST: DepartmentManifest = DepartmentManifest {
    department: Department::ObrasPublicas,
    schemas: &[PUBLIC_WORKS_ATTENDANCE, ROAD_REPAIR_REQUEST, TECHNICAL_INSPECTION],
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
    tracing::info!("Public works department registered");
    Ok(builder)
}
