//! Urban planning department (PLANEJAMENTO_URBANO): attendance, building permits, certificates
//! and irregular construction reports.
//!
//! `CONSULTAS_PUBLICAS` is informational and has no entity kind here.

mod kinds;

pub use kinds::{URBAN_PLANNING_ATTENDANCE, BUILDING_PERMIT, CERTIFICATE_REQUEST, URBAN_INFRACTION};

use digiurban_kernel::prelude::*;
use std::sync::Arc;

pub static MANIFEST: DepartmentManifest = DepartmentManifest {
    department: Department::PlanejamentoUrbano,
    schemas: &[URBAN_PLANNING_ATTENDANCE, BUILDING_PERMIT, CERTIFICATE_REQUEST, URBAN_INFRACTION],
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
    tracing::info!("Urban planning department registered");
    Ok(builder)
}
