//! Public safety department (SEGURANCA_PUBLICA): attendance, occurrence reports, patrol requests
//! and anonymous tips.
//!
//! `ESTATISTICAS_SEGURANCA` is informational and has no entity kind here.

mod kinds;

pub use kinds::{SECURITY_ATTENDANCE, SECURITY_OCCURRENCE, PATROL_REQUEST, ANONYMOUS_TIP};

use digiurban_kernel::prelude::*;
use std::sync::Arc;

pub static MANIFEST: DepartmentManifest = DepartmentManifest {
    department: Department::SegurancaPublica,
    schemas: &[SECURITY_ATTENDANCE, SECURITY_OCCURRENCE, PATROL_REQUEST, ANONYMOUS_TIP],
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
    tracing::info!("Public safety department registered");
    Ok(builder)
}
