//! Public services department (SERVICOS_PUBLICOS): attendance, tree pruning, special collection
//! and weeding requests.
//!
//! `REGISTRO_PROBLEMA_COM_FOTO` is informational and has no entity kind here.

mod kinds;

pub use kinds::{PUBLIC_SERVICE_ATTENDANCE, TREE_PRUNING_REQUEST, SPECIAL_COLLECTION, WEEDING_REQUEST};

use digiurban_kernel::prelude::*;
use std::sync::Arc;

pub static MANIFEST: DepartmentManifest = DepartmentManifest {
    department: Department::ServicosPublicos,
    schemas: &[PUBLIC_SERVICE_ATTENDANCE, TREE_PRUNING_REQUEST, SPECIAL_COLLECTION, WEEDING_REQUEST],
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
    tracing::info!("Public services department registered");
    Ok(builder)
}
