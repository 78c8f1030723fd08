//! Education department (EDUCACAO).
//!
//! `CALENDARIO_ESCOLAR` is informational and has no entity kind here.

mod kinds;

pub use kinds::{
    DISCIPLINARY_RECORD, EDUCATION_ATTENDANCE, SCHOOL_DOCUMENT, STUDENT_TRANSFER,
    STUDENT_TRANSPORT,
};

use digiurban_kernel::prelude::*;
use std::sync::Arc;

pub static MANIFEST: DepartmentManifest = DepartmentManifest {
    department: Department::Educacao,
    schemas: &[
        EDUCATION_ATTENDANCE,
        SCHOOL_DOCUMENT,
        DISCIPLINARY_RECORD,
        STUDENT_TRANSPORT,
        STUDENT_TRANSFER,
    ],
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
    tracing::info!("Education department registered");
    Ok(builder)
}
