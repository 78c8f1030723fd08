//! Entity identifiers of the form `<kind>:<nanoid>`.

use crate::safe_nanoid;
use std::borrow::Cow;

#[digiurban_derive::digiurban_error]
pub enum EntityIdError {
    #[error("Entity id error{}: {message}", format_context(.context))]
    KindMismatch { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Mints a fresh id for a record of `kind`.
#[must_use]
pub fn new_entity_id(kind: &str) -> String {
    format!("{kind}:{}", safe_nanoid!())
}

/// Guards handlers against ids minted for another kind.
#[derive(Debug)]
pub struct EntityRef;

impl EntityRef {
    /// Validates `id` against `expected_kind`, prefixing a bare id.
    ///
    /// Prevents one kind's handler from touching another kind's record
    /// (e.g. passing a `patient:..` id to the school-document handler).
    ///
    /// # Errors
    /// Returns [`EntityIdError::KindMismatch`] when the id carries another kind.
    pub fn verify<I, K>(id: I, expected_kind: K) -> Result<String, EntityIdError>
    where
        I: AsRef<str>,
        K: AsRef<str>,
    {
        let id_ref = id.as_ref();
        let kind_ref = expected_kind.as_ref();

        match id_ref.split_once(':') {
            Some((kind, _)) if kind != kind_ref => Err(EntityIdError::KindMismatch {
                message: format!("Expected '{kind_ref}', got '{kind}'").into(),
                context: Some("ID kind mismatch".into()),
            }),
            Some(_) => Ok(id_ref.to_owned()),
            None => Ok(format!("{kind_ref}:{id_ref}")),
        }
    }
}
