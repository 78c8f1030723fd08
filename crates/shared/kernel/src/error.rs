use digiurban_store::StoreError;
use std::borrow::Cow;

/// Failures of a single lifecycle operation.
#[digiurban_derive::digiurban_error]
pub enum LifecycleError {
    #[error("Citizen not found{}: {message}", format_context(.context))]
    CitizenNotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Citizen inactive{}: {message}", format_context(.context))]
    CitizenInactive { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Business-rule duplicate: one entity per protocol, or one live record per citizen.
    #[error("Duplicate registration{}: {message}", format_context(.context))]
    DuplicateRegistration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Validation failed{}: {}", format_context(.context), .errors.join("; "))]
    ValidationFailed { errors: Vec<String>, context: Option<Cow<'static, str>> },

    #[error("Entity not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Invalid transition{}: {message}", format_context(.context))]
    InvalidTransition { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Immutable field{}: {message}", format_context(.context))]
    ImmutableField { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Store error{}: {source}", format_context(.context))]
    Store { source: StoreError, context: Option<Cow<'static, str>> },

    #[error("Malformed record{}: {source}", format_context(.context))]
    Decode { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl LifecycleError {
    /// Validation messages carried by [`LifecycleError::ValidationFailed`], empty otherwise.
    #[must_use]
    pub fn validation_errors(&self) -> &[String] {
        match self {
            Self::ValidationFailed { errors, .. } => errors,
            _ => &[],
        }
    }
}
