use std::borrow::Cow;

/// A specialized [`StoreError`] enum of this crate.
#[digiurban_derive::digiurban_error]
pub enum StoreError {
    #[error("Record not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A unique guard or a primary key rejected the write.
    #[error("Unique constraint violated{}: {message}", format_context(.context))]
    UniqueViolation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The stored record changed since it was read.
    #[error("Write conflict{}: {message}", format_context(.context))]
    Conflict { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Invalid record{}: {message}", format_context(.context))]
    InvalidRecord { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal store error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
