#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the DigiUrban crates.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! digiurban-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining crate error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `<Name>Ext` trait that adds `.context()`
///   to `Result<T, Name>` and to `Result<T, Source>` for every wrapped source type.
/// * **Standard Conversions**: Implements `From<Source>` for variants holding a `source` field,
///   so `?` lifts upstream errors.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an `Internal`
///   variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with **named** fields only.
/// 2. Variants that support context carry `context: Option<Cow<'static, str>>`.
/// 3. Variants with a source must also carry a context field.
/// 4. One annotated enum per module: the macro emits a module-level `format_context` helper.
///
/// # Example
///
/// ```rust,ignore
/// use digiurban_derive::digiurban_error;
/// use std::borrow::Cow;
///
/// #[digiurban_error]
/// pub enum StoreError {
///     #[error("Record not found{}: {message}", format_context(.context))]
///     NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
///
///     #[error("Internal store error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn lookup() -> Result<(), StoreError> {
///     Err("table poisoned".into()).context("Looking up citizen")
/// }
/// ```
#[proc_macro_attribute]
pub fn digiurban_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
