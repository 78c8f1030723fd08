//! Kernel of the DigiUrban module registry.
//!
//! Every department service is a [`handler::LifecycleHandler`] looked up by
//! [`ModuleType`](digiurban_domain::ModuleType) from an immutable [`registry::Registry`] and
//! driven through create → activate → update → soft delete, linked to a parent protocol.
//! Kinds are declared as data ([`schema::KindSchema`]) and run by one generic engine
//! ([`engine::SchemaHandler`]).
//!
//! ## ID generation
//! Use `safe_nanoid!` for URL-safe, unambiguous IDs:
//! ```rust
//! # use digiurban_kernel::safe_nanoid;
//! let id = safe_nanoid!();
//! assert_eq!(id.len(), 12);
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use digiurban_domain::config::PlatformConfig;
//! use digiurban_kernel::config::load_config;
//!
//! let cfg: PlatformConfig = load_config(Some("digiurban.toml")).unwrap();
//! ```

pub mod config;
pub mod dispatch;
pub mod engine;
pub mod entity;
pub mod error;
pub mod handler;
pub mod ids;
mod normalize;
pub mod prelude;
pub mod registry;
pub mod schema;
pub mod status;
pub mod validation;

// Alphabet excludes visually ambiguous characters (I, O, l, 0, 1).
pub const SAFE_ALPHABET: &[char; 55] = &[
    '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L',
    'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f',
    'g', 'h', 'j', 'k', 'm', 'n', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

pub use digiurban_domain as domain;
pub use digiurban_store as store;
pub use nanoid::nanoid;

/// Generates an unambiguous `NanoID` (no visually confusing characters).
#[macro_export]
macro_rules! safe_nanoid {
    () => {
        $crate::nanoid!(12, $crate::SAFE_ALPHABET)
    };
    ($size:expr) => {
        $crate::nanoid!($size, $crate::SAFE_ALPHABET)
    };
}
