//! # Domain Models
//!
//! Pure domain types with minimal dependencies (`serde`, `bitflags`, `strum`).
//! Keep it lean: no I/O and no lifecycle logic, just data and simple helpers.

pub mod config;
pub mod constants;
pub mod department;
pub mod module;

pub use department::{Department, DepartmentSet};
pub use module::ModuleType;
