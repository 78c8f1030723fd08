//! Facade crate for DigiUrban department slices and shared modules.
//! Re-exports domain/kernel primitives and builds the registry from the enabled departments.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `digiurban` with the desired department features (`health`, `housing`, ...), or the
//!   default `all-departments`.
//! - Call [`init`] once at boot and share the returned [`Registry`](kernel::registry::Registry).

pub use digiurban_domain as domain;
pub use digiurban_kernel as kernel;
pub use digiurban_store as store;

use digiurban_domain::config::PlatformConfig;
use digiurban_domain::{Department, DepartmentSet};
use digiurban_kernel::engine::LifecycleOptions;
use digiurban_kernel::registry::{Registry, RegistryBuilder, RegistryError};
use digiurban_kernel::schema::DepartmentManifest;
use digiurban_store::EntityStore;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::{info, warn};

/// Department slices compiled into this build.
pub mod features {
    #[cfg(feature = "agriculture")]
    pub use digiurban_agriculture as agriculture;
    #[cfg(feature = "culture")]
    pub use digiurban_culture as culture;
    #[cfg(feature = "education")]
    pub use digiurban_education as education;
    #[cfg(feature = "environment")]
    pub use digiurban_environment as environment;
    #[cfg(feature = "health")]
    pub use digiurban_health as health;
    #[cfg(feature = "housing")]
    pub use digiurban_housing as housing;
    #[cfg(feature = "public-safety")]
    pub use digiurban_public_safety as public_safety;
    #[cfg(feature = "public-services")]
    pub use digiurban_public_services as public_services;
    #[cfg(feature = "public-works")]
    pub use digiurban_public_works as public_works;
    #[cfg(feature = "social-assistance")]
    pub use digiurban_social_assistance as social_assistance;
    #[cfg(feature = "sports")]
    pub use digiurban_sports as sports;
    #[cfg(feature = "tourism")]
    pub use digiurban_tourism as tourism;
    #[cfg(feature = "urban-planning")]
    pub use digiurban_urban_planning as urban_planning;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "health")]
        "health",
        #[cfg(feature = "education")]
        "education",
        #[cfg(feature = "social-assistance")]
        "social-assistance",
        #[cfg(feature = "agriculture")]
        "agriculture",
        #[cfg(feature = "housing")]
        "housing",
        #[cfg(feature = "culture")]
        "culture",
        #[cfg(feature = "sports")]
        "sports",
        #[cfg(feature = "environment")]
        "environment",
        #[cfg(feature = "public-works")]
        "public-works",
        #[cfg(feature = "urban-planning")]
        "urban-planning",
        #[cfg(feature = "public-safety")]
        "public-safety",
        #[cfg(feature = "public-services")]
        "public-services",
        #[cfg(feature = "tourism")]
        "tourism",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

type Register =
    fn(RegistryBuilder, &Arc<dyn EntityStore>) -> Result<RegistryBuilder, RegistryError>;

/// A compiled department crate: what it declares and how it registers itself.
struct Slice {
    manifest: &'static DepartmentManifest,
    register: Register,
}

fn slices() -> Vec<Slice> {
    vec![
        #[cfg(feature = "health")]
        Slice { manifest: features::health::manifest(), register: features::health::register },
        #[cfg(feature = "education")]
        Slice { manifest: features::education::manifest(), register: features::education::register },
        #[cfg(feature = "social-assistance")]
        Slice { manifest: features::social_assistance::manifest(), register: features::social_assistance::register },
        #[cfg(feature = "agriculture")]
        Slice { manifest: features::agriculture::manifest(), register: features::agriculture::register },
        #[cfg(feature = "housing")]
        Slice { manifest: features::housing::manifest(), register: features::housing::register },
        #[cfg(feature = "culture")]
        Slice { manifest: features::culture::manifest(), register: features::culture::register },
        #[cfg(feature = "sports")]
        Slice { manifest: features::sports::manifest(), register: features::sports::register },
        #[cfg(feature = "environment")]
        Slice { manifest: features::environment::manifest(), register: features::environment::register },
        #[cfg(feature = "public-works")]
        Slice { manifest: features::public_works::manifest(), register: features::public_works::register },
        #[cfg(feature = "urban-planning")]
        Slice { manifest: features::urban_planning::manifest(), register: features::urban_planning::register },
        #[cfg(feature = "public-safety")]
        Slice { manifest: features::public_safety::manifest(), register: features::public_safety::register },
        #[cfg(feature = "public-services")]
        Slice { manifest: features::public_services::manifest(), register: features::public_services::register },
        #[cfg(feature = "tourism")]
        Slice { manifest: features::tourism::manifest(), register: features::tourism::register },
    ]
}

#[digiurban_derive::digiurban_error]
pub enum InitError {
    #[error("Registry initialization failed{}: {source}", format_context(.context))]
    Registry { source: RegistryError, context: Option<Cow<'static, str>> },
}

/// Manifests of every department slice compiled into this build.
#[must_use]
pub fn manifests() -> Vec<&'static DepartmentManifest> {
    slices().iter().map(|slice| slice.manifest).collect()
}

/// Departments this build can serve.
#[must_use]
pub fn compiled_departments() -> DepartmentSet {
    manifests().iter().fold(DepartmentSet::empty(), |set, m| set | DepartmentSet::from(m.department))
}

/// Builds the registry for the departments enabled in `config`, backed by `store`.
///
/// With `registry.require_complete` every record-producing module type of an enabled
/// department must end up with a handler; a department enabled in config but not compiled in
/// therefore fails the boot.
///
/// # Errors
/// Returns an error if registration fails or the registry is incomplete.
pub fn init(config: &PlatformConfig, store: Arc<dyn EntityStore>) -> Result<Registry, InitError> {
    let enabled = config.registry.departments;
    let mut builder = Registry::builder().options(LifecycleOptions::from(&config.lifecycle));

    for slice in slices() {
        let department = slice.manifest.department;
        if !enabled.includes(department) {
            info!(department = %department, "Department disabled by configuration");
            continue;
        }
        builder = (slice.register)(builder, &store).context(format!("Registering {department}"))?;
    }

    let missing = enabled.difference(compiled_departments());
    for department in missing.departments().filter(|d| has_records(*d)) {
        warn!(department = %department, "Department enabled but not compiled in");
    }

    let registry = if config.registry.require_complete {
        builder.build_complete(enabled).context("Building complete registry")?
    } else {
        builder.build()
    };

    let stats = registry.stats();
    info!(handlers = stats.total, departments = stats.by_department.len(), "Registry ready");
    Ok(registry)
}

/// Whether any module type of `department` produces records.
fn has_records(department: Department) -> bool {
    use digiurban_domain::ModuleType;
    use strum::IntoEnumIterator;

    ModuleType::iter().any(|mt| mt.department() == department && !mt.is_informational())
}
