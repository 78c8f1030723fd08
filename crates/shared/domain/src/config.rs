use crate::department::DepartmentSet;
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level platform configuration.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfigInner {
    pub registry: RegistryConfig,
    pub lifecycle: LifecycleConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct PlatformConfig {
    #[serde(flatten, default)]
    inner: Arc<PlatformConfigInner>,
}

impl Deref for PlatformConfig {
    type Target = PlatformConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for PlatformConfig {
    fn deref_mut(&mut self) -> &mut PlatformConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Which departments get registered at boot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub departments: DepartmentSet,
    /// Refuse to boot when an enabled department leaves a module type without a handler.
    pub require_complete: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleConfig {
    /// Re-run the form validator against the merged record on update.
    pub revalidate_on_update: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub console: bool,
    pub json: bool,
    pub directory: Option<PathBuf>,
    pub env_filter: Option<String>,
}

// --- Default ---

impl Default for RegistryConfig {
    fn default() -> Self {
        Self { departments: DepartmentSet::ALL, require_complete: true }
    }
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self { revalidate_on_update: true }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), console: true, json: false, directory: None, env_filter: None }
    }
}
