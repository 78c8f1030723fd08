use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::info;

/// Default config file stem, resolved against the working directory (`digiurban.toml`, ...).
pub const DEFAULT_CONFIG_FILE: &str = "digiurban";

/// Prefix of environment overrides (`DIGIURBAN__LIFECYCLE__REVALIDATE_ON_UPDATE=false`).
pub const ENV_PREFIX: &str = "DIGIURBAN";

#[digiurban_derive::digiurban_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Layered configuration loader: a file plus environment overrides.
///
/// 1. **Base File**: an explicit `path` must exist. Without one, the optional
///    [`DEFAULT_CONFIG_FILE`] is used when present.
/// 2. **Environment Overrides**: variables prefixed with `DIGIURBAN__`, nested with double
///    underscores (`DIGIURBAN__LOGGING__LEVEL` maps to `logging.level`).
///
/// # Errors
/// * The explicit file cannot be found or parsed.
/// * The merged sources do not match the structure of `T`.
///
/// # Example
/// ```rust
/// use digiurban_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let file = match &path {
        Some(p) => {
            info!("Loading config from {}", p.as_ref().display());
            File::from(p.as_ref()).required(true)
        },
        None => {
            info!("Loading optional config '{DEFAULT_CONFIG_FILE}'");
            File::with_name(DEFAULT_CONFIG_FILE).required(false)
        },
    };

    let config = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
