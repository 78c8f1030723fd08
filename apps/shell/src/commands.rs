//! Subcommand implementations. Output goes to the supplied writer.

use anyhow::{Context, Result, bail};
use digiurban::domain::config::PlatformConfig;
use digiurban::kernel::prelude::*;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

pub(crate) fn modules(registry: &Registry, out: &mut impl Write) -> Result<()> {
    use strum::IntoEnumIterator;

    for module_type in ModuleType::iter() {
        let handler = if module_type.is_informational() {
            "informational".to_owned()
        } else {
            registry.get(module_type).map_or_else(|| "-".to_owned(), |h| h.entity_name().to_owned())
        };
        writeln!(out, "{:<36} {:<20} {handler}", module_type.code(), module_type.department().code())?;
    }
    Ok(())
}

pub(crate) fn stats(registry: &Registry, out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &registry.stats())?;
    writeln!(out)?;
    Ok(())
}

/// Prints the report; returns whether the form is valid.
pub(crate) fn validate(
    registry: &Registry,
    module_type: &str,
    file: &Path,
    out: &mut impl Write,
) -> Result<bool> {
    let handler = registry.resolve(module_type)?;
    let form = read_form(file)?;
    let report = handler.validate_form_data(&form);

    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(report.valid)
}

/// Creates and activates one entity in a throwaway store, printing both states.
pub(crate) async fn simulate(
    config: &PlatformConfig,
    module_type: &str,
    file: &Path,
    citizen: &str,
    protocol: &str,
    out: &mut impl Write,
) -> Result<()> {
    let store = MemoryStore::builder().citizen(citizen, true).build()?;
    let registry = digiurban::init(config, Arc::new(store))?;
    let dispatcher = ProtocolDispatcher::new(registry);
    let form = read_form(file)?;

    let Dispatch::Created(created) =
        dispatcher.create_for_protocol(module_type, protocol, &form, citizen).await?
    else {
        writeln!(out, "{module_type} is informational: no entity is created")?;
        return Ok(());
    };
    serde_json::to_writer_pretty(&mut *out, &created)?;
    writeln!(out)?;

    dispatcher.activate_by_protocol(module_type, protocol).await?;
    let handler = dispatcher.registry().resolve(module_type)?;
    let Some(active) = handler.find_by_protocol_id(protocol).await? else {
        bail!("entity of protocol '{protocol}' vanished after activation");
    };
    serde_json::to_writer_pretty(&mut *out, &active)?;
    writeln!(out)?;
    Ok(())
}

fn read_form(file: &Path) -> Result<FormData> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("Cannot read form file {}", file.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("{} is not a JSON object", file.display()))
}
