//! Loading a snapshot and running the engine for one CLI invocation.

use canning::rank::DerivedBundle;
use canning::{Engine, EngineConfig, Universe};
use std::path::Path;
use tracing::info;

/// Resolve the configuration: `--config`, then `CANNING_CONFIG`, then the
/// platform config file, else defaults.
pub(crate) fn load_config(explicit: Option<&Path>) -> Result<EngineConfig, canning::ConfigError> {
    let config = EngineConfig::load_or_default(explicit)?;
    if let Some(path) = canning::locate(explicit) {
        info!(path = %path.display(), "using config file");
    }
    Ok(config)
}

/// Load the snapshot at `input` and compute its bundle.
pub(crate) fn compute_bundle(
    input: &Path,
    config: EngineConfig,
) -> Result<DerivedBundle, canning::EngineError> {
    let universe = Universe::load(input)?;
    info!(
        path = %input.display(),
        companies = universe.len(),
        sectors = universe.sector_counts().len(),
        "loaded snapshot"
    );

    let engine = Engine::new(config)?;
    Ok(engine.compute(&universe))
}
