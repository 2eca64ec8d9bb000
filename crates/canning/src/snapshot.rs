//! Atomically replaced results for the latest universe.
//!
//! Readers clone an [`Arc`] to the current bundle and keep using it for as
//! long as they like. A refresh computes the new bundle first and swaps the
//! pointer only when that succeeds, so readers never see a partly updated
//! ranking.

use crate::config::EngineConfig;
use crate::engine::Engine;
use crate::error::Result;
use crate::universe::Universe;
use canning_data::CompanyRecord;
use canning_rank::DerivedBundle;
use chrono::Utc;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// Holder of the most recent [`DerivedBundle`].
#[derive(Debug)]
pub struct Snapshot {
    engine: Engine,
    current: RwLock<Arc<DerivedBundle>>,
}

impl Snapshot {
    /// Create a holder with an empty bundle.
    pub fn new(config: EngineConfig) -> Result<Self> {
        Ok(Self::with_engine(Engine::new(config)?))
    }

    /// Create a holder around an existing engine.
    pub fn with_engine(engine: Engine) -> Self {
        Self {
            engine,
            current: RwLock::new(Arc::new(DerivedBundle::empty(Utc::now()))),
        }
    }

    /// The bundle currently published.
    pub fn current(&self) -> Arc<DerivedBundle> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Recompute from a new universe and publish the result.
    pub fn refresh(&self, universe: &Universe) -> Arc<DerivedBundle> {
        let bundle = Arc::new(self.engine.compute(universe));
        self.publish(Arc::clone(&bundle));
        bundle
    }

    /// Validate raw records, then recompute and publish.
    ///
    /// On error the previous bundle stays published.
    pub fn refresh_records(&self, records: Vec<CompanyRecord>) -> Result<Arc<DerivedBundle>> {
        let universe = Universe::from_records(records)?;
        Ok(self.refresh(&universe))
    }

    fn publish(&self, bundle: Arc<DerivedBundle>) {
        debug!(companies = bundle.companies.len(), "publishing bundle");
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = bundle;
    }
}
