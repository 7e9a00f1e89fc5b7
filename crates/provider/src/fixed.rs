//! In-process flux provider with a predetermined outcome.

use crate::FluxProvider;
use async_trait::async_trait;
use radrisk_core::{FeedError, ProtonFlux};

/// Always answers with the same flux or the same error.
///
/// Backs `--offline` runs (via [`StaticFlux::offline`]) and tests.
#[derive(Debug, Clone)]
pub struct StaticFlux {
    outcome: Result<ProtonFlux, FeedError>,
}

impl StaticFlux {
    pub fn new(flux: ProtonFlux) -> Self {
        Self { outcome: Ok(flux) }
    }

    pub fn failing(error: FeedError) -> Self {
        Self {
            outcome: Err(error),
        }
    }

    /// A provider with the live feed switched off.
    pub fn offline() -> Self {
        Self::failing(FeedError::Offline)
    }
}

#[async_trait]
impl FluxProvider for StaticFlux {
    async fn latest_flux(&self) -> Result<ProtonFlux, FeedError> {
        self.outcome.clone()
    }
}
