//! Proton flux retrieval for radrisk.
//!
//! A [`FluxProvider`] reports the latest flux or a typed [`FeedError`];
//! [`get_proton_flux`] is the boundary that folds every failure into the
//! fallback reading so nothing past this crate sees a feed error.

pub mod fixed;
pub mod noaa;
pub mod parse;

use async_trait::async_trait;
use radrisk_core::{FeedError, FluxReading, ProtonFlux};

pub use fixed::StaticFlux;
pub use noaa::{FeedConfig, NoaaFeed, DEFAULT_FEED_URL};
pub use parse::parse_latest_flux;

/// Abstraction for fetching the most recent proton flux from any source.
#[async_trait]
pub trait FluxProvider: Send + Sync {
    /// One fresh attempt: no retries, no caching.
    async fn latest_flux(&self) -> Result<ProtonFlux, FeedError>;
}

/// Reads the current flux, substituting [`ProtonFlux::FALLBACK`] on any failure.
pub async fn get_proton_flux(provider: &dyn FluxProvider) -> FluxReading {
    match provider.latest_flux().await {
        Ok(flux) => {
            tracing::info!(flux = flux.value(), "live proton flux");
            FluxReading::live(flux)
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                kind = %e.kind(),
                fallback = ProtonFlux::FALLBACK.value(),
                "flux feed unusable, using fallback"
            );
            FluxReading::fallback()
        }
    }
}
