//! Dose and cancer-risk estimation, report rendering, and data sinks.

pub mod dose;
pub mod primer;
pub mod reporter;
pub mod sink;

pub use dose::{estimate, evaluate};
pub use reporter::Report;

use radrisk_core::{MissionDuration, ShieldingMaterial};
use radrisk_provider::{get_proton_flux, FluxProvider};
use std::time::Instant;

/// Runs one full evaluation cycle: fresh flux read, estimate, report.
///
/// Every input change calls this again; nothing carries over between calls.
pub async fn run_cycle(
    provider: &dyn FluxProvider,
    days: MissionDuration,
    material: ShieldingMaterial,
) -> Report {
    let t0 = Instant::now();
    tracing::info!(days = days.days(), %material, "evaluation cycle started");

    let reading = get_proton_flux(provider).await;
    let fetch_time = t0.elapsed();

    let estimate = evaluate(reading.flux, days, material);
    tracing::info!(
        source = %reading.source,
        dose_msv = estimate.dose.msv(),
        risk_percent = estimate.risk.percent(),
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "evaluation cycle done"
    );

    Report::build(reading, estimate, fetch_time)
}
