//! Machine-readable output for evaluation cycles.
//!
//! One [`EstimateRow`] per cycle, fully denormalized. The only backend is
//! an NDJSON stream over any `Write` impl (stdout or a file).

pub mod json_stream;

use crate::reporter::Report;
use chrono::{SecondsFormat, Utc};
use radrisk_core::{FluxSource, ShieldingMaterial};
use serde::Serialize;

/// One row per evaluation cycle.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateRow {
    /// p/cm²/s/sr, as used in the calculation.
    pub flux: f64,
    pub flux_source: FluxSource,
    pub mission_days: u16,
    pub material: ShieldingMaterial,
    pub shield_factor: f64,
    pub daily_dose_msv: f64,
    /// Unrounded; display rounding is a presentation concern.
    pub total_dose_msv: f64,
    pub risk_percent: f64,
    pub fetch_time_ms: u64,
    /// RFC 3339, UTC, second precision.
    pub created_at: String,
}

impl Report {
    /// Flatten the report into a sink-ready row.
    pub fn to_row(&self) -> EstimateRow {
        let e = &self.estimate;
        EstimateRow {
            flux: e.flux.value(),
            flux_source: self.reading.source,
            mission_days: e.days.days(),
            material: e.material,
            shield_factor: e.material.shield_factor(),
            daily_dose_msv: e.daily_dose_msv,
            total_dose_msv: e.dose.msv(),
            risk_percent: e.risk.percent(),
            fetch_time_ms: self.fetch_time.as_millis() as u64,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dose::evaluate;
    use radrisk_core::{FluxReading, MissionDuration};
    use std::time::Duration;

    #[test]
    fn row_mirrors_report() {
        let reading = FluxReading::fallback();
        let estimate = evaluate(
            reading.flux,
            MissionDuration::new(180).unwrap(),
            ShieldingMaterial::Aluminum,
        );
        let row = Report::build(reading, estimate, Duration::from_millis(42)).to_row();

        assert_eq!(row.flux, 100.0);
        assert_eq!(row.flux_source, FluxSource::Fallback);
        assert_eq!(row.mission_days, 180);
        assert_eq!(row.material, ShieldingMaterial::Aluminum);
        assert_eq!(row.shield_factor, 0.7);
        assert_eq!(row.total_dose_msv, estimate.dose.msv());
        assert_eq!(row.fetch_time_ms, 42);
        assert!(row.created_at.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&row.created_at).is_ok());
    }
}
