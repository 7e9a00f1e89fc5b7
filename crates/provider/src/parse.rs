//! Parsing of the GOES differential proton flux time series.
//!
//! The feed is a JSON array of records such as
//! `{"time_tag": "...", "satellite": 18, "flux": 0.11, "energy": "..."}`.
//! Only the `flux` of the last record is consumed; every other field is
//! ignored so upstream schema additions do not break parsing.

use radrisk_core::{FeedError, ProtonFlux};
use serde_json::Value;

/// Extracts the most recent flux from a raw feed body.
///
/// `flux` may be a JSON number or a numeric string. Negative or non-finite
/// values are rejected.
pub fn parse_latest_flux(body: &[u8]) -> Result<ProtonFlux, FeedError> {
    let document: Value =
        serde_json::from_slice(body).map_err(|e| FeedError::InvalidJson(e.to_string()))?;

    let series = document.as_array().ok_or(FeedError::NotAnArray)?;
    let latest = series.last().ok_or(FeedError::EmptySeries)?;
    let field = latest.get("flux").ok_or(FeedError::MissingFlux)?;

    let raw = match field {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| FeedError::NonNumericFlux(n.to_string()))?,
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| FeedError::NonNumericFlux(format!("{s:?}")))?,
        other => return Err(FeedError::NonNumericFlux(other.to_string())),
    };

    ProtonFlux::new(raw).map_err(|_| FeedError::InvalidFlux(raw))
}
