//! Domain values, shielding table, and error definitions.
//!
//! Foundation crate -- no async or I/O dependencies.

pub mod display;
pub mod error;
pub mod types;

pub use error::{FeedError, FeedErrorKind, RadriskError};
pub use types::{
    DoseEstimate, Estimate, FluxReading, FluxSource, MissionDuration, ProtonFlux, RiskEstimate,
    ShieldingMaterial,
};
