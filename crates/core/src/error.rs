//! Centralized error types for the radrisk workspace.

use strum::Display;
use thiserror::Error;

/// Top-level error enum. Variants map to subsystems.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RadriskError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type RadriskResult<T> = Result<T, RadriskError>;

/// Why a proton flux reading could not be taken from the feed.
///
/// Never escapes the flux provider boundary: every variant folds into the
/// fallback reading. The variants stay distinct for logging and tests.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FeedError {
    #[error("feed request timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("feed transport failed: {0}")]
    Transport(String),

    #[error("live feed disabled (offline mode)")]
    Offline,

    #[error("feed responded with HTTP {0}")]
    Status(u16),

    #[error("feed body is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("feed body is not a JSON array")]
    NotAnArray,

    #[error("feed returned an empty series")]
    EmptySeries,

    #[error("latest feed record has no `flux` field")]
    MissingFlux,

    #[error("latest feed record has a non-numeric `flux`: {0}")]
    NonNumericFlux(String),

    #[error("latest feed record has an out-of-range flux: {0}")]
    InvalidFlux(f64),
}

/// Coarse failure class of a [`FeedError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FeedErrorKind {
    /// Network failure, timeout, or non-2xx response.
    FeedUnavailable,
    /// The response arrived but the expected field is missing or unusable.
    MalformedFeedData,
}

impl FeedError {
    pub fn kind(&self) -> FeedErrorKind {
        match self {
            FeedError::Timeout(_)
            | FeedError::Transport(_)
            | FeedError::Offline
            | FeedError::Status(_) => FeedErrorKind::FeedUnavailable,
            FeedError::InvalidJson(_)
            | FeedError::NotAnArray
            | FeedError::EmptySeries
            | FeedError::MissingFlux
            | FeedError::NonNumericFlux(_)
            | FeedError::InvalidFlux(_) => FeedErrorKind::MalformedFeedData,
        }
    }
}
