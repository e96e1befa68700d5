//! Error types and result alias for the simulation core
//!
//! Every parameter check happens when a sampler, generator or simulation is
//! constructed, so most variants surface before any walk is generated. The
//! only hot-path failure is [`Error::Overflow`], which aborts the aggregation
//! that hit it.

use thiserror::Error;

/// Result type used throughout the simulation core
pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    /// A norm/dimension combination (or other setting) no algorithm supports
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A point was built from a coordinate buffer of the wrong length
    #[error("cannot construct {dimension}-dimensional point from {got} coordinates")]
    Construction { dimension: usize, got: usize },

    /// A distribution parameter outside its domain
    #[error("{distribution} parameter alpha must be a finite number > 0, got {alpha}")]
    DistributionDomain {
        distribution: &'static str,
        alpha: f64,
    },

    /// A radius or coordinate that does not fit the point's field width
    #[error("numeric overflow: {0}")]
    Overflow(String),

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn overflow(what: impl Into<String>) -> Self {
        Error::Overflow(what.into())
    }
}
