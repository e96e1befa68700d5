//! Statistics over many independent walks
//!
//! - **Aggregation**: ordered seed draw, then parallel sample execution on a
//!   rayon worker pool ([`aggregator::Aggregator`])
//! - **Distance ladder**: powers of two for length-versus-distance sweeps
//!   ([`aggregator::sweep_distances`])
//! - **Summary**: mean, extremes, standard deviation and standard error
//!   ([`Summary`])

pub mod aggregator;
pub mod summary;

pub use aggregator::{draw_seeds, sweep_distances, Aggregate, Aggregator, Scalar};
pub use summary::Summary;
