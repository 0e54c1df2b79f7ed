mod aggregator;
mod estimator;
mod streaming_median;

pub use aggregator::{AggregateSnapshot, ContributionAggregator};
pub use estimator::Estimator;
pub use streaming_median::StreamingMedian;
