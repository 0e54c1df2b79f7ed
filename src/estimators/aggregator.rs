use crate::estimators::{Estimator, StreamingMedian};

/// The (median, total, count) triple for one grouping key as of a given
/// ingest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateSnapshot {
    pub median: f64,
    pub total: i64,
    pub count: u64,
}

/// Couples an owned estimator with the running sum and count of ingested
/// amounts.
///
/// Composition, not inheritance: the estimator is reachable only through
/// this wrapper, so heap internals never leak into the aggregate surface
/// and both units test independently. Generic over [`Estimator`] with the
/// dual-heap median as the default.
#[derive(Debug, Default, Clone)]
pub struct ContributionAggregator<E = StreamingMedian> {
    estimator: E,
    total: i64,
    count: u64,
}

impl ContributionAggregator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: Estimator> ContributionAggregator<E> {
    pub fn with_estimator(estimator: E) -> Self {
        Self {
            estimator,
            total: 0,
            count: 0,
        }
    }

    /// Ingests one amount and returns the triple as of after this ingest.
    ///
    /// The estimator update, the sum and the count move together; no
    /// partial update is observable between two calls.
    pub fn ingest(&mut self, amount: i64) -> AggregateSnapshot {
        let median = self.estimator.ingest(amount);
        self.total += amount;
        self.count += 1;
        AggregateSnapshot {
            median,
            total: self.total,
            count: self.count,
        }
    }

    /// The current triple, without ingesting anything.
    pub fn snapshot(&self) -> AggregateSnapshot {
        AggregateSnapshot {
            median: self.estimator.estimation(),
            total: self.total,
            count: self.count,
        }
    }

    /// Sum of all ingested amounts.
    pub fn total(&self) -> i64 {
        self.total
    }

    /// Number of ingested amounts.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Returns the aggregator to its empty state: the estimator, the total
    /// and the count all restart from zero together.
    pub fn reset(&mut self) {
        self.estimator.reset();
        self.total = 0;
        self.count = 0;
    }
}
