use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::estimators::Estimator;

/// Running median over an unbounded stream of amounts.
///
/// The values seen so far are partitioned around the current median: `low`
/// is a max-heap holding the lower half, `high` a min-heap holding the
/// upper half, and the two sizes never differ by more than one. Each ingest
/// classifies the new value against the cached median and moves at most one
/// element across the partition, so updates cost O(log n) heap work with
/// O(1) peeks. History is never rescanned or re-sorted.
///
/// With an odd number of values the median is an exact stored value; with
/// an even number it is the mean of the two middle values, computed in
/// `f64`. Callers that need an integer report round at the output boundary.
///
/// Not suitable for windowed medians: values are never evicted.
#[derive(Debug, Default, Clone)]
pub struct StreamingMedian {
    low: BinaryHeap<i64>,
    high: BinaryHeap<Reverse<i64>>,
    current: f64,
}

impl StreamingMedian {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of values ingested since construction or the last reset.
    pub fn len(&self) -> usize {
        self.low.len() + self.high.len()
    }

    pub fn is_empty(&self) -> bool {
        self.low.is_empty() && self.high.is_empty()
    }

    /// The median after the most recent ingest; 0 while empty.
    pub fn median(&self) -> f64 {
        self.current
    }

    /// Median of the evenly split partitions: the mean of the largest low
    /// element and the smallest high element.
    fn across_partition(&self) -> f64 {
        match (self.low.peek(), self.high.peek()) {
            (Some(&lo), Some(&Reverse(hi))) => (lo as f64 + hi as f64) / 2.0,
            (Some(&lo), None) => lo as f64,
            (None, Some(&Reverse(hi))) => hi as f64,
            (None, None) => 0.0,
        }
    }
}

impl Estimator for StreamingMedian {
    fn ingest(&mut self, value: i64) -> f64 {
        match self.low.len().cmp(&self.high.len()) {
            // Low side is ahead by one; this ingest evens the sizes.
            Ordering::Greater => {
                if (value as f64) < self.current {
                    if let Some(top) = self.low.pop() {
                        self.high.push(Reverse(top));
                    }
                    self.low.push(value);
                } else {
                    self.high.push(Reverse(value));
                }
                self.current = self.across_partition();
            }
            // Even sizes; the new value tips one side and that side's top
            // becomes the median. The very first value lands here with the
            // cached median still 0, so a negative first value starts on
            // the low side, which is observable in report output.
            Ordering::Equal => {
                if (value as f64) < self.current {
                    self.low.push(value);
                    self.current = self.low.peek().map_or(0.0, |&v| v as f64);
                } else {
                    self.high.push(Reverse(value));
                    self.current = self.high.peek().map_or(0.0, |&Reverse(v)| v as f64);
                }
            }
            // High side is ahead by one.
            Ordering::Less => {
                if (value as f64) > self.current {
                    if let Some(Reverse(top)) = self.high.pop() {
                        self.low.push(top);
                    }
                    self.high.push(Reverse(value));
                } else {
                    self.low.push(value);
                }
                self.current = self.across_partition();
            }
        }
        self.current
    }

    fn estimation(&self) -> f64 {
        self.current
    }

    fn reset(&mut self) {
        self.low.clear();
        self.high.clear();
        self.current = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn brute_median(values: &[i64]) -> f64 {
        let mut sorted = values.to_vec();
        sorted.sort_unstable();
        let n = sorted.len();
        if n % 2 == 0 {
            (sorted[n / 2 - 1] as f64 + sorted[n / 2] as f64) / 2.0
        } else {
            sorted[n / 2] as f64
        }
    }

    fn sorted_low(median: &StreamingMedian) -> Vec<i64> {
        median.low.clone().into_sorted_vec()
    }

    fn sorted_high(median: &StreamingMedian) -> Vec<i64> {
        let mut values: Vec<i64> = median.high.iter().map(|&Reverse(v)| v).collect();
        values.sort_unstable();
        values
    }

    #[test]
    fn empty_reports_zero() {
        let median = StreamingMedian::new();
        assert!(median.is_empty());
        assert_eq!(median.len(), 0);
        assert_eq!(median.median(), 0.0);
    }

    #[test]
    fn single_value_is_its_own_median() {
        let mut median = StreamingMedian::new();
        assert_eq!(median.ingest(42), 42.0);
        assert_eq!(median.len(), 1);
    }

    #[test]
    fn negative_first_value_routes_low() {
        let mut median = StreamingMedian::new();
        assert_eq!(median.ingest(-5), -5.0);
        assert_eq!(sorted_low(&median), vec![-5]);
        assert!(median.high.is_empty());
    }

    #[test]
    fn even_count_averages_the_two_middles() {
        let mut median = StreamingMedian::new();
        median.ingest(5);
        assert_eq!(median.ingest(10), 7.5);
        median.ingest(20);
        assert_eq!(median.ingest(1), 7.5);
    }

    #[test]
    fn zero_through_nine_running_medians_and_final_partitions() {
        let mut median = StreamingMedian::new();
        let got: Vec<f64> = (0..10).map(|v| median.ingest(v)).collect();
        let expected = [0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0, 4.5];
        assert_eq!(got, expected);

        assert_eq!(sorted_low(&median), vec![0, 1, 2, 3, 4]);
        assert_eq!(sorted_high(&median), vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn descending_input_tracks_brute_force() {
        let mut median = StreamingMedian::new();
        let mut seen = Vec::new();
        for v in (0..50).rev() {
            seen.push(v);
            assert_eq!(median.ingest(v), brute_median(&seen));
        }
    }

    #[test]
    fn duplicates_track_brute_force() {
        let mut median = StreamingMedian::new();
        let mut seen = Vec::new();
        for &v in &[7, 7, 7, 3, 7, 3, 3, 11, 7] {
            seen.push(v);
            assert_eq!(median.ingest(v), brute_median(&seen));
        }
    }

    #[test]
    fn random_sequences_match_brute_force() {
        let mut rng = StdRng::seed_from_u64(2017);
        for _ in 0..20 {
            let mut median = StreamingMedian::new();
            let mut seen = Vec::new();
            for _ in 0..200 {
                let v: i64 = rng.random_range(-5_000..5_000);
                seen.push(v);
                assert_eq!(
                    median.ingest(v),
                    brute_median(&seen),
                    "diverged after {} values",
                    seen.len()
                );
            }
        }
    }

    #[test]
    fn partition_sizes_never_differ_by_more_than_one() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut median = StreamingMedian::new();
        for _ in 0..500 {
            median.ingest(rng.random_range(-100..100));
            let (lo, hi) = (median.low.len() as i64, median.high.len() as i64);
            assert!((lo - hi).abs() <= 1, "low={lo}, high={hi}");
        }
    }

    #[test]
    fn partition_property_holds_after_every_ingest() {
        let mut rng = StdRng::seed_from_u64(4242);
        let mut median = StreamingMedian::new();
        for _ in 0..300 {
            median.ingest(rng.random_range(-1_000..1_000));
            let low_max = sorted_low(&median).last().copied();
            let high_min = sorted_high(&median).first().copied();
            if let (Some(lo), Some(hi)) = (low_max, high_min) {
                assert!(lo <= hi, "partition violated: max(low)={lo} > min(high)={hi}");
            }
        }
    }

    #[test]
    fn reset_then_replay_matches_fresh_instance() {
        let values = [483, -12, 250, 250, 1_000_000, 3];

        let mut reused = StreamingMedian::new();
        for v in [9, 8, 7] {
            reused.ingest(v);
        }
        reused.reset();
        assert!(reused.is_empty());
        assert_eq!(reused.median(), 0.0);

        let mut fresh = StreamingMedian::new();
        for &v in &values {
            assert_eq!(reused.ingest(v), fresh.ingest(v));
        }
    }
}
