use std::collections::BTreeMap;
use std::io::{Error, Write};

use chrono::NaiveDate;

use crate::estimators::ContributionAggregator;
use crate::reports::write_report_line;

/// Composite grouping key for the date report. The derived ordering
/// (committee id ascending, then calendar date ascending) is the required
/// output order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateKey {
    pub committee_id: String,
    pub date: NaiveDate,
}

/// End-of-stream report of the final (median, count, total) per committee
/// and transaction date.
///
/// Amounts are ingested as they arrive but nothing is written until
/// [`finish`](DateReport::finish), which emits one line per key in key
/// order.
#[derive(Debug, Default)]
pub struct DateReport {
    groups: BTreeMap<DateKey, ContributionAggregator>,
}

impl DateReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingests one amount for its (committee, date) key.
    pub fn record(&mut self, committee_id: &str, date: NaiveDate, amount: i64) {
        let key = DateKey {
            committee_id: committee_id.to_string(),
            date,
        };
        self.groups.entry(key).or_default().ingest(amount);
    }

    /// Number of distinct (committee, date) keys seen so far.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Writes the final triple for every key, committees ascending and
    /// dates ascending within a committee, dates rendered as `MMDDYYYY`.
    pub fn finish(&self, sink: &mut dyn Write) -> Result<(), Error> {
        for (key, aggregator) in &self.groups {
            let date = key.date.format("%m%d%Y").to_string();
            write_report_line(sink, &key.committee_id, &date, &aggregator.snapshot())?;
        }
        sink.flush()
    }
}
