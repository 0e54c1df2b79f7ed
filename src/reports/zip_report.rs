use std::collections::HashMap;
use std::io::{Error, Write};

use crate::estimators::{AggregateSnapshot, ContributionAggregator};
use crate::reports::write_report_line;

/// Composite grouping key for the zip report.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZipKey {
    pub committee_id: String,
    pub zip_code: String,
}

/// Streaming report of the running (median, count, total) per committee
/// and 5-digit zip prefix.
///
/// One aggregator per key, created lazily on first sight in a single flat
/// map. Every ingest writes the returned triple to the sink immediately,
/// so output order is input order and the same key reappears with a
/// non-decreasing count.
pub struct ZipReport {
    sink: Box<dyn Write>,
    groups: HashMap<ZipKey, ContributionAggregator>,
}

impl ZipReport {
    pub fn new(sink: Box<dyn Write>) -> Self {
        Self {
            sink,
            groups: HashMap::new(),
        }
    }

    /// Ingests one amount and writes the updated triple for its key.
    pub fn record(
        &mut self,
        committee_id: &str,
        zip5: &str,
        amount: i64,
    ) -> Result<AggregateSnapshot, Error> {
        let key = ZipKey {
            committee_id: committee_id.to_string(),
            zip_code: zip5.to_string(),
        };
        let snapshot = self.groups.entry(key).or_default().ingest(amount);
        write_report_line(&mut *self.sink, committee_id, zip5, &snapshot)?;
        Ok(snapshot)
    }

    /// Number of distinct (committee, zip) keys seen so far.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.sink.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::NamedTempFile;

    fn report_into(file: &NamedTempFile) -> ZipReport {
        ZipReport::new(Box::new(file.reopen().unwrap()))
    }

    #[test]
    fn writes_one_running_line_per_record() {
        let file = NamedTempFile::new().unwrap();
        let mut report = report_into(&file);

        report.record("C00177436", "30004", 384).unwrap();
        report.record("C00384818", "02895", 250).unwrap();
        report.record("C00177436", "30004", 333).unwrap();
        report.flush().unwrap();

        let got = fs::read_to_string(file.path()).unwrap();
        let expected = "\
C00177436|30004|384|1|384
C00384818|02895|250|1|250
C00177436|30004|359|2|717
";
        assert_eq!(got, expected);
        assert_eq!(report.group_count(), 2);
    }

    #[test]
    fn same_zip_under_different_committees_stays_separate() {
        let file = NamedTempFile::new().unwrap();
        let mut report = report_into(&file);

        report.record("C00000001", "90017", 100).unwrap();
        let snapshot = report.record("C00000002", "90017", 500).unwrap();

        assert_eq!(snapshot.count, 1);
        assert_eq!(snapshot.total, 500);
        assert_eq!(report.group_count(), 2);
    }

    #[test]
    fn count_is_non_decreasing_and_total_cumulative_per_key() {
        let file = NamedTempFile::new().unwrap();
        let mut report = report_into(&file);

        let amounts = [40, 15, 220, 3];
        let mut running_total = 0;
        for (i, &amount) in amounts.iter().enumerate() {
            running_total += amount;
            let snapshot = report.record("C00629618", "90017", amount).unwrap();
            assert_eq!(snapshot.count, i as u64 + 1);
            assert_eq!(snapshot.total, running_total);
        }
    }
}
