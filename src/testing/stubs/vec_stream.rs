use std::io::Error;

use crate::core::ContributionRecord;
use crate::streams::RecordStream;

/// In-memory record stream over a fixed vector.
pub struct VecRecordStream {
    pub records: Vec<ContributionRecord>,
    idx: usize,
}

impl VecRecordStream {
    pub fn new(records: Vec<ContributionRecord>) -> Self {
        Self { records, idx: 0 }
    }
}

impl RecordStream for VecRecordStream {
    fn has_more_records(&self) -> bool {
        self.idx < self.records.len()
    }

    fn next_record(&mut self) -> Option<ContributionRecord> {
        if !self.has_more_records() {
            return None;
        }

        let record = self.records[self.idx].clone();
        self.idx += 1;
        Some(record)
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.idx = 0;
        Ok(())
    }
}
