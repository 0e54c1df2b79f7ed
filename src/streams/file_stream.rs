use std::fs::File;
use std::io::{BufRead, BufReader, Error, Seek, SeekFrom};
use std::path::Path;

use log::warn;

use crate::core::ContributionRecord;
use crate::streams::RecordStream;

/// Contribution records read line by line from a pipe-delimited file.
///
/// Lines with too few fields are skipped and counted rather than ending
/// the stream; a read error ends the stream after a warning.
pub struct ContributionFileStream {
    reader: BufReader<File>,
    line: String,
    finished: bool,
    malformed: u64,
}

impl ContributionFileStream {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path)?;
        Ok(Self {
            reader: BufReader::new(file),
            line: String::new(),
            finished: false,
            malformed: 0,
        })
    }
}

impl RecordStream for ContributionFileStream {
    fn has_more_records(&self) -> bool {
        !self.finished
    }

    fn next_record(&mut self) -> Option<ContributionRecord> {
        while !self.finished {
            self.line.clear();
            match self.reader.read_line(&mut self.line) {
                Ok(0) => self.finished = true,
                Ok(_) => match ContributionRecord::from_line(&self.line) {
                    Some(record) => return Some(record),
                    None => self.malformed += 1,
                },
                Err(e) => {
                    warn!("stopping after read error: {e}");
                    self.finished = true;
                }
            }
        }
        None
    }

    fn malformed_records(&self) -> u64 {
        self.malformed
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.reader.seek(SeekFrom::Start(0))?;
        self.finished = false;
        self.malformed = 0;
        Ok(())
    }
}
