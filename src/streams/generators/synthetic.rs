use std::io::{Error, ErrorKind};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::ContributionRecord;
use crate::streams::RecordStream;

/// Seeded generator of synthetic contribution records.
///
/// Produces well-formed records over a fixed pool of committee ids, with a
/// configurable percentage of records corrupted so that screening drops
/// them from at least one report. Useful for exercising the pipeline
/// without a multi-gigabyte input file.
#[derive(Debug)]
pub struct SyntheticContributionStream {
    seed: u64,
    rng: StdRng,
    committees: Vec<String>,
    noise_percentage: u32,
    max_records: Option<usize>,
    produced: usize,
}

impl SyntheticContributionStream {
    pub fn new(
        committees: usize,
        noise_percentage: u32,
        max_records: Option<usize>,
        seed: u64,
    ) -> Result<Self, Error> {
        if committees == 0 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "Committee pool must not be empty",
            ));
        }
        if noise_percentage > 100 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "Noise percentage must be in [0, 100]",
            ));
        }

        Ok(Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            committees: (0..committees)
                .map(|i| format!("C{:08}", 90_000_000 + i))
                .collect(),
            noise_percentage,
            max_records,
            produced: 0,
        })
    }

    fn gen_zip(&mut self) -> String {
        format!("{:05}", self.rng.random_range(0..100_000))
    }

    /// Days are capped at 28 so every generated date is calendar-valid.
    fn gen_date(&mut self) -> String {
        format!(
            "{:02}{:02}{}",
            self.rng.random_range(1..=12),
            self.rng.random_range(1..=28),
            self.rng.random_range(2015..=2017),
        )
    }

    fn corrupt(&mut self, record: &mut ContributionRecord) {
        match self.rng.random_range(0..3u8) {
            0 => record.zip_code.truncate(3),
            1 => record.transaction_date = "13332017".to_string(),
            _ => record.other_id = "C00000001".to_string(),
        }
    }
}

impl RecordStream for SyntheticContributionStream {
    fn has_more_records(&self) -> bool {
        self.max_records.map_or(true, |max| self.produced < max)
    }

    fn next_record(&mut self) -> Option<ContributionRecord> {
        if !self.has_more_records() {
            return None;
        }

        let committee_id =
            self.committees[self.rng.random_range(0..self.committees.len())].clone();
        let mut record = ContributionRecord {
            committee_id,
            zip_code: self.gen_zip(),
            transaction_date: self.gen_date(),
            amount: self.rng.random_range(1..=2_700i64).to_string(),
            other_id: String::new(),
        };

        let roll: u32 = self.rng.random_range(1..=100);
        if roll <= self.noise_percentage {
            self.corrupt(&mut record);
        }

        self.produced += 1;
        Some(record)
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.produced = 0;
        Ok(())
    }
}
