use std::io::Write;
use std::time::Instant;

use log::info;
use serde::Serialize;
use thiserror::Error;

use crate::core::{ContributionRecord, Screened, screen};
use crate::reports::{DateReport, ZipReport};
use crate::streams::RecordStream;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Counters describing one full run of the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunStats {
    pub records_seen: u64,
    pub malformed_lines: u64,
    pub skipped_zip: u64,
    pub skipped_date: u64,
    pub zip_groups: u64,
    pub date_groups: u64,
    pub elapsed_seconds: f64,
}

/// Drives a record stream through both reports.
///
/// Each pulled record is screened once and routed independently: the zip
/// report gets a line immediately, the date report accumulates and is
/// written after the stream is exhausted. Records a report cannot use are
/// counted, never fatal.
pub struct ReportPipeline {
    stream: Box<dyn RecordStream>,
    zip_report: ZipReport,
    date_report: DateReport,
    date_sink: Box<dyn Write>,

    progress_interval: u64,
    max_records: Option<u64>,

    processed: u64,
    skipped_zip: u64,
    skipped_date: u64,
    start_time: Instant,
    last_report_time: Instant,
}

impl ReportPipeline {
    pub fn new(
        stream: Box<dyn RecordStream>,
        zip_sink: Box<dyn Write>,
        date_sink: Box<dyn Write>,
        progress_interval: u64,
        max_records: Option<u64>,
    ) -> Result<Self, PipelineError> {
        if progress_interval == 0 {
            return Err(PipelineError::InvalidParameter(
                "progress_interval must be > 0".to_string(),
            ));
        }

        Ok(Self {
            stream,
            zip_report: ZipReport::new(zip_sink),
            date_report: DateReport::new(),
            date_sink,
            progress_interval,
            max_records,
            processed: 0,
            skipped_zip: 0,
            skipped_date: 0,
            start_time: Instant::now(),
            last_report_time: Instant::now(),
        })
    }

    /// Consumes the stream and produces both reports.
    ///
    /// Returns the run counters; also logs them, along with a progress
    /// line every `progress_interval` records.
    pub fn run(&mut self) -> Result<RunStats, PipelineError> {
        self.start_time = Instant::now();
        self.last_report_time = self.start_time;

        while self.stream.has_more_records() {
            if let Some(max) = self.max_records {
                if self.processed >= max {
                    break;
                }
            }
            let Some(record) = self.stream.next_record() else {
                break;
            };
            self.processed += 1;

            match screen(&record) {
                Some(screened) => self.route(&record, &screened)?,
                None => {
                    self.skipped_zip += 1;
                    self.skipped_date += 1;
                }
            }

            if self.processed % self.progress_interval == 0 {
                self.report_progress();
            }
        }

        self.zip_report.flush()?;
        self.date_report.finish(&mut *self.date_sink)?;

        let stats = self.stats();
        info!("zip report: {} entries skipped", stats.skipped_zip);
        info!("date report: {} entries skipped", stats.skipped_date);
        Ok(stats)
    }

    pub fn stats(&self) -> RunStats {
        RunStats {
            records_seen: self.processed,
            malformed_lines: self.stream.malformed_records(),
            skipped_zip: self.skipped_zip,
            skipped_date: self.skipped_date,
            zip_groups: self.zip_report.group_count() as u64,
            date_groups: self.date_report.group_count() as u64,
            elapsed_seconds: self.start_time.elapsed().as_secs_f64(),
        }
    }

    fn route(
        &mut self,
        record: &ContributionRecord,
        screened: &Screened,
    ) -> Result<(), PipelineError> {
        match &screened.zip5 {
            Some(zip5) => {
                self.zip_report
                    .record(&record.committee_id, zip5, screened.amount)?;
            }
            None => self.skipped_zip += 1,
        }
        match screened.date {
            Some(date) => self
                .date_report
                .record(&record.committee_id, date, screened.amount),
            None => self.skipped_date += 1,
        }
        Ok(())
    }

    fn report_progress(&mut self) {
        let now = Instant::now();
        let since_last = now.duration_since(self.last_report_time).as_secs_f64();
        let rate = if since_last > 0.0 {
            self.progress_interval as f64 / since_last
        } else {
            0.0
        };
        info!(
            "Line {}, time elapsed: {:.3}, time since last report: {:.3}, rate: {:.3} Hz",
            self.processed,
            self.start_time.elapsed().as_secs_f64(),
            since_last,
            rate,
        );
        self.last_report_time = now;
    }
}
