use std::io::Error;

use crate::core::ContributionRecord;

/// Pull-based interface for sources of contribution records.
///
/// Implementations may represent finite datasets (e.g., files) or
/// unbounded generators.
pub trait RecordStream {
    /// Indicates whether the stream *may* produce more records.
    ///
    /// Finite streams should return `false` once exhausted. Unbounded
    /// generators typically return `true` always.
    ///
    /// This call should be cheap and side effect free. If it returns
    /// `false`, a subsequent call to [`next_record`] must return `None`.
    ///
    /// [`next_record`]: RecordStream::next_record
    fn has_more_records(&self) -> bool;

    /// Produces the next record, or `None` if the stream is exhausted.
    ///
    /// Implementations should not panic on normal end-of-stream
    /// conditions. Sources that can contain malformed lines may skip them
    /// and continue, or end the stream (returning `None`).
    fn next_record(&mut self) -> Option<ContributionRecord>;

    /// Number of input lines skipped because they could not be parsed
    /// into a record at all. Zero for sources that cannot produce
    /// malformed input.
    fn malformed_records(&self) -> u64 {
        0
    }

    /// Resets the stream to its initial state.
    ///
    /// For file-backed streams this typically seeks back to the start of
    /// the input; for generators it usually re-seeds the RNG and clears
    /// internal counters.
    ///
    /// Returns an error if the underlying source cannot be reopened or
    /// sought.
    fn restart(&mut self) -> Result<(), Error>;
}
