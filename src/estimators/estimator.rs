/// Online scalar estimator over a stream of integer amounts.
///
/// Implementations accept values incrementally via [`ingest`] and expose
/// the current estimate via [`estimation`].
///
/// [`ingest`]: Estimator::ingest
/// [`estimation`]: Estimator::estimation
pub trait Estimator {
    /// Incorporates a new value and returns the estimate over everything
    /// ingested so far, including this value.
    fn ingest(&mut self, value: i64) -> f64;

    /// Returns the current estimate without mutating state.
    fn estimation(&self) -> f64;

    /// Returns the estimator to its freshly constructed state.
    fn reset(&mut self);
}
