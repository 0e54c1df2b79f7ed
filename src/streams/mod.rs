mod file_stream;
mod generators;
mod stream;

pub use file_stream::ContributionFileStream;
pub use generators::SyntheticContributionStream;
pub use stream::RecordStream;
