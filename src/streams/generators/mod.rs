mod synthetic;

pub use synthetic::SyntheticContributionStream;
