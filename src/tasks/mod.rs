mod pipeline;

pub use pipeline::{PipelineError, ReportPipeline, RunStats};
