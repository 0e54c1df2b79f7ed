pub mod dummies;
pub mod stubs;

pub use dummies::{contribution, raw_line};
pub use stubs::VecRecordStream;
