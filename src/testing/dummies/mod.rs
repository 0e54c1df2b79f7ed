pub mod records;

pub use records::{contribution, raw_line};
