mod date_report;
mod zip_report;

use std::io::{Error, Write};

use crate::estimators::AggregateSnapshot;

pub use date_report::{DateKey, DateReport};
pub use zip_report::{ZipKey, ZipReport};

/// Writes one report line: `id|group|median|count|total`.
///
/// The median is rounded half-away-from-zero to a whole dollar at this
/// boundary; counts and totals are exact.
pub(crate) fn write_report_line(
    sink: &mut dyn Write,
    committee_id: &str,
    group: &str,
    snapshot: &AggregateSnapshot,
) -> Result<(), Error> {
    writeln!(
        sink,
        "{}|{}|{}|{}|{}",
        committee_id,
        group,
        snapshot.median.round() as i64,
        snapshot.count,
        snapshot.total,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(median: f64, total: i64, count: u64) -> String {
        let mut out = Vec::new();
        let snapshot = AggregateSnapshot {
            median,
            total,
            count,
        };
        write_report_line(&mut out, "C00629618", "90017", &snapshot).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn fields_are_pipe_delimited_in_report_order() {
        assert_eq!(line(40.0, 40, 1), "C00629618|90017|40|1|40\n");
    }

    #[test]
    fn median_rounds_half_away_from_zero() {
        assert_eq!(line(212.5, 425, 2), "C00629618|90017|213|2|425\n");
        assert_eq!(line(-212.5, -425, 2), "C00629618|90017|-213|2|-425\n");
        assert_eq!(line(212.4, 425, 2), "C00629618|90017|212|2|425\n");
    }
}
