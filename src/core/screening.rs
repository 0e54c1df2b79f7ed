use chrono::NaiveDate;

use crate::core::record::ContributionRecord;

/// A record that passed the primary screen, with its amount parsed and
/// per-report eligibility resolved.
///
/// `zip5` and `date` are independent: a record can feed one report, both,
/// or neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screened {
    pub amount: i64,
    pub zip5: Option<String>,
    pub date: Option<NaiveDate>,
}

/// Applies the record-level screen.
///
/// Returns `None` when the record is unusable for both reports: a
/// non-empty OTHER_ID (the contribution came from another filer, not an
/// individual), an empty committee id, or an empty or non-integer amount.
pub fn screen(record: &ContributionRecord) -> Option<Screened> {
    if !record.other_id.is_empty() || record.committee_id.is_empty() || record.amount.is_empty() {
        return None;
    }
    let amount: i64 = record.amount.parse().ok()?;

    Some(Screened {
        amount,
        zip5: zip_prefix(&record.zip_code).map(str::to_string),
        date: parse_transaction_date(&record.transaction_date),
    })
}

/// The 5-digit grouping prefix of a zip field, if the field is at least
/// five characters long and the prefix is fully numeric.
pub fn zip_prefix(zip_code: &str) -> Option<&str> {
    let prefix = zip_code.get(..5)?;
    prefix.bytes().all(|b| b.is_ascii_digit()).then_some(prefix)
}

/// Parses an 8-digit `MMDDYYYY` transaction date.
///
/// Only calendar-valid dates strictly after the Unix epoch are accepted;
/// `13012017` (month 13), `01332017` (day 33) and `02292017` (not a leap
/// year) are all rejected.
pub fn parse_transaction_date(raw: &str) -> Option<NaiveDate> {
    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let date = NaiveDate::parse_from_str(raw, "%m%d%Y").ok()?;
    let timestamp = date.and_hms_opt(0, 0, 0)?.and_utc().timestamp();
    (timestamp > 0).then_some(date)
}
