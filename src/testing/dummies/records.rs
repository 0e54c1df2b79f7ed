use crate::core::ContributionRecord;

/// A record with the given columns and an empty other id.
pub fn contribution(
    committee_id: &str,
    zip_code: &str,
    transaction_date: &str,
    amount: &str,
) -> ContributionRecord {
    ContributionRecord {
        committee_id: committee_id.to_string(),
        zip_code: zip_code.to_string(),
        transaction_date: transaction_date.to_string(),
        amount: amount.to_string(),
        other_id: String::new(),
    }
}

/// A full 21-field `itcont.txt` line carrying the given columns.
pub fn raw_line(
    committee_id: &str,
    zip_code: &str,
    transaction_date: &str,
    amount: &str,
    other_id: &str,
) -> String {
    let mut fields = vec![""; 21];
    fields[0] = committee_id;
    fields[10] = zip_code;
    fields[13] = transaction_date;
    fields[14] = amount;
    fields[15] = other_id;
    fields.join("|")
}
