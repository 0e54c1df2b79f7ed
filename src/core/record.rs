/// The columns of an individual-contributions line that the reports use.
///
/// All fields are kept as raw text; screening decides what is usable.
/// Field layout follows the FEC "Contributions by Individuals" data
/// dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributionRecord {
    pub committee_id: String,
    pub zip_code: String,
    pub transaction_date: String,
    pub amount: String,
    pub other_id: String,
}

impl ContributionRecord {
    /// Extracts the relevant columns from one pipe-delimited line.
    ///
    /// Returns `None` when the line has too few fields to carry them;
    /// callers treat such lines as malformed and move on.
    pub fn from_line(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let mut fields = line.split('|');
        let committee_id = fields.next()?; // field 0: CMTE_ID
        let zip_code = fields.nth(9)?; // field 10: ZIP_CODE
        let transaction_date = fields.nth(2)?; // field 13: TRANSACTION_DT
        let amount = fields.next()?; // field 14: TRANSACTION_AMT
        let other_id = fields.next()?; // field 15: OTHER_ID

        Some(Self {
            committee_id: committee_id.to_string(),
            zip_code: zip_code.to_string(),
            transaction_date: transaction_date.to_string(),
            amount: amount.to_string(),
            other_id: other_id.to_string(),
        })
    }
}
