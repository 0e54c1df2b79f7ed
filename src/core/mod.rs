mod record;
mod screening;

pub use record::ContributionRecord;
pub use screening::{Screened, parse_transaction_date, screen, zip_prefix};
