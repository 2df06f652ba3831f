pub mod aggregation;
mod errors;
pub mod format;
mod tracker;
pub mod views;

pub use aggregation::{last_transaction_date, summarize_by_category, summarize_by_type, CategoryTotal, TypeTotals};
pub use errors::RegisterError;
pub use format::{Formatter, Locale};
pub use tracker::Tracker;
pub use views::{CategorySummary, Dashboard, Highlights, PeriodHighlight, Resume, TransactionView};
