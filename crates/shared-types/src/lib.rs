pub mod types;

pub use types::{ExtractionResult, FormattedRecord, Severity, ShareholderRecord};
