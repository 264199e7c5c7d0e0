pub mod domain;
pub mod error;
pub mod pipeline;
pub mod table;

pub use domain::*;
pub use error::CoreError;
pub use pipeline::{clean, CleanOutcome, CleanSummary, CLEANED_COLUMN, EMAIL_COLUMN};
pub use table::Table;
