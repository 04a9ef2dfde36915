pub mod error;
pub mod field;
pub mod record;

pub use error::{PrepError, Result};
pub use field::{FIELDS, Field, FormatRule, REQUIRED_FIELDS};
pub use record::{Record, format_date};
