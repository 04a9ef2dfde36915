//! Pure value transforms for record normalization.
//!
//! Every function here is a total function over strings: malformed input
//! degrades to a pass-through or empty value, never an error.

pub mod case;
pub mod date;
pub mod name;
pub mod phone;
pub mod zip;

pub use case::{SEPARATORS, lower_case, strip_separators, title_case, upper_case};
pub use date::parse_date;
pub use name::{NameParts, split_full_name};
pub use phone::format_phone;
pub use zip::{split_zip, trim_leading_zeros};
