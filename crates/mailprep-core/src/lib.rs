//! Record building and the parse pipeline.

pub mod builder;
pub mod pipeline;

pub use builder::build_record;
pub use pipeline::{ParseOptions, parse};
