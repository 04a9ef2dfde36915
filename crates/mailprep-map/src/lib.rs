pub mod resolver;

pub use resolver::{HeaderMap, resolve_headers};
