//! Header resolution.
//!
//! Each incoming column name is tested against every field's anchored
//! pattern. The resulting [`HeaderMap`] is built once per input and is
//! immutable afterwards; resolution is deterministic for a given header
//! row.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use tracing::debug;

use mailprep_model::{FIELDS, Field, PrepError, REQUIRED_FIELDS, Result};

static FIELD_PATTERNS: LazyLock<Vec<(Field, Regex)>> = LazyLock::new(|| {
    FIELDS
        .into_iter()
        .map(|field| {
            let regex = RegexBuilder::new(field.header_pattern())
                .case_insensitive(true)
                .build()
                .expect("field registry patterns are static and valid");
            (field, regex)
        })
        .collect()
});

/// Mapping from semantic field to zero-based column index for one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    columns: BTreeMap<Field, usize>,
}

impl HeaderMap {
    /// The column index mapped to `field`, if any.
    pub fn column(&self, field: Field) -> Option<usize> {
        self.columns.get(&field).copied()
    }

    /// Number of mapped fields.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, usize)> + '_ {
        self.columns.iter().map(|(&field, &index)| (field, index))
    }

    /// Minimum number of columns a data row must have to cover every
    /// mapped index.
    pub fn min_row_width(&self) -> usize {
        self.columns
            .values()
            .max()
            .map(|&index| index + 1)
            .unwrap_or(0)
    }
}

/// Resolve a header row into a [`HeaderMap`].
///
/// Duplicate literal column names fail before any matching. Columns that
/// match no pattern are ignored. When several columns match the same
/// field, the rightmost one wins. With `strict` set, every required field
/// must end up mapped.
pub fn resolve_headers(header: &[String], strict: bool) -> Result<HeaderMap> {
    if header.is_empty() {
        return Err(PrepError::EmptyInput);
    }
    check_duplicate_headers(header)?;

    let mut columns = BTreeMap::new();
    for (index, column) in header.iter().enumerate() {
        let name = column.trim();
        for (field, pattern) in FIELD_PATTERNS.iter() {
            if pattern.is_match(name) {
                // Rightmost match wins; observable when exports repeat a
                // field under different literal names.
                columns.insert(*field, index);
            }
        }
    }

    let map = HeaderMap { columns };
    debug!(
        columns = header.len(),
        mapped = map.len(),
        "header resolved"
    );

    if strict {
        for field in REQUIRED_FIELDS {
            if map.column(field).is_none() {
                return Err(PrepError::MissingRequiredField(field));
            }
        }
    }
    Ok(map)
}

fn check_duplicate_headers(header: &[String]) -> Result<()> {
    let mut seen = BTreeSet::new();
    for column in header {
        if !seen.insert(column.as_str()) {
            return Err(PrepError::DuplicateHeader(column.clone()));
        }
    }
    Ok(())
}
