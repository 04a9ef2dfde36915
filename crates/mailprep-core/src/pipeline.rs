//! The parse pipeline: header resolution, then one record per body row.

use std::time::Instant;

use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};
use tracing::{debug, info, warn};

use mailprep_ingest::CsvRows;
use mailprep_map::{HeaderMap, resolve_headers};
use mailprep_model::{Record, Result};

use crate::builder::build_record;

/// Caller-supplied pipeline configuration.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Require the full set of mandatory fields to be mapped.
    pub strict: bool,
    /// Worker count for row transformation. 1 means in-place serial
    /// processing; higher values fan rows out over a bounded pool.
    pub jobs: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            strict: false,
            jobs: 1,
        }
    }
}

/// Transform a raw CSV table into records.
///
/// The header is resolved once, synchronously; rows are then transformed
/// independently, serially or on a worker pool. Output order always equals
/// input order. The first row error aborts the whole run.
pub fn parse(input: &CsvRows, options: &ParseOptions) -> Result<Vec<Record>> {
    let start = Instant::now();
    let map = resolve_headers(&input.header, options.strict)?;
    let records = if options.jobs > 1 {
        parse_parallel(&map, &input.rows, options.jobs)?
    } else {
        parse_serial(&map, &input.rows)?
    };
    info!(
        rows = input.rows.len(),
        records = records.len(),
        mapped_fields = map.len(),
        jobs = options.jobs,
        duration_ms = start.elapsed().as_millis(),
        "parse complete"
    );
    Ok(records)
}

fn parse_serial(map: &HeaderMap, rows: &[Vec<String>]) -> Result<Vec<Record>> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| build_record(map, row, index + 1))
        .collect()
}

/// Indexed parallel map over the body rows. Collecting through `Result`
/// both preserves input order and stops at the first row error.
fn parse_parallel(map: &HeaderMap, rows: &[Vec<String>], jobs: usize) -> Result<Vec<Record>> {
    let pool = match rayon::ThreadPoolBuilder::new().num_threads(jobs).build() {
        Ok(pool) => pool,
        Err(error) => {
            warn!(%error, "worker pool unavailable, processing serially");
            return parse_serial(map, rows);
        }
    };
    debug!(jobs, rows = rows.len(), "row fan-out");
    pool.install(|| {
        rows.par_iter()
            .enumerate()
            .map(|(index, row)| build_record(map, row, index + 1))
            .collect()
    })
}
