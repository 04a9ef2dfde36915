//! Subcommand implementations.

use std::fs::File;
use std::io::{self, IsTerminal, Write};

use anyhow::{Context, Result, bail};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use tracing::info;

use mailprep_core::{ParseOptions, parse};
use mailprep_ingest::{CsvRows, read_rows, read_rows_from_path};
use mailprep_model::{FIELDS, Field};

use crate::cli::{OutputFormatArg, RunArgs};
use crate::output::{write_csv, write_json};

/// Normalize one CSV input into records and emit them.
pub fn run(args: &RunArgs) -> Result<()> {
    let fields = selected_fields(args.fields.as_deref())?;
    let table = read_input(args)?;
    let options = ParseOptions {
        strict: args.strict,
        jobs: args.jobs.get(),
    };
    let records = parse(&table, &options)?;

    let mut sink: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    match args.format {
        OutputFormatArg::Csv => write_csv(&mut sink, &records, &fields)?,
        OutputFormatArg::Json => {
            let subset = args.fields.is_some().then_some(fields.as_slice());
            write_json(&mut sink, &records, subset)?;
        }
    }

    let destination = args
        .output
        .as_ref()
        .map_or_else(|| "stdout".to_string(), |path| path.display().to_string());
    info!(records = records.len(), destination = %destination, "output written");
    Ok(())
}

/// Print the semantic field registry.
pub fn run_fields() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Field", "JSON name", "Header pattern", "Rule"]);
    apply_table_style(&mut table);
    for field in FIELDS {
        table.add_row(vec![
            field.name(),
            field.json_name(),
            field.header_pattern(),
            field.format_rule().label(),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn read_input(args: &RunArgs) -> Result<CsvRows> {
    match &args.input {
        Some(path) => {
            read_rows_from_path(path).with_context(|| format!("read {}", path.display()))
        }
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                bail!("no input file given and stdin is a terminal");
            }
            read_rows(stdin.lock()).context("read stdin")
        }
    }
}

/// Resolve `--fields` names against the registry, keeping the given order.
fn selected_fields(names: Option<&[String]>) -> Result<Vec<Field>> {
    let Some(names) = names else {
        return Ok(FIELDS.to_vec());
    };
    let mut fields = Vec::with_capacity(names.len());
    for name in names {
        let trimmed = name.trim();
        let Some(field) = Field::from_name(trimmed) else {
            let valid: Vec<&str> = FIELDS.iter().map(|field| field.name()).collect();
            bail!(
                "unknown field {trimmed:?}; valid names: {}",
                valid.join(", ")
            );
        };
        fields.push(field);
    }
    if fields.is_empty() {
        bail!("--fields given with no field names");
    }
    Ok(fields)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}
