//! Column normalization: maps loosely named headers onto the canonical
//! fields, coerces their values and drops blank rows.
//!
//! Header matching is a case-insensitive substring test checked in field
//! order (year, area, price, demand, size). The first header to claim a
//! canonical field keeps it; later headers that would map to the same field
//! stay as passthrough columns under their own lowercased names.

use std::collections::HashSet;
use std::path::Path;

use crate::error::Result;
use crate::loader;
use crate::models::{CellValue, Dataset, Field, RawTable, Record};

/// Canonical field a header maps to, if any.
///
/// The header is compared lowercased and trimmed; the first field in
/// precedence order with a matching alias wins.
pub fn canonical_field(header: &str) -> Option<Field> {
    let name = header.trim().to_lowercase();
    Field::ALL
        .into_iter()
        .find(|field| field.aliases().iter().any(|alias| name.contains(alias)))
}

/// Where each source column ends up.
#[derive(Debug, Clone, PartialEq)]
enum ColumnTarget {
    Canonical(Field),
    Passthrough(String),
}

fn plan_columns(headers: &[String]) -> Vec<ColumnTarget> {
    let mut claimed: HashSet<Field> = HashSet::new();
    let mut names: HashSet<String> = HashSet::new();
    let mut plan = Vec::with_capacity(headers.len());

    for (idx, raw) in headers.iter().enumerate() {
        let mut name = raw.trim().to_lowercase();
        if name.is_empty() {
            name = format!("unnamed: {idx}");
        }

        match canonical_field(&name) {
            Some(field) if claimed.insert(field) => {
                names.insert(field.name().to_string());
                plan.push(ColumnTarget::Canonical(field));
                continue;
            }
            Some(field) => {
                tracing::warn!(
                    header = %raw,
                    field = %field,
                    "header maps to a field already claimed by an earlier column; keeping it as passthrough"
                );
            }
            None => {}
        }

        let unique = unique_name(&name, &names);
        names.insert(unique.clone());
        plan.push(ColumnTarget::Passthrough(unique));
    }

    plan
}

fn unique_name(name: &str, taken: &HashSet<String>) -> String {
    if !taken.contains(name) {
        return name.to_string();
    }
    (1..)
        .map(|n| format!("{name}.{n}"))
        .find(|candidate| !taken.contains(candidate))
        .unwrap_or_else(|| name.to_string())
}

/// Normalize a raw table into a [`Dataset`].
///
/// Running this again on `dataset.to_raw_table()` yields the same dataset.
pub fn normalize(table: RawTable) -> Dataset {
    let plan = plan_columns(&table.headers);
    let columns: Vec<String> = plan
        .iter()
        .map(|target| match target {
            ColumnTarget::Canonical(field) => field.name().to_string(),
            ColumnTarget::Passthrough(name) => name.clone(),
        })
        .collect();

    let total = table.rows.len();
    let records: Vec<Record> = table
        .rows
        .into_iter()
        .map(|row| build_record(&plan, row))
        .filter(|record| !record.is_blank())
        .collect();

    tracing::debug!(
        columns = ?columns,
        rows = records.len(),
        dropped = total - records.len(),
        "normalized dataset"
    );

    Dataset::new(columns, records)
}

fn build_record(plan: &[ColumnTarget], row: Vec<CellValue>) -> Record {
    let mut record = Record::default();
    let mut cells = row.into_iter();

    for target in plan {
        let cell = cells.next().unwrap_or_default();
        match target {
            ColumnTarget::Canonical(Field::Year) => record.year = cell.as_i64(),
            ColumnTarget::Canonical(Field::Area) => record.area = cell.as_text(),
            ColumnTarget::Canonical(Field::Price) => record.price = cell.as_f64(),
            ColumnTarget::Canonical(Field::Demand) => record.demand = cell.as_f64(),
            ColumnTarget::Canonical(Field::Size) => record.size = cell.as_f64(),
            ColumnTarget::Passthrough(name) => record.extra.push((name.clone(), cell)),
        }
    }

    record
}

/// Load the first sheet at `path` and normalize it.
pub fn normalize_path<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    Ok(normalize(loader::load_path(path)?))
}

/// Load a workbook from memory and normalize it.
pub fn normalize_bytes(bytes: &[u8]) -> Result<Dataset> {
    Ok(normalize(loader::load_bytes(bytes)?))
}
