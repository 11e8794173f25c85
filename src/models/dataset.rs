use serde::ser::{Serialize, SerializeMap, Serializer};

use super::record::{CellValue, Field, Record};

// ---------------------------------------------------------------------------
// RawTable — Header row plus untyped cell rows
// ---------------------------------------------------------------------------

/// A sheet as read from disk: the header row and the data rows below it.
///
/// Rows may be shorter or longer than the header; missing cells read as empty.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self { headers, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Dataset — Normalized rows sharing one sparse schema
// ---------------------------------------------------------------------------

/// The normalized table for one request.
///
/// `columns` lists the canonical and passthrough columns present in the
/// source, in source order. Whether the dataset "has" a field is decided by
/// that list, not by the values in the rows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    columns: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, records: Vec<Record>) -> Self {
        Self { columns, records }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn has_field(&self, field: Field) -> bool {
        self.has_column(field.name())
    }

    /// Same schema, only the records matching `keep`.
    pub fn retain_records<F>(&self, mut keep: F) -> Dataset
    where
        F: FnMut(&Record) -> bool,
    {
        Dataset {
            columns: self.columns.clone(),
            records: self.records.iter().filter(|r| keep(*r)).cloned().collect(),
        }
    }

    /// Same schema, no rows.
    pub fn empty_like(&self) -> Dataset {
        Dataset {
            columns: self.columns.clone(),
            records: Vec::new(),
        }
    }

    /// Non-null prices, in row order. Empty when there is no price column.
    pub fn prices(&self) -> Vec<f64> {
        if !self.has_field(Field::Price) {
            return Vec::new();
        }
        self.records.iter().filter_map(|r| r.price).collect()
    }

    /// Non-null demand values, in row order. Empty when there is no demand column.
    pub fn demands(&self) -> Vec<f64> {
        if !self.has_field(Field::Demand) {
            return Vec::new();
        }
        self.records.iter().filter_map(|r| r.demand).collect()
    }

    /// Distinct non-null years, ascending.
    pub fn years(&self) -> Vec<i64> {
        if !self.has_field(Field::Year) {
            return Vec::new();
        }
        let mut years: Vec<i64> = self.records.iter().filter_map(|r| r.year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    /// Row table for the response payload, one map per record in column order.
    pub fn table_rows(&self) -> Vec<TableRow> {
        self.records
            .iter()
            .map(|r| TableRow {
                cells: self
                    .columns
                    .iter()
                    .map(|c| (c.clone(), r.get(c)))
                    .collect(),
            })
            .collect()
    }

    /// Turn the dataset back into an untyped table with its current headers.
    pub fn to_raw_table(&self) -> RawTable {
        let rows = self
            .records
            .iter()
            .map(|r| self.columns.iter().map(|c| r.get(c)).collect())
            .collect();
        RawTable::new(self.columns.clone(), rows)
    }
}

// ---------------------------------------------------------------------------
// TableRow — One serialized row of the table payload
// ---------------------------------------------------------------------------

/// A row keyed by column name, serialized as a JSON object in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub cells: Vec<(String, CellValue)>,
}

impl TableRow {
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.iter().find(|(c, _)| c == column).map(|(_, v)| v)
    }
}

impl Serialize for TableRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (column, value) in &self.cells {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}
