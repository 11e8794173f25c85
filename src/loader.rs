//! Spreadsheet reading via calamine.
//!
//! Only the first worksheet is read. Its first row is the header row and every
//! following row is data; the untyped result is handed to the normalizer.

use std::io::{Cursor, Read, Seek};
use std::path::Path;

use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Range, Reader, Sheets};

use crate::error::{RealtyError, Result};
use crate::models::{CellValue, RawTable};

/// Read the first sheet of the workbook at `path`.
pub fn load_path<P: AsRef<Path>>(path: P) -> Result<RawTable> {
    let path = path.as_ref();
    let workbook = open_workbook_auto(path)
        .map_err(|e| RealtyError::DatasetParse(format!("{}: {e}", path.display())))?;
    let table = read_first_sheet(workbook)?;
    tracing::debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.rows.len(),
        "loaded spreadsheet"
    );
    Ok(table)
}

/// Read the first sheet of a workbook held in memory.
///
/// The format is sniffed from the content, so uploads need no file name.
pub fn load_bytes(bytes: &[u8]) -> Result<RawTable> {
    if bytes.is_empty() {
        return Err(RealtyError::DatasetParse("uploaded file is empty".into()));
    }
    let workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let table = read_first_sheet(workbook)?;
    tracing::debug!(
        bytes = bytes.len(),
        columns = table.headers.len(),
        rows = table.rows.len(),
        "loaded spreadsheet from memory"
    );
    Ok(table)
}

fn read_first_sheet<RS: Read + Seek>(mut workbook: Sheets<RS>) -> Result<RawTable> {
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| RealtyError::DatasetParse("workbook has no worksheets".into()))?
        .map_err(|e| RealtyError::DatasetParse(e.to_string()))?;
    Ok(range_to_table(&range))
}

fn range_to_table(range: &Range<Data>) -> RawTable {
    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return RawTable::default();
    };

    let headers = header_row
        .iter()
        .map(|cell| match cell_value(cell) {
            CellValue::Float(v) if v.fract() == 0.0 => format!("{}", v as i64),
            other => other.to_string(),
        })
        .collect();
    let rows = rows.map(|row| row.iter().map(cell_value).collect()).collect();

    RawTable::new(headers, rows)
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::Bool(v) => CellValue::Bool(*v),
        Data::Int(v) => CellValue::Int(*v),
        Data::Float(v) => CellValue::Float(*v),
        Data::String(v) => CellValue::Text(v.clone()),
        Data::DateTime(v) => CellValue::Float(v.as_f64()),
        Data::DateTimeIso(v) | Data::DurationIso(v) => CellValue::Text(v.clone()),
    }
}
