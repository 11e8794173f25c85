//! Shared test fixtures for the realty-insights integration tests.
//!
//! Provides in-memory raw tables for the pure query functions, and minimal
//! `.xlsx` workbooks (written with `zip`) for the loader and analyzer tests.

#![allow(dead_code)]

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use realty_insights::{normalize, CellValue, Dataset, RawTable};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

// ---------------------------------------------------------------------------
// Raw tables
// ---------------------------------------------------------------------------

pub fn text(s: &str) -> CellValue {
    CellValue::Text(s.to_string())
}

pub fn num(v: f64) -> CellValue {
    CellValue::Float(v)
}

pub fn int(v: i64) -> CellValue {
    CellValue::Int(v)
}

pub fn empty() -> CellValue {
    CellValue::Empty
}

pub fn raw_table(headers: &[&str], rows: Vec<Vec<CellValue>>) -> RawTable {
    RawTable::new(headers.iter().map(|h| h.to_string()).collect(), rows)
}

/// Headers as they tend to appear in real exports, mixed case and padded.
pub fn sample_headers() -> Vec<&'static str> {
    vec![
        "Year",
        " Final Location ",
        "Avg Price (INR)",
        "Total Queries",
        "Flat Size (sqft)",
        "Notes",
    ]
}

/// Two areas over three years plus one row for a third area.
pub fn sample_rows() -> Vec<Vec<CellValue>> {
    vec![
        vec![num(2020.0), text("Wakad"), num(5_000_000.0), num(10.0), num(950.0), text("launch")],
        vec![num(2021.0), text("Wakad "), num(5_500_000.0), num(12.0), num(1000.0), empty()],
        vec![num(2020.0), text("Aundh"), num(7_000_000.0), num(8.0), num(1200.0), empty()],
        vec![num(2021.0), text("aundh"), num(7_700_000.0), num(9.0), num(1150.0), empty()],
        vec![num(2022.0), text("Aundh"), num(8_400_000.0), num(11.0), num(1180.0), text("metro")],
        vec![empty(), empty(), empty(), empty(), empty(), empty()],
        vec![num(2022.0), text("Akurdi"), num(4_000_000.0), text("n/a"), empty(), empty()],
    ]
}

pub fn sample_dataset() -> Dataset {
    normalize(raw_table(&sample_headers(), sample_rows()))
}

/// The two-row Wakad dataset used for the end-to-end summary checks.
pub fn wakad_dataset() -> Dataset {
    normalize(raw_table(
        &["year", "area", "price", "demand"],
        vec![
            vec![int(2020), text("Wakad"), num(5_000_000.0), num(10.0)],
            vec![int(2021), text("Wakad"), num(5_500_000.0), num(12.0)],
        ],
    ))
}

// ---------------------------------------------------------------------------
// Workbooks
// ---------------------------------------------------------------------------

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/></Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

const WORKBOOK: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="Sheet1" sheetId="1" r:id="rId1"/></sheets></workbook>"#;

const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#;

fn column_letters(mut idx: usize) -> String {
    let mut out = Vec::new();
    loop {
        out.push((b'A' + (idx % 26) as u8) as char);
        if idx < 26 {
            break;
        }
        idx = idx / 26 - 1;
    }
    out.iter().rev().collect()
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn cell_xml(row: usize, col: usize, value: &CellValue) -> String {
    let r = format!("{}{}", column_letters(col), row);
    match value {
        CellValue::Empty => String::new(),
        CellValue::Bool(v) => format!(r#"<c r="{r}" t="b"><v>{}</v></c>"#, u8::from(*v)),
        CellValue::Int(v) => format!(r#"<c r="{r}"><v>{v}</v></c>"#),
        CellValue::Float(v) => format!(r#"<c r="{r}"><v>{v}</v></c>"#),
        CellValue::Text(v) => format!(
            r#"<c r="{r}" t="inlineStr"><is><t xml:space="preserve">{}</t></is></c>"#,
            escape_xml(v)
        ),
    }
}

fn sheet_xml(headers: &[&str], rows: &[Vec<CellValue>]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
    );

    let header_cells: String = headers
        .iter()
        .enumerate()
        .map(|(c, h)| cell_xml(1, c, &text(h)))
        .collect();
    xml.push_str(&format!(r#"<row r="1">{header_cells}</row>"#));

    for (i, row) in rows.iter().enumerate() {
        let r = i + 2;
        let cells: String = row
            .iter()
            .enumerate()
            .map(|(c, v)| cell_xml(r, c, v))
            .collect();
        xml.push_str(&format!(r#"<row r="{r}">{cells}</row>"#));
    }

    xml.push_str("</sheetData></worksheet>");
    xml
}

/// Build a single-sheet `.xlsx` workbook in memory.
pub fn xlsx_bytes(headers: &[&str], rows: &[Vec<CellValue>]) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    {
        let mut zip = ZipWriter::new(&mut out);
        let options = FileOptions::<()>::default().compression_method(CompressionMethod::Deflated);

        let sheet = sheet_xml(headers, rows);
        let parts: [(&str, &str); 5] = [
            ("[Content_Types].xml", CONTENT_TYPES),
            ("_rels/.rels", ROOT_RELS),
            ("xl/workbook.xml", WORKBOOK),
            ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS),
            ("xl/worksheets/sheet1.xml", sheet.as_str()),
        ];
        for (name, body) in parts {
            zip.start_file(name, options).unwrap();
            zip.write_all(body.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
    }
    out.into_inner()
}

/// The sample table as `.xlsx` bytes.
pub fn sample_xlsx() -> Vec<u8> {
    xlsx_bytes(&sample_headers(), &sample_rows())
}

/// Write a workbook to `dir/name` and return its path.
pub fn write_xlsx(dir: &Path, name: &str, headers: &[&str], rows: &[Vec<CellValue>]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, xlsx_bytes(headers, rows)).unwrap();
    path
}
