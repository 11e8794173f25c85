use std::fmt;

use serde::{Serialize, Serializer};

// ---------------------------------------------------------------------------
// CellValue — A single loosely typed spreadsheet cell
// ---------------------------------------------------------------------------

/// A spreadsheet cell as read from the source file.
///
/// Serializes `Empty` as `""`, which is how the row table payload represents
/// missing values.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    /// True for `Empty`, NaN and blank text.
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Float(v) => v.is_nan(),
            CellValue::Text(s) => s.trim().is_empty(),
            CellValue::Bool(_) | CellValue::Int(_) => false,
        }
    }

    /// Numeric view of the cell. Text is parsed after trimming; booleans,
    /// unparseable text and non-finite values (`"inf"`, `"NaN"`) give `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Int(v) => Some(*v as f64),
            CellValue::Float(v) => Some(*v).filter(|v| v.is_finite()),
            CellValue::Text(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            _ => None,
        }
    }

    /// Integer view of the cell. Floats must be integral to qualify.
    pub fn as_i64(&self) -> Option<i64> {
        if let CellValue::Int(v) = self {
            return Some(*v);
        }
        if let CellValue::Text(s) = self {
            if let Ok(v) = s.trim().parse::<i64>() {
                return Some(v);
            }
        }
        self.as_f64()
            .filter(|v| v.fract() == 0.0 && v.abs() < i64::MAX as f64)
            .map(|v| v as i64)
    }

    /// Trimmed text view of the cell, `None` when empty.
    pub fn as_text(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        Some(self.to_string().trim().to_string())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(v) => write!(f, "{v}"),
            CellValue::Int(v) => write!(f, "{v}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Text(v) => f.write_str(v),
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Empty => serializer.serialize_str(""),
            CellValue::Float(v) if !v.is_finite() => serializer.serialize_str(""),
            CellValue::Bool(v) => serializer.serialize_bool(*v),
            CellValue::Int(v) => serializer.serialize_i64(*v),
            CellValue::Float(v) => serializer.serialize_f64(*v),
            CellValue::Text(v) => serializer.serialize_str(v),
        }
    }
}

impl From<Option<i64>> for CellValue {
    fn from(value: Option<i64>) -> Self {
        value.map(CellValue::Int).unwrap_or_default()
    }
}

impl From<Option<f64>> for CellValue {
    fn from(value: Option<f64>) -> Self {
        value.map(CellValue::Float).unwrap_or_default()
    }
}

impl From<Option<String>> for CellValue {
    fn from(value: Option<String>) -> Self {
        value.map(CellValue::Text).unwrap_or_default()
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

// ---------------------------------------------------------------------------
// Field — The canonical semantic columns
// ---------------------------------------------------------------------------

/// One of the five recognized semantic columns, in header-matching precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Year,
    Area,
    Price,
    Demand,
    Size,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Year,
        Field::Area,
        Field::Price,
        Field::Demand,
        Field::Size,
    ];

    /// Canonical (lowercase) column name.
    pub fn name(self) -> &'static str {
        match self {
            Field::Year => "year",
            Field::Area => "area",
            Field::Price => "price",
            Field::Demand => "demand",
            Field::Size => "size",
        }
    }

    /// Header substrings that map onto this field.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Field::Year => &["year"],
            Field::Area => &["area", "locality", "location"],
            Field::Price => &["price", "avgprice"],
            Field::Demand => &["demand", "queries"],
            Field::Size => &["size", "area_sq", "sqft"],
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Record — One normalized row
// ---------------------------------------------------------------------------

/// One normalized row: typed canonical fields plus passthrough columns in
/// source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    pub year: Option<i64>,
    pub area: Option<String>,
    pub price: Option<f64>,
    pub demand: Option<f64>,
    pub size: Option<f64>,
    pub extra: Vec<(String, CellValue)>,
}

impl Record {
    /// Cell view of a column, canonical or passthrough. Unknown columns are empty.
    pub fn get(&self, column: &str) -> CellValue {
        match Field::from_name(column) {
            Some(field) => self.field(field),
            None => self
                .extra
                .iter()
                .find(|(name, _)| name == column)
                .map(|(_, v)| v.clone())
                .unwrap_or_default(),
        }
    }

    pub fn field(&self, field: Field) -> CellValue {
        match field {
            Field::Year => self.year.into(),
            Field::Area => self.area.clone().into(),
            Field::Price => self.price.into(),
            Field::Demand => self.demand.into(),
            Field::Size => self.size.into(),
        }
    }

    /// True when no canonical or passthrough value is present.
    pub fn is_blank(&self) -> bool {
        self.year.is_none()
            && self.area.is_none()
            && self.price.is_none()
            && self.demand.is_none()
            && self.size.is_none()
            && self.extra.iter().all(|(_, v)| v.is_empty())
    }
}
