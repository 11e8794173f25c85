//! Free-text area query parsing.
//!
//! Queries like `"Compare Ambegaon Budruk and Aundh"` or `"Wakad vs Aundh"`
//! are split into area names. Segment boundaries come from the original text,
//! so area names keep whatever casing the caller typed.
//!
//! # Example
//!
//! ```rust
//! use realty_insights::parse_area_query;
//! assert_eq!(parse_area_query("Ambegaon vs Aundh"), vec!["Ambegaon", "Aundh"]);
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::models::AreaInput;

static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s+vs\s+|\s+versus\s+|,|\s+and\s+|\s+&\s+").expect("separator pattern is valid")
});

static FILLER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:compare|analysis\s+of|analysis)\b").expect("filler pattern is valid")
});

const FILLER_WORDS: [&str; 3] = ["compare", "analysis of", "analysis"];

/// Split a free-text query into area names.
///
/// Blank input gives an empty list, which callers treat as "no area filter".
/// Duplicates are kept and names are not case-normalized; matching against
/// the dataset is case-insensitive later on.
pub fn parse_area_query(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut stripped = text.to_lowercase();
    for word in FILLER_WORDS {
        stripped = stripped.replacen(word, "", 1);
    }
    tracing::debug!(query = %text, stripped = %stripped.trim(), "parsing area query");

    SEPARATORS
        .split(text)
        .map(|segment| FILLER.replace_all(segment, "").trim().to_string())
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// An ordered list of requested area names.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AreaQuery {
    names: Vec<String>,
}

impl AreaQuery {
    /// Parse a free-text query.
    pub fn parse(text: &str) -> Self {
        Self {
            names: parse_area_query(text),
        }
    }

    /// Take an explicit list as-is, trimming names and dropping blank ones.
    pub fn from_list<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|n| n.as_ref().trim().to_string())
                .filter(|n| !n.is_empty())
                .collect(),
        }
    }

    pub fn from_input(input: Option<&AreaInput>) -> Self {
        match input {
            Some(AreaInput::Text(text)) => Self::parse(text),
            Some(AreaInput::List(list)) => Self::from_list(list),
            None => Self::default(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Lowercased, trimmed names used for matching.
    pub fn keys(&self) -> Vec<String> {
        self.names.iter().map(|n| n.trim().to_lowercase()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_comparison(&self) -> bool {
        self.names.len() > 1
    }

    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}
