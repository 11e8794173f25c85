//! Area filtering over a normalized dataset.

use std::collections::HashSet;

use crate::models::{Dataset, Field};

/// Keep the rows whose area matches one of `areas`, case-insensitively.
///
/// A dataset without an `area` column yields an empty dataset. Blank names
/// are ignored and unknown names simply match nothing; row order is kept.
pub fn filter_by_areas<S: AsRef<str>>(dataset: &Dataset, areas: &[S]) -> Dataset {
    if !dataset.has_field(Field::Area) {
        return dataset.empty_like();
    }

    let wanted: HashSet<String> = areas
        .iter()
        .map(|a| a.as_ref().trim().to_lowercase())
        .filter(|a| !a.is_empty())
        .collect();

    dataset.retain_records(|record| {
        record
            .area
            .as_deref()
            .map(|area| wanted.contains(&area.trim().to_lowercase()))
            .unwrap_or(false)
    })
}

/// Distinct area names present in the dataset, in first-seen order.
pub fn distinct_areas(dataset: &Dataset) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    dataset
        .records()
        .iter()
        .filter_map(|r| r.area.clone())
        .filter(|area| seen.insert(area.to_lowercase()))
        .collect()
}
