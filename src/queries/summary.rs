//! Deterministic templated summaries of a dataset slice.
//!
//! Two shapes are produced from the same numbers: [`summarize`] renders the
//! narrative text and [`summary_stats`] returns the raw values.

use std::collections::BTreeMap;

use crate::config::SUMMARY_TIP;
use crate::models::{Dataset, SummaryStats};

use super::aggregate::yearly_mean_prices;
use super::format::format_number;

/// Render the text summary for a slice, optionally labelled with an area.
///
/// Clauses appear in a fixed order (count, price, demand, year span, tip);
/// the price, demand and year clauses are omitted when their column is
/// missing or entirely null.
pub fn summarize(dataset: &Dataset, area_label: Option<&str>) -> String {
    if dataset.is_empty() {
        return match area_label {
            Some(label) => format!(
                "No data found for '{label}'. Please upload a dataset or try another area."
            ),
            None => "No data available.".to_string(),
        };
    }

    let stats = summary_stats(dataset);
    let mut clauses: Vec<String> = Vec::new();

    clauses.push(format!(
        "Found {} records for {}.",
        stats.record_count,
        area_label.unwrap_or("the selected area(s)")
    ));

    if let (Some(mean), Some(median)) = (stats.price_mean, stats.price_median) {
        clauses.push(format!(
            "Average price: {}; median: {}.",
            format_number(mean),
            format_number(median)
        ));
        if let Some(pct) = stats.price_pct_change {
            clauses.push(format!("Price trend (last to first): {pct:+.1}% change."));
        }
    }

    if let (Some(total), Some(mean)) = (stats.demand_total, stats.demand_mean) {
        if total.is_finite() && mean.is_finite() {
            clauses.push(format!(
                "Total demand (sum): {}; average per record: {}.",
                whole(total),
                whole(mean)
            ));
        }
    }

    if let (Some(first), Some(last)) = (stats.first_year, stats.last_year) {
        clauses.push(format!(
            "Data spans {first}–{last} ({} years).",
            stats.year_count
        ));
    }

    clauses.push(SUMMARY_TIP.to_string());
    clauses.join(" ")
}

/// Numeric summary of a slice: counts, price mean/median/trend, demand
/// total/mean and the year span.
pub fn summary_stats(dataset: &Dataset) -> SummaryStats {
    let prices = dataset.prices();
    let demands = dataset.demands();
    let years = dataset.years();

    let (price_mean, price_median, price_pct_change) = if prices.is_empty() {
        (None, None, None)
    } else {
        (
            Some(mean(&prices)),
            Some(median(&prices)),
            price_pct_change(dataset),
        )
    };

    let (demand_total, demand_mean) = if demands.is_empty() {
        (None, None)
    } else {
        (Some(demands.iter().sum::<f64>()), Some(mean(&demands)))
    };

    SummaryStats {
        record_count: dataset.len(),
        price_mean,
        price_median,
        price_pct_change,
        demand_total,
        demand_mean,
        first_year: years.first().copied(),
        last_year: years.last().copied(),
        year_count: years.len(),
    }
}

/// Percent change from the earliest to the latest year's mean price.
pub fn price_pct_change(dataset: &Dataset) -> Option<f64> {
    compute_pct_change(&yearly_mean_prices(dataset))
}

/// Percent change between the first and last entries of a per-year series.
///
/// `None` with fewer than two years, when the first value is zero (or close
/// enough to it that the ratio is meaningless), or when the result is not
/// finite.
pub fn compute_pct_change(yearly: &BTreeMap<i64, f64>) -> Option<f64> {
    if yearly.len() < 2 {
        return None;
    }
    let first = *yearly.values().next()?;
    let last = *yearly.values().next_back()?;
    if first.abs() <= 1e-8 {
        return None;
    }
    Some((last - first) / first.abs() * 100.0).filter(|pct| pct.is_finite())
}

/// Truncated to whole units without saturating at the `i64` bounds.
fn whole(value: f64) -> String {
    let truncated = value.trunc();
    if truncated == 0.0 {
        return "0".to_string();
    }
    format!("{truncated:.0}")
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}
