//! Query modules over a normalized [`Dataset`](crate::models::Dataset).
//!
//! Each module is a set of pure functions: they borrow a dataset, never
//! mutate it, and return new values.

pub mod aggregate;
pub mod filter;
pub mod format;
pub mod summary;

pub use aggregate::{aggregate_by_year, yearly_mean_prices};
pub use filter::{distinct_areas, filter_by_areas};
pub use format::{format_int, format_number, format_value};
pub use summary::{compute_pct_change, price_pct_change, summarize, summary_stats};
