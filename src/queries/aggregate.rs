//! Yearly aggregation: mean price and summed demand per year.

use std::collections::BTreeMap;

use crate::models::{Dataset, Field, TimeSeries, YearPoint};

#[derive(Default)]
struct YearBucket {
    price_sum: f64,
    price_count: usize,
    demand_sum: f64,
}

/// Group the dataset by year.
///
/// Without a `year` column the series is empty. Rows whose year is null are
/// skipped. Price is the mean of the non-null prices in a year (`None` if the
/// year has none); demand is the sum of the non-null values (`0` if the year
/// has none). Both are `None` throughout when the column is absent.
pub fn aggregate_by_year(dataset: &Dataset) -> TimeSeries {
    if !dataset.has_field(Field::Year) {
        return TimeSeries::default();
    }

    let has_price = dataset.has_field(Field::Price);
    let has_demand = dataset.has_field(Field::Demand);

    let mut buckets: BTreeMap<i64, YearBucket> = BTreeMap::new();
    for record in dataset.records() {
        let Some(year) = record.year else {
            continue;
        };
        let bucket = buckets.entry(year).or_default();
        if let Some(price) = record.price {
            bucket.price_sum += price;
            bucket.price_count += 1;
        }
        if let Some(demand) = record.demand {
            bucket.demand_sum += demand;
        }
    }

    let points = buckets
        .into_iter()
        .map(|(year, bucket)| YearPoint {
            year,
            price: (has_price && bucket.price_count > 0)
                .then(|| bucket.price_sum / bucket.price_count as f64),
            demand: has_demand.then_some(bucket.demand_sum),
        })
        .collect();

    TimeSeries {
        points,
        has_price,
        has_demand,
    }
}

/// Mean of the non-null prices per year, for rows that have both.
pub fn yearly_mean_prices(dataset: &Dataset) -> BTreeMap<i64, f64> {
    if !dataset.has_field(Field::Price) || !dataset.has_field(Field::Year) {
        return BTreeMap::new();
    }

    let mut sums: BTreeMap<i64, (f64, usize)> = BTreeMap::new();
    for record in dataset.records() {
        if let (Some(year), Some(price)) = (record.year, record.price) {
            let entry = sums.entry(year).or_insert((0.0, 0));
            entry.0 += price;
            entry.1 += 1;
        }
    }

    sums.into_iter()
        .map(|(year, (sum, count))| (year, sum / count as f64))
        .collect()
}
