use serde::Serialize;

use crate::error::RealtyError;

// ---------------------------------------------------------------------------
// YearPoint — One aggregated year
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearPoint {
    pub year: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demand: Option<f64>,
}

// ---------------------------------------------------------------------------
// TimeSeries — Year-ordered aggregates
// ---------------------------------------------------------------------------

/// Aggregates per year, ascending, one point per distinct year.
///
/// `has_price` / `has_demand` record whether the source had those columns at
/// all, so an absent column is distinguishable from a year with no values.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TimeSeries {
    pub points: Vec<YearPoint>,
    pub has_price: bool,
    pub has_demand: bool,
}

impl TimeSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn years(&self) -> Vec<i64> {
        self.points.iter().map(|p| p.year).collect()
    }
}

// ---------------------------------------------------------------------------
// ChartSeries — Chart-ready arrays
// ---------------------------------------------------------------------------

/// Parallel arrays for one chart line set.
///
/// Prices are rounded to two decimals and demand truncated to whole units.
/// Arrays for columns the dataset lacks are empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ChartSeries {
    pub years: Vec<i64>,
    pub price: Vec<Option<f64>>,
    pub demand: Vec<i64>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

impl TryFrom<&TimeSeries> for ChartSeries {
    type Error = RealtyError;

    fn try_from(ts: &TimeSeries) -> Result<Self, Self::Error> {
        let years = ts.years();

        let price = if ts.has_price {
            ts.points
                .iter()
                .map(|p| p.price.map(|v| (v * 100.0).round() / 100.0))
                .collect()
        } else {
            Vec::new()
        };

        let demand = if ts.has_demand {
            ts.points
                .iter()
                .map(|p| {
                    let total = p.demand.unwrap_or(0.0);
                    if !total.is_finite() || total.abs() >= i64::MAX as f64 {
                        return Err(RealtyError::Aggregation(format!(
                            "demand total {total} for {} cannot be charted",
                            p.year
                        )));
                    }
                    Ok(total.trunc() as i64)
                })
                .collect::<Result<Vec<_>, _>>()?
        } else {
            Vec::new()
        };

        Ok(ChartSeries {
            years,
            price,
            demand,
        })
    }
}

// ---------------------------------------------------------------------------
// ChartPayload — Single series or per-area comparison
// ---------------------------------------------------------------------------

/// Chart section of the response.
///
/// A single selection serializes as `{years, price, demand}`; a comparison
/// as `{by_area: {<area>: {years, price, demand}}}` in request order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChartPayload {
    Single(ChartSeries),
    ByArea {
        by_area: AreaSeries,
    },
}

impl Default for ChartPayload {
    fn default() -> Self {
        ChartPayload::Single(ChartSeries::default())
    }
}

/// Per-area chart series keeping the order areas were requested in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AreaSeries {
    pub entries: Vec<(String, ChartSeries)>,
}

impl AreaSeries {
    /// Insert or replace the series for `area`. A repeated area keeps its
    /// first position.
    pub fn insert(&mut self, area: String, series: ChartSeries) {
        if let Some(slot) = self.entries.iter_mut().find(|(a, _)| *a == area) {
            slot.1 = series;
        } else {
            self.entries.push((area, series));
        }
    }

    pub fn get(&self, area: &str) -> Option<&ChartSeries> {
        self.entries.iter().find(|(a, _)| a == area).map(|(_, s)| s)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for AreaSeries {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (area, series) in &self.entries {
            map.serialize_entry(area, series)?;
        }
        map.end()
    }
}
